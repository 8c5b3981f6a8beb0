//! Cleaning rule tests

use super::*;
use crate::model::{RawDataset, RawMovie, RawRating, RawUser};
use pretty_assertions::assert_eq;

const YEAR: i32 = 2026;

fn cleaner() -> Cleaner {
    Cleaner::with_current_year(YEAR)
}

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn raw_movie(id: &str, title: &str, year: &str, duration: &str) -> RawMovie {
    RawMovie {
        id: s(id),
        title: s(title),
        genre: s("Drama"),
        release_year: s(year),
        director: s("Walter Salles"),
        country: s("Brasil"),
        duration: s(duration),
        created_at: None,
    }
}

fn raw_user(id: &str, name: &str, email: &str, age: &str) -> RawUser {
    RawUser {
        id: s(id),
        name: s(name),
        email: s(email),
        age: s(age),
        country: s("Brasil"),
        created_at: None,
    }
}

fn raw_rating(id: &str, movie_id: &str, user_id: &str, rating: &str) -> RawRating {
    RawRating {
        id: s(id),
        movie_id: s(movie_id),
        user_id: s(user_id),
        rating: s(rating),
        comment: s("ok"),
        created_at: None,
    }
}

// ============================================================================
// Movie Rules
// ============================================================================

#[test]
fn test_movie_title_rule() {
    let rows = vec![
        raw_movie("1", "Central do Brasil", "1998", "110"),
        RawMovie {
            title: None,
            ..raw_movie("2", "", "2001", "90")
        },
        RawMovie {
            title: s(""),
            ..raw_movie("3", "", "2001", "90")
        },
    ];
    let (movies, stats) = cleaner().clean_movies(&rows);
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Central do Brasil");
    assert_eq!(stats.missing_title, 2);
}

#[test]
fn test_movie_year_bounds_are_inclusive() {
    let rows = vec![
        raw_movie("1", "A", "1900", "90"),
        raw_movie("2", "B", &YEAR.to_string(), "90"),
        raw_movie("3", "C", "1899", "90"),
        raw_movie("4", "D", &(YEAR + 1).to_string(), "90"),
        raw_movie("5", "E", "not-a-year", "90"),
    ];
    let (movies, stats) = cleaner().clean_movies(&rows);
    let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(stats.invalid_release_year, 3);
}

#[test]
fn test_movie_duration_rule() {
    let rows = vec![
        raw_movie("1", "A", "2000", "1"),
        raw_movie("2", "B", "2000", "0"),
        raw_movie("3", "C", "2000", "-120"),
    ];
    let (movies, stats) = cleaner().clean_movies(&rows);
    assert_eq!(movies.len(), 1);
    assert_eq!(stats.invalid_duration, 2);
}

#[test]
fn test_movie_fill_rules() {
    let rows = vec![RawMovie {
        genre: None,
        director: s(""),
        country: None,
        ..raw_movie("1", "A", "2000", "90")
    }];
    let (movies, stats) = cleaner().clean_movies(&rows);
    assert_eq!(movies[0].genre, UNKNOWN);
    assert_eq!(movies[0].director, UNKNOWN);
    assert_eq!(movies[0].country, UNKNOWN);
    assert_eq!(stats.filled_genre, 1);
    assert_eq!(stats.filled_director, 1);
    assert_eq!(stats.filled_country, 1);
}

#[test]
fn test_movie_rule_order_drops_early() {
    // A row with an empty title and a bad year counts against the title
    // rule only: rules run in order and drop at the first failure.
    let rows = vec![RawMovie {
        title: None,
        ..raw_movie("1", "", "2050", "-5")
    }];
    let (movies, stats) = cleaner().clean_movies(&rows);
    assert!(movies.is_empty());
    assert_eq!(stats.missing_title, 1);
    assert_eq!(stats.invalid_release_year, 0);
    assert_eq!(stats.invalid_duration, 0);
}

// ============================================================================
// User Rules
// ============================================================================

#[test]
fn test_user_scenario_from_lake() {
    // Row 1 is valid; row 2 has an empty name; row 3 has a bad age and a
    // bad email. Only row 1 survives.
    let rows = vec![
        raw_user("1", "Ana", "ana@x.com", "30"),
        raw_user("2", "", "bad@x.com", "30"),
        raw_user("3", "Bob", "no-at-sign", "200"),
    ];
    let (users, stats) = cleaner().clean_users(&rows);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "Ana");
    assert_eq!(stats.missing_name, 1);
    // Row 3 fails the age rule before the email rule is ever evaluated
    assert_eq!(stats.invalid_age, 1);
    assert_eq!(stats.invalid_email, 0);
}

#[test]
fn test_user_age_bounds_are_inclusive() {
    let rows = vec![
        raw_user("1", "A", "a@x.com", "13"),
        raw_user("2", "B", "b@x.com", "120"),
        raw_user("3", "C", "c@x.com", "12"),
        raw_user("4", "D", "d@x.com", "121"),
        raw_user("5", "E", "e@x.com", "150"),
    ];
    let (users, stats) = cleaner().clean_users(&rows);
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(stats.invalid_age, 3);
}

#[test]
fn test_user_email_rule() {
    let rows = vec![
        raw_user("1", "A", "a@x.com", "30"),
        raw_user("2", "B", "email_invalido", "30"),
        RawUser {
            email: None,
            ..raw_user("3", "C", "", "30")
        },
    ];
    let (users, stats) = cleaner().clean_users(&rows);
    assert_eq!(users.len(), 1);
    assert_eq!(stats.invalid_email, 2);
}

#[test]
fn test_user_country_fill() {
    let rows = vec![RawUser {
        country: s(""),
        ..raw_user("1", "A", "a@x.com", "30")
    }];
    let (users, stats) = cleaner().clean_users(&rows);
    assert_eq!(users[0].country, UNKNOWN);
    assert_eq!(stats.filled_country, 1);
}

// ============================================================================
// Rating Rules
// ============================================================================

#[test]
fn test_rating_range_is_inclusive() {
    let rows = vec![
        raw_rating("1", "1", "1", "1"),
        raw_rating("2", "1", "2", "5"),
        raw_rating("3", "1", "3", "0"),
        raw_rating("4", "1", "4", "6"),
        raw_rating("5", "1", "5", "10"),
    ];
    let (ratings, stats) = cleaner().clean_ratings(&rows);
    let ids: Vec<i64> = ratings.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(stats.invalid_rating, 3);
}

#[test]
fn test_rating_last_write_wins() {
    // Two ratings for the same (user, movie) pair: the later row wins,
    // regardless of score.
    let rows = vec![
        raw_rating("10", "5", "1", "4"),
        raw_rating("11", "5", "1", "2"),
    ];
    let (ratings, stats) = cleaner().clean_ratings(&rows);
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].id, 11);
    assert_eq!(ratings[0].rating, 2);
    assert_eq!(stats.duplicate_pair, 1);
}

#[test]
fn test_rating_dedup_preserves_input_order() {
    let rows = vec![
        raw_rating("1", "1", "1", "3"),
        raw_rating("2", "2", "1", "4"),
        raw_rating("3", "1", "1", "5"), // replaces id 1
        raw_rating("4", "3", "2", "2"),
    ];
    let (ratings, _) = cleaner().clean_ratings(&rows);
    let ids: Vec<i64> = ratings.iter().map(|r| r.id).collect();
    // The survivor of a duplicate pair keeps its (last) position
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_rating_comment_fill() {
    let rows = vec![RawRating {
        comment: None,
        ..raw_rating("1", "1", "1", "4")
    }];
    let (ratings, stats) = cleaner().clean_ratings(&rows);
    assert_eq!(ratings[0].comment, "");
    assert_eq!(stats.filled_comment, 1);
}

// ============================================================================
// Whole-Dataset Properties
// ============================================================================

fn messy_dataset() -> RawDataset {
    RawDataset {
        movies: vec![
            raw_movie("1", "Cidade de Deus", "2002", "130"),
            RawMovie {
                genre: None,
                ..raw_movie("2", "O Auto da Compadecida", "2000", "104")
            },
            raw_movie("3", "Future Movie", "2050", "100"),
            RawMovie {
                title: None,
                ..raw_movie("4", "", "1990", "95")
            },
        ],
        users: vec![
            raw_user("1", "Ana", "ana@x.com", "30"),
            RawUser {
                country: None,
                ..raw_user("2", "Bob", "bob@x.com", "45")
            },
            raw_user("3", "Eve", "not-an-email", "25"),
        ],
        ratings: vec![
            raw_rating("1", "1", "1", "5"),
            raw_rating("2", "1", "1", "3"),
            RawRating {
                comment: None,
                ..raw_rating("3", "2", "2", "4")
            },
            raw_rating("4", "2", "1", "7"),
        ],
    }
}

#[test]
fn test_clean_is_deterministic() {
    let raw = messy_dataset();
    let c = cleaner();
    let (first, first_report) = c.clean(&raw);
    let (second, second_report) = c.clean(&raw);
    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn test_clean_is_idempotent() {
    let raw = messy_dataset();
    let c = cleaner();
    let (cleaned, _) = c.clean(&raw);

    let recleaned_input = RawDataset::from(&cleaned);
    let (recleaned, report) = c.clean(&recleaned_input);

    assert_eq!(cleaned, recleaned);
    assert_eq!(report.dropped_total(), 0);
}

#[test]
fn test_cleaned_dataset_satisfies_invariants() {
    let (data, _) = cleaner().clean(&messy_dataset());

    for movie in &data.movies {
        assert!(!movie.title.is_empty());
        assert!((MIN_RELEASE_YEAR..=YEAR).contains(&movie.release_year));
        assert!(movie.duration > 0);
        assert!(!movie.genre.is_empty());
        assert!(!movie.director.is_empty());
        assert!(!movie.country.is_empty());
    }
    for user in &data.users {
        assert!(!user.name.is_empty());
        assert!(AGE_RANGE.contains(&user.age));
        assert!(user.email.contains('@'));
        assert!(!user.country.is_empty());
    }
    let mut pairs = std::collections::HashSet::new();
    for rating in &data.ratings {
        assert!(RATING_RANGE.contains(&rating.rating));
        assert!(pairs.insert((rating.user_id, rating.movie_id)));
    }
}

#[test]
fn test_report_render_mentions_counts() {
    let (_, report) = cleaner().clean(&messy_dataset());
    let text = report.render();
    assert!(text.contains("movies:"));
    assert!(text.contains("users:"));
    assert!(text.contains("ratings:"));
}
