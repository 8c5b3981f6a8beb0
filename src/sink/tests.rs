//! Sink tests: script rendering and warehouse loading

use super::*;
use crate::model::{Dataset, Movie, Rating, User};
use pretty_assertions::assert_eq;

fn sample_user(id: i64) -> User {
    User {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@email.com"),
        age: 30,
        country: "Brasil".to_string(),
        created_at: Some("2024-01-10 08:30:00".to_string()),
    }
}

fn sample_movie(id: i64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        genre: "Drama".to_string(),
        release_year: 2001,
        director: "Walter Salles".to_string(),
        country: "Brasil".to_string(),
        duration: 110,
        created_at: Some("2024-01-10 08:30:00".to_string()),
    }
}

fn sample_rating(id: i64, movie_id: i64, user_id: i64, rating: i32) -> Rating {
    Rating {
        id,
        movie_id,
        user_id,
        rating,
        comment: String::new(),
        created_at: None,
    }
}

fn sample_dataset() -> Dataset {
    Dataset {
        movies: vec![sample_movie(1), sample_movie(2)],
        users: vec![sample_user(1), sample_user(2), sample_user(3)],
        ratings: vec![
            sample_rating(1, 1, 1, 5),
            sample_rating(2, 1, 2, 3),
            sample_rating(3, 2, 1, 4),
        ],
    }
}

// ============================================================================
// Script Renderer
// ============================================================================

#[test]
fn test_script_preamble_order() {
    let script = render_script_at(&sample_dataset(), "2026-01-01 00:00:00");

    let ratings_delete = script.find("DELETE FROM ratings;").unwrap();
    let movies_delete = script.find("DELETE FROM movies;").unwrap();
    let users_delete = script.find("DELETE FROM users;").unwrap();
    assert!(ratings_delete < movies_delete);
    assert!(movies_delete < users_delete);

    // Inserts follow the opposite entity order: users, movies, ratings
    let first_user = script.find("INSERT INTO users").unwrap();
    let first_movie = script.find("INSERT INTO movies").unwrap();
    let first_rating = script.find("INSERT INTO ratings").unwrap();
    assert!(users_delete < first_user);
    assert!(first_user < first_movie);
    assert!(first_movie < first_rating);
}

#[test]
fn test_script_escapes_single_quotes() {
    let mut data = sample_dataset();
    data.movies[0].title = "O'Brien".to_string();
    data.movies[0].director = "D'Arcy".to_string();

    let script = render_script_at(&data, "2026-01-01 00:00:00");
    assert!(script.contains("'O''Brien'"));
    assert!(script.contains("'D''Arcy'"));
}

#[test]
fn test_script_timestamp_handling() {
    let mut data = sample_dataset();
    data.users[0].created_at = Some("2023-05-05 12:00:00".to_string());
    data.users[1].created_at = None;
    data.users[2].created_at = Some("   ".to_string());

    let script = render_script_at(&data, "2026-01-01 00:00:00");
    assert!(script.contains("'2023-05-05 12:00:00');"));

    // Absent and blank timestamps both render as NOW()
    let user_lines: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("INSERT INTO users"))
        .collect();
    assert_eq!(user_lines.len(), 3);
    assert!(user_lines[1].ends_with("NOW());"));
    assert!(user_lines[2].ends_with("NOW());"));
}

#[test]
fn test_script_single_line_inserts_and_counts() {
    let data = sample_dataset();
    let script = render_script_at(&data, "2026-01-01 00:00:00");

    assert_eq!(
        script
            .lines()
            .filter(|l| l.starts_with("INSERT INTO movies"))
            .count(),
        2
    );
    assert!(script.contains("-- Generated at: 2026-01-01 00:00:00"));
    assert!(script.contains("-- Users: 3 inserted"));
    assert!(script.contains("-- Movies: 2 inserted"));
    assert!(script.contains("-- Ratings: 3 inserted"));
}

#[test]
fn test_script_is_deterministic_given_timestamp() {
    let data = sample_dataset();
    let a = render_script_at(&data, "2026-01-01 00:00:00");
    let b = render_script_at(&data, "2026-01-01 00:00:00");
    assert_eq!(a, b);
}

// ============================================================================
// Warehouse Loader
// ============================================================================

fn empty_warehouse() -> Warehouse {
    let wh = Warehouse::open_in_memory().unwrap();
    wh.execute_batch(WAREHOUSE_SCHEMA).unwrap();
    wh
}

#[test]
fn test_load_counts_and_metrics() {
    let mut wh = empty_warehouse();
    let report = wh.load(&sample_dataset()).unwrap();

    assert_eq!(report.users_loaded, 3);
    assert_eq!(report.movies_loaded, 2);
    assert_eq!(report.ratings_loaded, 3);
    assert_eq!(report.users_in_warehouse, 3);
    assert_eq!(report.movies_in_warehouse, 2);
    assert_eq!(report.ratings_in_warehouse, 3);

    // Ratings 5, 3, 4 → mean 4.0; two distinct raters, two rated movies
    assert!((report.average_rating - 4.0).abs() < 1e-9);
    assert_eq!(report.active_users, 2);
    assert_eq!(report.rated_movies, 2);
}

#[test]
fn test_load_is_full_table_replace() {
    let mut wh = empty_warehouse();
    wh.load(&sample_dataset()).unwrap();

    let smaller = Dataset {
        movies: vec![sample_movie(9)],
        users: vec![sample_user(9)],
        ratings: vec![sample_rating(9, 9, 9, 2)],
    };
    let report = wh.load(&smaller).unwrap();

    // Second load replaces, not appends
    assert_eq!(report.users_in_warehouse, 1);
    assert_eq!(report.movies_in_warehouse, 1);
    assert_eq!(report.ratings_in_warehouse, 1);
}

#[test]
fn test_failed_load_commits_nothing() {
    let mut wh = empty_warehouse();
    wh.load(&sample_dataset()).unwrap();

    // Duplicate rating id violates the primary key mid-insert
    let mut bad = sample_dataset();
    bad.ratings.push(sample_rating(1, 2, 3, 4));
    let err = wh.load(&bad).unwrap_err();
    assert!(err.to_string().contains("failed to insert rating"));

    // The previous contents are still intact: neither the DELETEs nor
    // any of the new inserts persisted.
    assert_eq!(wh.count("users").unwrap(), 3);
    assert_eq!(wh.count("movies").unwrap(), 2);
    assert_eq!(wh.count("ratings").unwrap(), 3);
}

#[test]
fn test_load_into_empty_ratings_reports_zero_metrics() {
    let mut wh = empty_warehouse();
    let data = Dataset {
        movies: vec![sample_movie(1)],
        users: vec![sample_user(1)],
        ratings: vec![],
    };
    let report = wh.load(&data).unwrap();
    assert_eq!(report.ratings_in_warehouse, 0);
    assert!((report.average_rating - 0.0).abs() < 1e-9);
    assert_eq!(report.active_users, 0);
    assert_eq!(report.rated_movies, 0);
}

#[test]
fn test_report_render_mentions_metrics() {
    let mut wh = empty_warehouse();
    let report = wh.load(&sample_dataset()).unwrap();
    let text = report.render();
    assert!(text.contains("average rating: 4.00"));
    assert!(text.contains("active users:   2"));
}
