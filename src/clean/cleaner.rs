//! Validation and normalization rules
//!
//! The cleaner turns raw lake rows into typed records. Rules run in a
//! fixed order per entity and a row is dropped as soon as any predicate
//! fails; fill rules modify surviving rows in place. The input is never
//! mutated; a new collection comes out.
//!
//! Malformed rows are filtered, not errored: a field that fails to parse
//! counts against the rule that checks it. The only fatal failures live
//! upstream in the lake reader.

use super::types::{CleanReport, MovieCleanStats, RatingCleanStats, UserCleanStats};
use crate::model::{Dataset, Movie, Rating, RawDataset, RawMovie, RawRating, RawUser, User};
use chrono::{Datelike, Local};
use std::collections::HashMap;

/// Default text for blank genre, director, and country fields
pub const UNKNOWN: &str = "Unknown";

/// Oldest accepted release year
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// Accepted user age range, inclusive on both ends
pub const AGE_RANGE: std::ops::RangeInclusive<i32> = 13..=120;

/// Accepted rating score range, inclusive on both ends
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Applies the per-entity cleaning rules
///
/// The release-year upper bound is the wall-clock year captured when the
/// cleaner is constructed, so results within one calendar year are
/// deterministic for identical inputs.
#[derive(Debug, Clone)]
pub struct Cleaner {
    current_year: i32,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl Cleaner {
    /// Create a cleaner bound to the current calendar year
    pub fn new() -> Self {
        Self {
            current_year: Local::now().year(),
        }
    }

    /// Create a cleaner with a fixed upper year bound (for tests)
    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Clean all three collections and report per-rule counters
    pub fn clean(&self, raw: &RawDataset) -> (Dataset, CleanReport) {
        let (movies, movie_stats) = self.clean_movies(&raw.movies);
        let (users, user_stats) = self.clean_users(&raw.users);
        let (ratings, rating_stats) = self.clean_ratings(&raw.ratings);

        let report = CleanReport {
            movies: movie_stats,
            users: user_stats,
            ratings: rating_stats,
        };
        tracing::info!(
            movies = report.movies.kept,
            users = report.users.kept,
            ratings = report.ratings.kept,
            dropped = report.dropped_total(),
            "cleaned dataset"
        );

        let data = Dataset {
            movies,
            users,
            ratings,
        };
        (data, report)
    }

    /// Clean the movie collection
    ///
    /// Rule order: title → release year → duration → fill genre →
    /// fill director → fill country.
    pub fn clean_movies(&self, rows: &[RawMovie]) -> (Vec<Movie>, MovieCleanStats) {
        let mut stats = MovieCleanStats {
            input: rows.len(),
            ..MovieCleanStats::default()
        };
        let mut movies = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(id) = parse_i64(&row.id) else {
                stats.missing_id += 1;
                continue;
            };

            let title = match non_blank(&row.title) {
                Some(t) => t.to_string(),
                None => {
                    stats.missing_title += 1;
                    continue;
                }
            };

            let release_year = match parse_i32(&row.release_year) {
                Some(y) if (MIN_RELEASE_YEAR..=self.current_year).contains(&y) => y,
                _ => {
                    stats.invalid_release_year += 1;
                    continue;
                }
            };

            let duration = match parse_i32(&row.duration) {
                Some(d) if d > 0 => d,
                _ => {
                    stats.invalid_duration += 1;
                    continue;
                }
            };

            let genre = fill_blank(&row.genre, &mut stats.filled_genre);
            let director = fill_blank(&row.director, &mut stats.filled_director);
            let country = fill_blank(&row.country, &mut stats.filled_country);

            movies.push(Movie {
                id,
                title,
                genre,
                release_year,
                director,
                country,
                duration,
                created_at: non_blank(&row.created_at).map(ToString::to_string),
            });
            stats.kept += 1;
        }

        (movies, stats)
    }

    /// Clean the user collection
    ///
    /// Rule order: name → age → fill country → email.
    pub fn clean_users(&self, rows: &[RawUser]) -> (Vec<User>, UserCleanStats) {
        let mut stats = UserCleanStats {
            input: rows.len(),
            ..UserCleanStats::default()
        };
        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(id) = parse_i64(&row.id) else {
                stats.missing_id += 1;
                continue;
            };

            let name = match non_blank(&row.name) {
                Some(n) => n.to_string(),
                None => {
                    stats.missing_name += 1;
                    continue;
                }
            };

            let age = match parse_i32(&row.age) {
                Some(a) if AGE_RANGE.contains(&a) => a,
                _ => {
                    stats.invalid_age += 1;
                    continue;
                }
            };

            let country = fill_blank(&row.country, &mut stats.filled_country);

            let email = match row.email.as_deref() {
                Some(e) if e.contains('@') => e.to_string(),
                _ => {
                    stats.invalid_email += 1;
                    continue;
                }
            };

            users.push(User {
                id,
                name,
                email,
                age,
                country,
                created_at: non_blank(&row.created_at).map(ToString::to_string),
            });
            stats.kept += 1;
        }

        (users, stats)
    }

    /// Clean the rating collection
    ///
    /// Rule order: score range → collapse duplicate (user, movie) pairs
    /// keeping the last occurrence in input order → fill comment.
    /// Surviving rows keep their original relative positions.
    pub fn clean_ratings(&self, rows: &[RawRating]) -> (Vec<Rating>, RatingCleanStats) {
        let mut stats = RatingCleanStats {
            input: rows.len(),
            ..RatingCleanStats::default()
        };
        let mut ratings = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(id) = parse_i64(&row.id) else {
                stats.missing_id += 1;
                continue;
            };
            let (Some(movie_id), Some(user_id)) = (parse_i64(&row.movie_id), parse_i64(&row.user_id))
            else {
                stats.missing_id += 1;
                continue;
            };

            let rating = match parse_i32(&row.rating) {
                Some(r) if RATING_RANGE.contains(&r) => r,
                _ => {
                    stats.invalid_rating += 1;
                    continue;
                }
            };

            let comment = match non_blank(&row.comment) {
                Some(c) => c.to_string(),
                None => {
                    stats.filled_comment += 1;
                    String::new()
                }
            };

            ratings.push(Rating {
                id,
                movie_id,
                user_id,
                rating,
                comment,
                created_at: non_blank(&row.created_at).map(ToString::to_string),
            });
        }

        // Last-write-wins on (user_id, movie_id): record the index of the
        // last occurrence of each pair, then keep only those rows.
        let before_dedup = ratings.len();
        let mut last_seen: HashMap<(i64, i64), usize> = HashMap::new();
        for (i, r) in ratings.iter().enumerate() {
            last_seen.insert((r.user_id, r.movie_id), i);
        }
        let mut index = 0;
        ratings.retain(|r| {
            let keep = last_seen[&(r.user_id, r.movie_id)] == index;
            index += 1;
            keep
        });
        stats.duplicate_pair = before_dedup - ratings.len();
        stats.kept = ratings.len();

        (ratings, stats)
    }
}

fn parse_i64(field: &Option<String>) -> Option<i64> {
    field.as_deref()?.trim().parse().ok()
}

fn parse_i32(field: &Option<String>) -> Option<i32> {
    field.as_deref()?.trim().parse().ok()
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        Some(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn fill_blank(field: &Option<String>, filled: &mut usize) -> String {
    match non_blank(field) {
        Some(s) => s.to_string(),
        None => {
            *filled += 1;
            UNKNOWN.to_string()
        }
    }
}
