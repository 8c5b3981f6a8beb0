//! Cleaning report types
//!
//! One counter per validation rule, per entity. Dropped rows are counted
//! but never individually reported; fills count rows that were modified
//! in place rather than removed.

use serde::Serialize;

/// Per-rule counters for the movie collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieCleanStats {
    /// Rows read from the lake
    pub input: usize,
    /// Rows that survived every rule
    pub kept: usize,
    /// Dropped: id absent or not an integer
    pub missing_id: usize,
    /// Dropped: title absent or empty
    pub missing_title: usize,
    /// Dropped: release year outside [1900, current year]
    pub invalid_release_year: usize,
    /// Dropped: duration not a positive integer
    pub invalid_duration: usize,
    /// Filled: blank genre replaced with "Unknown"
    pub filled_genre: usize,
    /// Filled: blank director replaced with "Unknown"
    pub filled_director: usize,
    /// Filled: blank country replaced with "Unknown"
    pub filled_country: usize,
}

/// Per-rule counters for the user collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserCleanStats {
    /// Rows read from the lake
    pub input: usize,
    /// Rows that survived every rule
    pub kept: usize,
    /// Dropped: id absent or not an integer
    pub missing_id: usize,
    /// Dropped: name absent or empty
    pub missing_name: usize,
    /// Dropped: age outside [13, 120]
    pub invalid_age: usize,
    /// Dropped: email without an "@"
    pub invalid_email: usize,
    /// Filled: blank country replaced with "Unknown"
    pub filled_country: usize,
}

/// Per-rule counters for the rating collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RatingCleanStats {
    /// Rows read from the lake
    pub input: usize,
    /// Rows that survived every rule
    pub kept: usize,
    /// Dropped: id absent or not an integer
    pub missing_id: usize,
    /// Dropped: score outside [1, 5]
    pub invalid_rating: usize,
    /// Dropped: earlier occurrence of a duplicate (user, movie) pair
    pub duplicate_pair: usize,
    /// Filled: absent comment replaced with an empty string
    pub filled_comment: usize,
}

/// The full cleaning report for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Movie counters
    pub movies: MovieCleanStats,
    /// User counters
    pub users: UserCleanStats,
    /// Rating counters
    pub ratings: RatingCleanStats,
}

/// Retention as a percentage of input rows; an empty input is 100%
fn retention(input: usize, kept: usize) -> String {
    if input == 0 {
        return "100.0% kept".to_string();
    }
    format!("{:.1}% kept", kept as f64 / input as f64 * 100.0)
}

impl MovieCleanStats {
    /// Rows removed by any rule
    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

impl UserCleanStats {
    /// Rows removed by any rule
    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

impl RatingCleanStats {
    /// Rows removed by any rule
    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

impl CleanReport {
    /// Total rows removed across all three collections
    pub fn dropped_total(&self) -> usize {
        self.movies.dropped() + self.users.dropped() + self.ratings.dropped()
    }

    /// Human-readable multi-line summary
    pub fn render(&self) -> String {
        let m = &self.movies;
        let u = &self.users;
        let r = &self.ratings;
        let mut out = String::new();
        out.push_str("Data cleaning report\n");
        out.push_str(&format!(
            "  movies:  {} -> {} ({}; dropped: id {}, title {}, release_year {}, duration {}; \
             filled: genre {}, director {}, country {})\n",
            m.input,
            m.kept,
            retention(m.input, m.kept),
            m.missing_id,
            m.missing_title,
            m.invalid_release_year,
            m.invalid_duration,
            m.filled_genre,
            m.filled_director,
            m.filled_country
        ));
        out.push_str(&format!(
            "  users:   {} -> {} ({}; dropped: id {}, name {}, age {}, email {}; filled: country {})\n",
            u.input,
            u.kept,
            retention(u.input, u.kept),
            u.missing_id,
            u.missing_name,
            u.invalid_age,
            u.invalid_email,
            u.filled_country
        ));
        out.push_str(&format!(
            "  ratings: {} -> {} ({}; dropped: id {}, rating {}, duplicates {}; filled: comment {})\n",
            r.input,
            r.kept,
            retention(r.input, r.kept),
            r.missing_id,
            r.invalid_rating,
            r.duplicate_pair,
            r.filled_comment
        ));
        out
    }
}
