//! Record types for the three pipeline entities
//!
//! Each entity exists in two shapes: a raw shape in which every field is
//! optional text (the data lake makes no promises), and a cleaned shape
//! with concrete scalars. Only the cleaner converts one into the other.
//! `created_at` stays optional text in both shapes; the sinks render an
//! absent or blank timestamp as the database's current time.

use serde::{Deserialize, Serialize};

// ============================================================================
// Cleaned Records
// ============================================================================

/// A movie in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique movie id
    pub id: i64,
    /// Title (non-empty after cleaning)
    pub title: String,
    /// Comma-separated genre list ("Unknown" when absent)
    pub genre: String,
    /// Release year, within [1900, current year] after cleaning
    pub release_year: i32,
    /// Director ("Unknown" when absent)
    pub director: String,
    /// Production country ("Unknown" when absent)
    pub country: String,
    /// Runtime in minutes, positive after cleaning
    pub duration: i32,
    /// Creation timestamp as text, `None` means "now" at load time
    pub created_at: Option<String>,
}

impl Movie {
    /// First entry of the comma-separated genre list
    pub fn primary_genre(&self) -> &str {
        self.genre.split(',').next().unwrap_or("").trim()
    }
}

/// A streaming service user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: i64,
    /// Full name (non-empty after cleaning)
    pub name: String,
    /// Email address (contains "@" after cleaning)
    pub email: String,
    /// Age, within [13, 120] after cleaning
    pub age: i32,
    /// Country of residence ("Unknown" when absent)
    pub country: String,
    /// Creation timestamp as text, `None` means "now" at load time
    pub created_at: Option<String>,
}

/// A user's rating of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Unique rating id
    pub id: i64,
    /// Rated movie (existence is not checked by this pipeline)
    pub movie_id: i64,
    /// Rating author (existence is not checked by this pipeline)
    pub user_id: i64,
    /// Score, within [1, 5] after cleaning
    pub rating: i32,
    /// Free-text comment, empty when the user left none
    pub comment: String,
    /// Creation timestamp as text, `None` means "now" at load time
    pub created_at: Option<String>,
}

/// The three record collections the pipeline moves between stages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Movie records
    pub movies: Vec<Movie>,
    /// User records
    pub users: Vec<User>,
    /// Rating records
    pub ratings: Vec<Rating>,
}

impl Dataset {
    /// True when all three collections are empty
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.users.is_empty() && self.ratings.is_empty()
    }
}

// ============================================================================
// Raw Records
// ============================================================================

/// A movie row as read from `movies.csv`, before any validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    pub id: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<String>,
    pub director: Option<String>,
    pub country: Option<String>,
    pub duration: Option<String>,
    pub created_at: Option<String>,
}

/// A user row as read from `users.csv`, before any validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub country: Option<String>,
    pub created_at: Option<String>,
}

/// A rating row as read from `ratings.csv`, before any validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRating {
    pub id: Option<String>,
    pub movie_id: Option<String>,
    pub user_id: Option<String>,
    pub rating: Option<String>,
    pub comment: Option<String>,
    pub created_at: Option<String>,
}

/// The three raw collections read from the data lake
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    /// Raw movie rows
    pub movies: Vec<RawMovie>,
    /// Raw user rows
    pub users: Vec<RawUser>,
    /// Raw rating rows
    pub ratings: Vec<RawRating>,
}

// ============================================================================
// Cleaned → Raw Conversions
// ============================================================================
//
// The cleaner consumes raw rows, so feeding a cleaned collection back
// through it (e.g. to check the fixed-point property) goes via these.

impl From<&Movie> for RawMovie {
    fn from(m: &Movie) -> Self {
        Self {
            id: Some(m.id.to_string()),
            title: none_if_empty(&m.title),
            genre: none_if_empty(&m.genre),
            release_year: Some(m.release_year.to_string()),
            director: none_if_empty(&m.director),
            country: none_if_empty(&m.country),
            duration: Some(m.duration.to_string()),
            created_at: m.created_at.clone(),
        }
    }
}

impl From<&User> for RawUser {
    fn from(u: &User) -> Self {
        Self {
            id: Some(u.id.to_string()),
            name: none_if_empty(&u.name),
            email: none_if_empty(&u.email),
            age: Some(u.age.to_string()),
            country: none_if_empty(&u.country),
            created_at: u.created_at.clone(),
        }
    }
}

impl From<&Rating> for RawRating {
    fn from(r: &Rating) -> Self {
        Self {
            id: Some(r.id.to_string()),
            movie_id: Some(r.movie_id.to_string()),
            user_id: Some(r.user_id.to_string()),
            rating: Some(r.rating.to_string()),
            comment: none_if_empty(&r.comment),
            created_at: r.created_at.clone(),
        }
    }
}

impl From<&Dataset> for RawDataset {
    fn from(data: &Dataset) -> Self {
        Self {
            movies: data.movies.iter().map(RawMovie::from).collect(),
            users: data.users.iter().map(RawUser::from).collect(),
            ratings: data.ratings.iter().map(RawRating::from).collect(),
        }
    }
}

fn none_if_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
