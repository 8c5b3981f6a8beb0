//! Data lake I/O
//!
//! The data lake is a directory of three CSV files with fixed names and
//! headers. The generator writes them; the cleaner reads them back as raw
//! rows. A missing file or a file without a required column is fatal;
//! everything else is the cleaner's problem.

mod reader;
mod writer;

pub use reader::{read_dataset, read_movies, read_ratings, read_users};
pub use writer::write_dataset;

/// File name of the movies collection
pub const MOVIES_FILE: &str = "movies.csv";

/// File name of the users collection
pub const USERS_FILE: &str = "users.csv";

/// File name of the ratings collection
pub const RATINGS_FILE: &str = "ratings.csv";

/// Required columns of `movies.csv`
pub const MOVIE_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "genre",
    "release_year",
    "director",
    "country",
    "duration",
    "created_at",
];

/// Required columns of `users.csv`
pub const USER_COLUMNS: [&str; 6] = ["id", "name", "email", "age", "country", "created_at"];

/// Required columns of `ratings.csv`
pub const RATING_COLUMNS: [&str; 6] = [
    "id",
    "movie_id",
    "user_id",
    "rating",
    "comment",
    "created_at",
];
