//! CSV readers for the data lake
//!
//! Rows come back in their untrusted raw shape; only structural problems
//! (missing file, missing column) abort a read.

use super::{MOVIES_FILE, MOVIE_COLUMNS, RATINGS_FILE, RATING_COLUMNS, USERS_FILE, USER_COLUMNS};
use crate::error::{Error, Result};
use crate::model::{RawDataset, RawMovie, RawRating, RawUser};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read all three raw collections from the lake directory
pub fn read_dataset(lake_dir: impl AsRef<Path>) -> Result<RawDataset> {
    let lake_dir = lake_dir.as_ref();
    Ok(RawDataset {
        movies: read_movies(lake_dir)?,
        users: read_users(lake_dir)?,
        ratings: read_ratings(lake_dir)?,
    })
}

/// Read raw movie rows from `movies.csv`
pub fn read_movies(lake_dir: impl AsRef<Path>) -> Result<Vec<RawMovie>> {
    read_file(lake_dir.as_ref(), MOVIES_FILE, &MOVIE_COLUMNS)
}

/// Read raw user rows from `users.csv`
pub fn read_users(lake_dir: impl AsRef<Path>) -> Result<Vec<RawUser>> {
    read_file(lake_dir.as_ref(), USERS_FILE, &USER_COLUMNS)
}

/// Read raw rating rows from `ratings.csv`
pub fn read_ratings(lake_dir: impl AsRef<Path>) -> Result<Vec<RawRating>> {
    read_file(lake_dir.as_ref(), RATINGS_FILE, &RATING_COLUMNS)
}

/// Read one lake file into raw rows, validating its header first
fn read_file<T: DeserializeOwned>(
    lake_dir: &Path,
    file_name: &str,
    required_columns: &[&str],
) -> Result<Vec<T>> {
    let path = lake_dir.join(file_name);
    if !path.exists() {
        return Err(Error::source_missing(path.display().to_string()));
    }

    // flexible(true) tolerates ragged rows; missing trailing fields come
    // back as absent values rather than hard errors.
    let mut reader = ReaderBuilder::new().flexible(true).from_path(&path)?;

    let headers = reader.headers()?.clone();
    for column in required_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(Error::missing_column(file_name, *column));
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        rows.push(record?);
    }

    tracing::debug!(file = file_name, rows = rows.len(), "read lake file");
    Ok(rows)
}
