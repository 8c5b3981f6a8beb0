//! CSV writers for the data lake
//!
//! Serializes a generated `Dataset` into the three lake files. Headers
//! come from the record structs, so they always match the documented
//! column lists.

use super::{MOVIES_FILE, RATINGS_FILE, USERS_FILE};
use crate::error::Result;
use crate::model::Dataset;
use serde::Serialize;
use std::path::Path;

/// Write all three collections into the lake directory, creating it if
/// needed. Existing files are overwritten.
pub fn write_dataset(lake_dir: impl AsRef<Path>, data: &Dataset) -> Result<()> {
    let lake_dir = lake_dir.as_ref();
    std::fs::create_dir_all(lake_dir)?;

    write_file(lake_dir.join(MOVIES_FILE), &data.movies)?;
    write_file(lake_dir.join(USERS_FILE), &data.users)?;
    write_file(lake_dir.join(RATINGS_FILE), &data.ratings)?;

    tracing::info!(
        lake_dir = %lake_dir.display(),
        movies = data.movies.len(),
        users = data.users.len(),
        ratings = data.ratings.len(),
        "wrote data lake"
    );
    Ok(())
}

fn write_file<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
