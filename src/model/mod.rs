//! Data model
//!
//! Raw and cleaned record types for the three entities (movies, users,
//! ratings) plus the `Dataset`/`RawDataset` bundles that move between
//! pipeline stages.

mod types;

pub use types::{Dataset, Movie, Rating, RawDataset, RawMovie, RawRating, RawUser, User};
