//! Data cleaning
//!
//! Turns raw data lake rows into validated, typed records. Rules are
//! independent predicates applied in a fixed, documented order; every
//! drop and fill is counted in a [`CleanReport`].
//!
//! The cleaner is pure: identical inputs always produce identical
//! outputs (within one calendar year, since the release-year upper bound
//! tracks the wall clock), and cleaning already-cleaned data is a no-op.

mod cleaner;
mod types;

pub use cleaner::{Cleaner, AGE_RANGE, MIN_RELEASE_YEAR, RATING_RANGE, UNKNOWN};
pub use types::{CleanReport, MovieCleanStats, RatingCleanStats, UserCleanStats};

#[cfg(test)]
mod tests;
