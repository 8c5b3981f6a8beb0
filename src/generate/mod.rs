//! Synthetic data generation
//!
//! Builds the demo data lake: movies, users, and ratings with realistic
//! distributions and deliberately injected quality defects. All flavor
//! tables live in an explicit, immutable [`Catalog`].

mod catalog;
mod generator;

pub use catalog::{AgeBand, Catalog, SeedMovie};
pub use generator::Generator;
