//! # movielake
//!
//! A small, Rust-native ETL pipeline for a demo movie-streaming dataset.
//!
//! ## Stages
//!
//! - **Generate**: synthesize movies, users, and ratings with injected
//!   data-quality defects, written as CSV into a data lake directory
//! - **Clean**: validate and normalize the raw rows with a fixed set of
//!   per-entity rules, counting every drop and fill
//! - **Sink**: render the cleaned data as an idempotent SQL script, or
//!   load it into a DuckDB warehouse inside a single transaction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use movielake::clean::Cleaner;
//! use movielake::generate::{Catalog, Generator};
//! use movielake::{config::GeneratorConfig, lake, sink};
//!
//! fn main() -> movielake::Result<()> {
//!     // Build a reproducible demo lake
//!     let sizes = GeneratorConfig { seed: Some(42), ..GeneratorConfig::default() };
//!     let data = Generator::new(Catalog::builtin(), sizes.seed).generate(&sizes);
//!     lake::write_dataset("data_lake", &data)?;
//!
//!     // Clean it and render the SQL script
//!     let raw = lake::read_dataset("data_lake")?;
//!     let (cleaned, report) = Cleaner::new().clean(&raw);
//!     println!("{}", report.render());
//!     sink::write_script(&cleaned, "etl_output.sql")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐    CSV     ┌───────────┐   Dataset   ┌──────────────────┐
//! │ Generator ├───────────►│  Cleaner  ├────────────►│       Sink       │
//! └───────────┘ data lake  └───────────┘ CleanReport │ SQL script file  │
//!                                                    │ DuckDB warehouse │
//!                                                    └──────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pipeline
pub mod error;

/// Raw and cleaned record types
pub mod model;

/// Pipeline configuration
pub mod config;

/// Data lake CSV read/write
pub mod lake;

/// Synthetic data generation
pub mod generate;

/// Validation and normalization rules
pub mod clean;

/// SQL script and warehouse sinks
pub mod sink;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use model::{Dataset, Movie, Rating, RawDataset, User};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
