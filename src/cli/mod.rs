//! CLI module
//!
//! Command-line interface for the pipeline stages.
//!
//! # Commands
//!
//! - `generate` - Write a synthetic data lake with injected defects
//! - `clean` - Clean the lake and print the per-rule report
//! - `export` - Clean the lake and render a SQL script
//! - `load` - Clean the lake and load the warehouse

mod commands;
mod runner;

pub use commands::{Cli, Commands, ReportFormat};
pub use runner::Runner;
