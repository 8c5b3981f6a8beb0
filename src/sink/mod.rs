//! Sinks for cleaned data
//!
//! Two destinations, one row mapping: [`script`] renders the dataset as
//! an idempotent SQL text file, [`warehouse`] executes the same inserts
//! against a live DuckDB database inside one transaction. Both clear the
//! target tables first (full-table replace, ratings → movies → users)
//! and insert users, then movies, then ratings.

pub mod script;
pub mod warehouse;

pub use script::{render_script, render_script_at, write_script};
pub use warehouse::{LoadReport, Warehouse, WAREHOUSE_SCHEMA};

#[cfg(test)]
mod tests;
