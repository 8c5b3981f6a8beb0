//! Error types for movielake
//!
//! This module defines the error hierarchy for the entire pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The taxonomy follows the pipeline's failure model: a missing or
//! structurally unreadable source is fatal, an invalid row is not an error
//! at all (the cleaner drops and counts it), and any sink failure aborts
//! the current load.

use thiserror::Error;

/// The main error type for movielake
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Lake Errors
    // ============================================================================
    #[error("Data lake source not found: {path}")]
    SourceMissing { path: String },

    #[error("Source '{file}' is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // Sink Errors
    // ============================================================================
    #[error("Warehouse error: {message}")]
    Warehouse { message: String },

    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a source-missing error
    pub fn source_missing(path: impl Into<String>) -> Self {
        Self::SourceMissing { path: path.into() }
    }

    /// Create a missing-column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a warehouse error
    pub fn warehouse(message: impl Into<String>) -> Self {
        Self::Warehouse {
            message: message.into(),
        }
    }

    /// Check if this error means an input source was absent or unreadable
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Error::SourceMissing { .. } | Error::MissingColumn { .. } | Error::Csv(_)
        )
    }
}

/// Result type alias for movielake
pub type Result<T> = std::result::Result<T, Error>;
