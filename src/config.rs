//! Pipeline configuration
//!
//! A small YAML config file holding the paths the stages share and the
//! generator's sizing knobs. Every field has a default so an empty file
//! (or no file at all) yields a usable demo setup; CLI flags override
//! whatever the file says.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level pipeline configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding the raw CSV files
    #[serde(default = "default_lake_dir")]
    pub lake_dir: PathBuf,

    /// Output path for the rendered SQL script
    #[serde(default = "default_script_path")]
    pub script_path: PathBuf,

    /// Path of the DuckDB warehouse database file
    #[serde(default = "default_warehouse_path")]
    pub warehouse_path: PathBuf,

    /// Generator sizing and seeding
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Sizing and seeding for the synthetic data generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of movies to generate
    #[serde(default = "default_movies")]
    pub movies: usize,

    /// Number of users to generate
    #[serde(default = "default_users")]
    pub users: usize,

    /// Upper bound on generated ratings
    #[serde(default = "default_ratings")]
    pub ratings: usize,

    /// RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_lake_dir() -> PathBuf {
    PathBuf::from("data_lake")
}

fn default_script_path() -> PathBuf {
    PathBuf::from("etl_output.sql")
}

fn default_warehouse_path() -> PathBuf {
    PathBuf::from("warehouse.duckdb")
}

fn default_movies() -> usize {
    200
}

fn default_users() -> usize {
    1000
}

fn default_ratings() -> usize {
    10_000
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lake_dir: default_lake_dir(),
            script_path: default_script_path(),
            warehouse_path: default_warehouse_path(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            movies: default_movies(),
            users: default_users(),
            ratings: default_ratings(),
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_str_yaml(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_str_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
