//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// movielake ETL pipeline CLI
#[derive(Parser, Debug)]
#[command(name = "movielake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pipeline configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Data lake directory (overrides the config file)
    #[arg(short, long, global = true)]
    pub lake: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a synthetic data lake (CSV files with injected defects)
    Generate {
        /// Number of movies to generate
        #[arg(long)]
        movies: Option<usize>,

        /// Number of users to generate
        #[arg(long)]
        users: Option<usize>,

        /// Upper bound on generated ratings
        #[arg(long)]
        ratings: Option<usize>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Clean the data lake and print the per-rule report
    Clean {
        /// Report format
        #[arg(short, long, default_value = "pretty")]
        format: ReportFormat,
    },

    /// Clean the data lake and render it as a SQL script
    Export {
        /// Output path for the script (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clean the data lake and load it into the warehouse
    Load {
        /// DuckDB database path (overrides the config file)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Provision the reference schema before loading
        #[arg(long)]
        init_schema: bool,
    },
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable output
    Pretty,
    /// JSON output
    Json,
}
