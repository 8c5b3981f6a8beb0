//! movielake CLI
//!
//! Command-line entry point for the ETL pipeline

use clap::Parser;
use movielake::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose lowers the default level to debug
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let runner = Runner::new(cli);
    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
