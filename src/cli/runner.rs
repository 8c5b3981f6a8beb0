//! CLI command execution
//!
//! Resolves configuration (file values overridden by flags) and drives
//! the pipeline stages. Each subcommand is an independent entry point;
//! the stages only meet on disk, in the data lake directory.

use super::commands::{Cli, Commands, ReportFormat};
use crate::clean::{CleanReport, Cleaner};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::generate::{Catalog, Generator};
use crate::lake;
use crate::model::Dataset;
use crate::sink::{script, Warehouse, WAREHOUSE_SCHEMA};
use std::path::PathBuf;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;

        match &self.cli.command {
            Commands::Generate {
                movies,
                users,
                ratings,
                seed,
            } => self.generate(&config, *movies, *users, *ratings, *seed),
            Commands::Clean { format } => self.clean(&config, *format),
            Commands::Export { output } => self.export(&config, output.clone()),
            Commands::Load {
                database,
                init_schema,
            } => self.load(&config, database.clone(), *init_schema),
        }
    }

    /// Load the config file (or defaults) and apply flag overrides
    fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(lake_dir) = &self.cli.lake {
            config.lake_dir.clone_from(lake_dir);
        }
        Ok(config)
    }

    fn generate(
        &self,
        config: &PipelineConfig,
        movies: Option<usize>,
        users: Option<usize>,
        ratings: Option<usize>,
        seed: Option<u64>,
    ) -> Result<()> {
        let mut sizes = config.generator.clone();
        if let Some(n) = movies {
            sizes.movies = n;
        }
        if let Some(n) = users {
            sizes.users = n;
        }
        if let Some(n) = ratings {
            sizes.ratings = n;
        }
        if seed.is_some() {
            sizes.seed = seed;
        }

        let mut generator = Generator::new(Catalog::builtin(), sizes.seed);
        let data = generator.generate(&sizes);
        lake::write_dataset(&config.lake_dir, &data)?;

        println!(
            "Generated data lake at {}: {} movies, {} users, {} ratings",
            config.lake_dir.display(),
            data.movies.len(),
            data.users.len(),
            data.ratings.len()
        );
        Ok(())
    }

    fn clean(&self, config: &PipelineConfig, format: ReportFormat) -> Result<()> {
        let (_, report) = self.clean_lake(config)?;
        match format {
            ReportFormat::Pretty => print!("{}", report.render()),
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(())
    }

    fn export(&self, config: &PipelineConfig, output: Option<PathBuf>) -> Result<()> {
        let (data, report) = self.clean_lake(config)?;
        let path = output.unwrap_or_else(|| config.script_path.clone());
        script::write_script(&data, &path)?;

        println!(
            "Wrote {} ({} users, {} movies, {} ratings; {} rows dropped)",
            path.display(),
            data.users.len(),
            data.movies.len(),
            data.ratings.len(),
            report.dropped_total()
        );
        Ok(())
    }

    fn load(
        &self,
        config: &PipelineConfig,
        database: Option<PathBuf>,
        init_schema: bool,
    ) -> Result<()> {
        let (data, clean_report) = self.clean_lake(config)?;

        let path = database.unwrap_or_else(|| config.warehouse_path.clone());
        let mut warehouse = Warehouse::open(&path)?;
        if init_schema {
            warehouse.execute_batch(WAREHOUSE_SCHEMA)?;
        }
        let report = warehouse.load(&data)?;

        print!("{}", clean_report.render());
        print!("{}", report.render());
        Ok(())
    }

    /// Read the raw lake and clean it, the shared front half of the
    /// export and load commands
    fn clean_lake(&self, config: &PipelineConfig) -> Result<(Dataset, CleanReport)> {
        let raw = lake::read_dataset(&config.lake_dir)?;
        Ok(Cleaner::new().clean(&raw))
    }
}
