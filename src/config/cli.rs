//! CLI argument parsing using clap

use super::toml::{merge_cli_with_config, parse_toml_file};
use super::validator::validate_config;
use super::*;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Calculate total loss due to landfalling hurricanes in Florida and the Gulf States
#[derive(Parser, Debug)]
#[command(name = "gethurricaneloss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The annual rate of landfalling hurricanes in Florida
    #[arg(value_name = "FLORIDA_LANDFALL_RATE", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub florida_landfall_rate: Option<f64>,

    /// Log-space mean of the economic loss of a landfalling hurricane in Florida
    #[arg(value_name = "FLORIDA_MEAN", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub florida_mean: Option<f64>,

    /// Log-space standard deviation of the economic loss of a landfalling hurricane in Florida
    #[arg(value_name = "FLORIDA_STDDEV", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub florida_stddev: Option<f64>,

    /// The annual rate of landfalling hurricanes in the Gulf states
    #[arg(value_name = "GULF_LANDFALL_RATE", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub gulf_landfall_rate: Option<f64>,

    /// Log-space mean of the economic loss of a landfalling hurricane in the Gulf states
    #[arg(value_name = "GULF_MEAN", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub gulf_mean: Option<f64>,

    /// Log-space standard deviation of the economic loss of a landfalling hurricane in the Gulf states
    #[arg(value_name = "GULF_STDDEV", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub gulf_stddev: Option<f64>,

    /// Total number of samples (simulated years) to run
    #[arg(short = 'n', long = "num", value_name = "SAMPLES", allow_negative_numbers = true)]
    #[arg(required_unless_present = "config")]
    pub samples: Option<i64>,

    /// TOML configuration file (command line values take precedence)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of workers (default: number of logical CPUs)
    #[arg(short = 'w', long, env = "HURRICANE_LOSS_WORKERS")]
    pub workers: Option<usize>,

    /// Seed for reproducible results (default: random)
    #[arg(long, env = "HURRICANE_LOSS_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<CliOutputFormat>,

    /// Write the full report as JSON to this file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Mean loss only
    Text,
    /// Full report as JSON
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            anyhow::bail!("workers must be at least 1");
        }

        Ok(())
    }

    /// Simulation parameters given on the command line
    ///
    /// Fails if any parameter is missing, which only happens when a
    /// configuration file is expected to supply it.
    pub fn parameters(&self) -> Result<SimulationParameters> {
        Ok(SimulationParameters {
            florida_landfall_rate: required(self.florida_landfall_rate, "florida_landfall_rate")?,
            florida_mean: required(self.florida_mean, "florida_mean")?,
            florida_stddev: required(self.florida_stddev, "florida_stddev")?,
            gulf_landfall_rate: required(self.gulf_landfall_rate, "gulf_landfall_rate")?,
            gulf_mean: required(self.gulf_mean, "gulf_mean")?,
            gulf_stddev: required(self.gulf_stddev, "gulf_stddev")?,
            samples: required(self.samples, "samples")?,
        })
    }

    /// Build the run configuration from CLI arguments and optional config file
    pub fn build_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => {
                let config = parse_toml_file(path)?;
                merge_cli_with_config(self, config)
            }
            None => Ok(Config {
                parameters: self.parameters().context("Missing simulation parameter")?,
                runtime: RuntimeConfig {
                    workers: self.workers,
                    seed: self.seed,
                    debug: self.debug,
                },
                output: OutputConfig {
                    format: self.format.map(OutputFormat::from).unwrap_or_default(),
                    json_file: self.json_output.clone(),
                },
            }),
        }
    }

    /// Build and validate the run configuration
    ///
    /// Nothing is simulated when this fails; the error chain names the first
    /// invalid field.
    pub fn load_config(&self) -> Result<Config> {
        let config = self.build_config()?;
        validate_config(&config).context("Configuration validation failed")?;
        Ok(config)
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.with_context(|| format!("Argument `{}` is required", field))
}
