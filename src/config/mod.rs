//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub parameters: SimulationParameters,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Distribution parameters for both regions plus the requested sample count
///
/// Rates are annual landfall rates. Means and standard deviations are the
/// log-space parameters of the per-storm loss distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub florida_landfall_rate: f64,
    pub florida_mean: f64,
    pub florida_stddev: f64,
    pub gulf_landfall_rate: f64,
    pub gulf_mean: f64,
    pub gulf_stddev: f64,
    /// Number of simulated years requested (must be >= 1)
    pub samples: i64,
}

impl SimulationParameters {
    /// Distribution parameters of a single region
    pub fn region(&self, region: Region) -> RegionParameters {
        match region {
            Region::Florida => RegionParameters {
                landfall_rate: self.florida_landfall_rate,
                mean: self.florida_mean,
                stddev: self.florida_stddev,
            },
            Region::Gulf => RegionParameters {
                landfall_rate: self.gulf_landfall_rate,
                mean: self.gulf_mean,
                stddev: self.gulf_stddev,
            },
        }
    }

    /// Distribution parameters in validation order, keyed by field name
    pub fn distribution_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("florida_landfall_rate", self.florida_landfall_rate),
            ("florida_mean", self.florida_mean),
            ("florida_stddev", self.florida_stddev),
            ("gulf_landfall_rate", self.gulf_landfall_rate),
            ("gulf_mean", self.gulf_mean),
            ("gulf_stddev", self.gulf_stddev),
        ]
    }
}

/// Geographic region covered by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Florida,
    Gulf,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Florida => write!(f, "florida"),
            Region::Gulf => write!(f, "gulf"),
        }
    }
}

/// Per-region view of the distribution parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionParameters {
    pub landfall_rate: f64,
    pub mean: f64,
    pub stddev: f64,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Worker count override (None = host parallelism)
    #[serde(default)]
    pub workers: Option<usize>,
    /// Base seed for reproducible runs (None = OS entropy)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print debug diagnostics to stderr
    #[serde(default)]
    pub debug: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Also write the full report as JSON to this file
    #[serde(default)]
    pub json_file: Option<PathBuf>,
}

/// Result output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Mean loss only
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
