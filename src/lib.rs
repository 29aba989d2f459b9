//! hurricane-loss - Monte Carlo hurricane loss model
//!
//! Estimates the expected annual economic loss from landfalling hurricanes in
//! Florida and the Gulf states. Each simulated year draws a Poisson number of
//! landfalls per region and a log-normal loss for every landfall.
//!
//! # Architecture
//!
//! - **Config**: CLI arguments, optional TOML file, parameter validation
//! - **Distributions**: Poisson landfall frequency, log-normal loss severity
//! - **Workers**: independent simulated years with per-worker random streams
//! - **Coordinator**: partitions years, fans out on rayon, reduces in order
//! - **Output**: mean loss on stdout, optional text summary and JSON report

pub mod config;
pub mod coordinator;
pub mod distribution;
pub mod error;
pub mod output;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::{Config, SimulationParameters};
pub use coordinator::{simulate, RunOptions, Simulation, SimulationReport};
pub use error::{SimulationError, SimulationResult};
pub use stats::SimulationOutcome;

/// Result type used by the application layer
pub type Result<T> = anyhow::Result<T>;
