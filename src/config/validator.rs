//! Configuration validation

use super::*;
use crate::error::{Rule, SimulationError, SimulationResult};
use anyhow::Result;

/// Minimum for every distribution parameter
const MIN_DISTRIBUTION_VALUE: f64 = 0.0;

/// Minimum number of simulated years
const MIN_SAMPLES: i64 = 1;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_parameters(&config.parameters)?;
    validate_runtime(&config.runtime)?;
    Ok(())
}

/// Validate simulation parameters
///
/// Checks fields in declaration order and stops at the first violation.
/// Distribution parameters must be finite and >= 0; `samples` must be >= 1.
pub fn validate_parameters(params: &SimulationParameters) -> SimulationResult<()> {
    for (field, value) in params.distribution_fields() {
        validate_distribution_value(field, value)?;
    }

    if params.samples < MIN_SAMPLES {
        return Err(SimulationError::InvalidArgument {
            field: "samples",
            rule: Rule::BelowMinimum { min: MIN_SAMPLES as f64 },
        });
    }

    Ok(())
}

fn validate_distribution_value(field: &'static str, value: f64) -> SimulationResult<()> {
    if !value.is_finite() {
        return Err(SimulationError::InvalidArgument {
            field,
            rule: Rule::NotANumber,
        });
    }

    if value < MIN_DISTRIBUTION_VALUE {
        return Err(SimulationError::InvalidArgument {
            field,
            rule: Rule::BelowMinimum { min: MIN_DISTRIBUTION_VALUE },
        });
    }

    Ok(())
}

/// Validate runtime configuration
pub fn validate_runtime(runtime: &RuntimeConfig) -> Result<()> {
    if runtime.workers == Some(0) {
        anyhow::bail!("workers must be at least 1");
    }

    Ok(())
}
