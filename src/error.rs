//! Error types for the simulation core

use std::fmt;
use thiserror::Error;

/// Result type for the simulation core
pub type SimulationResult<T> = std::result::Result<T, SimulationError>;

/// Constraint a parameter failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Value is not a real number (NaN or infinite)
    NotANumber,
    /// Value is below the field's minimum
    BelowMinimum { min: f64 },
}

impl Rule {
    /// Attach the offending field name
    pub fn into_error(self, field: &'static str) -> SimulationError {
        SimulationError::InvalidArgument { field, rule: self }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NotANumber => write!(f, "should be a number"),
            Rule::BelowMinimum { min } => write!(f, "should be >= {}", min),
        }
    }
}

/// Simulation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A parameter failed validation. Raised before any sampling starts.
    #[error("Argument `{field}` {rule}")]
    InvalidArgument { field: &'static str, rule: Rule },

    /// A worker's loss sum overflowed
    #[error("Worker {worker_id} produced a non-finite loss sum")]
    NonFiniteLoss { worker_id: usize },

    /// Every worker's loss was finite but their sum overflowed
    #[error("Total loss over {workers} workers is not finite")]
    NonFiniteTotal { workers: usize },

    /// The worker thread pool could not be built
    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(String),
}

impl SimulationError {
    /// Name of the offending field, for argument errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SimulationError::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = SimulationError::InvalidArgument {
            field: "gulf_mean",
            rule: Rule::BelowMinimum { min: 0.0 },
        };
        assert_eq!(err.to_string(), "Argument `gulf_mean` should be >= 0");
        assert_eq!(err.field(), Some("gulf_mean"));
    }

    #[test]
    fn test_not_a_number_message() {
        let err = SimulationError::InvalidArgument {
            field: "florida_stddev",
            rule: Rule::NotANumber,
        };
        assert_eq!(err.to_string(), "Argument `florida_stddev` should be a number");
    }

    #[test]
    fn test_samples_minimum_message() {
        let err = SimulationError::InvalidArgument {
            field: "samples",
            rule: Rule::BelowMinimum { min: 1.0 },
        };
        assert_eq!(err.to_string(), "Argument `samples` should be >= 1");
    }

    #[test]
    fn test_non_argument_errors_have_no_field() {
        let err = SimulationError::NonFiniteLoss { worker_id: 3 };
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("Worker 3"));

        let err = SimulationError::NonFiniteTotal { workers: 16 };
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Total loss over 16 workers is not finite");
    }
}
