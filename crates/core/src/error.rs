//! Configuration errors raised when an incident is set up with invalid parameters.
//!
//! Construction is the only fallible step of the engine. Once a grid exists every
//! simulation operation is total: re-igniting a burning cell, applying zero
//! suppression or querying an un-ignited grid are defined no-ops, not errors.

use std::fmt;

/// Error returned when a grid, terrain table or scenario is configured with invalid values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Grid size must be at least one cell.
    NonPositiveGridSize {
        /// The rejected size
        size: usize,
    },

    /// Grid size exceeds the supported maximum.
    GridTooLarge {
        /// The rejected size
        size: usize,
        /// Largest accepted size
        max: usize,
    },

    /// Terrain weight table could not be turned into a weighted distribution.
    InvalidTerrainWeights {
        /// Description of the problem reported by the sampler
        message: String,
    },

    /// A stored grid's cells do not form a `size × size` row-major layout.
    InvalidGridLayout {
        /// Description of the mismatch
        message: String,
    },

    /// A scenario field holds an unusable value.
    InvalidScenario {
        /// Name of the offending field (e.g. `"critical_failure_acres"`)
        field: &'static str,
        /// Description of the validation failure
        message: String,
    },
}

impl ConfigurationError {
    /// Create error for a scenario field with a custom message.
    ///
    /// # Arguments
    /// * `field` - The name of the invalid field (e.g. `"grid_size"`)
    /// * `message` - A description of the validation error
    pub fn invalid_scenario(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidScenario {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveGridSize { size } => {
                write!(f, "Grid size must be positive, got {size}")
            }
            Self::GridTooLarge { size, max } => {
                write!(f, "Grid size {size} exceeds maximum of {max}")
            }
            Self::InvalidTerrainWeights { message } => {
                write!(f, "Terrain weights are invalid: {message}")
            }
            Self::InvalidGridLayout { message } => {
                write!(f, "Grid layout is invalid: {message}")
            }
            Self::InvalidScenario { field, message } => {
                write!(f, "Scenario parameter {field}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigurationError::NonPositiveGridSize { size: 0 };
        assert_eq!(err.to_string(), "Grid size must be positive, got 0");

        let err = ConfigurationError::GridTooLarge { size: 5000, max: 1024 };
        assert_eq!(err.to_string(), "Grid size 5000 exceeds maximum of 1024");

        let err = ConfigurationError::invalid_scenario("critical_failure_acres", "must be positive");
        assert_eq!(
            err.to_string(),
            "Scenario parameter critical_failure_acres: must be positive"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ConfigurationError::NonPositiveGridSize { size: 0 });
        assert!(err.to_string().contains("positive"));
    }
}
