use thiserror::Error;

use crate::utils::Value;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected {expected} values, got {actual}")]
    WrongArity { expected: usize, actual: usize },
    #[error("Value {value} is outside {min}..={max}")]
    ValueOutOfRange { value: Value, min: Value, max: Value },
    #[error("Invalid value range: min={min}, max={max}")]
    InvalidRange { min: Value, max: Value },
    #[error("Level count must be at least 1")]
    ZeroLevels,
}
