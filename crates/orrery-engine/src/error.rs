//! Error types for the scene core.

use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Unified error type for the scene core.
///
/// Nothing here is fatal to the animation loop: a rejected dataset leaves
/// the registry empty until the next one arrives, and the stepper keeps
/// running over whatever the registry holds.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pure function was called with parameters outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dataset descriptor failed validation. The rebuild is
    /// all-or-nothing: the registry has been cleared, not half-filled.
    #[error("invalid dataset: body '{name}': {reason}")]
    InvalidDataset {
        /// Name of the offending descriptor.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl EngineError {
    /// Create an `InvalidArgument` error with a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an `InvalidDataset` error for a named descriptor.
    pub fn invalid_dataset(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDataset {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_error_names_the_body() {
        let err = EngineError::invalid_dataset("mars", "missing orbital radius");
        let msg = err.to_string();
        assert!(msg.contains("mars"));
        assert!(msg.contains("missing orbital radius"));
    }

    #[test]
    fn argument_error_display() {
        let err = EngineError::invalid_argument("sample count below 3");
        assert!(err.to_string().contains("invalid argument"));
    }
}
