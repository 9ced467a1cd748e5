//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// An expected-error pattern is not a valid regex.
    #[error("invalid error pattern '{pattern}' in step '{step}': {message}")]
    InvalidPattern {
        step: String,
        pattern: String,
        message: String,
    },
}

impl ScenarioError {
    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn invalid_pattern(
        step: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            step: step.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
