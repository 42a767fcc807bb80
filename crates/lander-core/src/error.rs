//! Centralized error types for Lander.

use thiserror::Error;

/// Main error type for Lander operations.
#[derive(Error, Debug)]
pub enum LanderError {
    #[error("A campaign generation is already in progress")]
    GenerationInProgress,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Lander operations.
pub type LanderResult<T> = Result<T, LanderError>;

impl LanderError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
