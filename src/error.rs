// src/error.rs
// Standardized error types for Message Guru

use thiserror::Error;

use crate::reply::{GenerateError, ValidationError};

/// Main error type for the Message Guru library
#[derive(Error, Debug)]
pub enum GuruError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using GuruError
pub type Result<T> = std::result::Result<T, GuruError>;

impl GuruError {
    /// Convert to user-facing string for CLI and HTTP boundaries
    pub fn to_user_string(&self) -> String {
        self.to_string()
    }
}
