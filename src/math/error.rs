// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("I/O error while writing debug output: {0}")]
    Io(#[from] std::io::Error),
}

impl MathError {
    /// Kurzform für `InvalidConfiguration`.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
