//! Error types for berlab Channel

use thiserror::Error;

/// Channel model error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    #[error("noise sigma must be a positive finite number, got {sigma}")]
    InvalidNoiseSigma { sigma: f64 },

    #[error("code rate must be in (0, 1], got {rate}")]
    InvalidRate { rate: f64 },
}

/// Result type for berlab Channel operations
pub type Result<T> = std::result::Result<T, ChannelError>;
