//! Error types for berlab Sim

use thiserror::Error;

/// Simulation error types
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid SNR range: start {start_db} dB, end {end_db} dB, step {step_db} dB")]
    InvalidSnrRange {
        start_db: i32,
        end_db: i32,
        step_db: i32,
    },

    #[error("FEC error: {0}")]
    Fec(#[from] berlab_fec::FecError),

    #[error("channel error: {0}")]
    Channel(#[from] berlab_channel::ChannelError),
}

/// Result type for berlab Sim operations
pub type Result<T> = std::result::Result<T, SimError>;
