//! Error types for berlab FEC

use thiserror::Error;

/// FEC processing error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FecError {
    #[error("bit sequence length {length} is not a multiple of block size {block_size}")]
    BlockLength { length: usize, block_size: usize },
}

/// Result type for berlab FEC operations
pub type Result<T> = std::result::Result<T, FecError>;
