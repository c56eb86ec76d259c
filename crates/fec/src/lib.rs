//! berlab FEC - Linear block codes for BER simulation
//!
//! This crate provides the code scheme registry and the stateless
//! encoder/decoder pair used by the berlab Monte-Carlo BER simulator:
//! repetition codes, Hamming(7,4), and Hamming(15,11).

pub mod codec;
pub mod error;
pub mod scheme;

pub use error::{FecError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        codec::{decode, encode},
        error::{FecError, Result},
        scheme::{CodeScheme, CodeType},
    };
}
