//! berlab Channel - BPSK mapping and noisy channel models
//!
//! This crate provides the modulation/detection pair and the AWGN and
//! Rayleigh fading channel models for the berlab BER simulator.

pub mod bpsk;
pub mod error;
pub mod model;

pub use error::{ChannelError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        bpsk::{detect, modulate},
        error::{ChannelError, Result},
        model::{noise_sigma, Channel, ChannelType},
    };
}
