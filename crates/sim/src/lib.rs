//! berlab Sim - Monte-Carlo BER estimation
//!
//! This crate orchestrates the berlab FEC and channel crates into single
//! BER trials and BER-vs-SNR sweeps, plus analytic reference curves.

pub mod analytic;
pub mod ber;
pub mod error;
pub mod sweep;

pub use error::{Result, SimError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        analytic::{erfc, theoretical_bpsk_awgn},
        ber::{mismatch_fraction, random_bits, simulate_ber, DEFAULT_TRIAL_SIZE},
        error::{Result, SimError},
        sweep::{sweep_ber, BerPoint, SweepConfig},
    };
    pub use berlab_channel::model::ChannelType;
    pub use berlab_fec::scheme::CodeType;
}
