//! SNR sweeps
//!
//! Runs one independent Monte-Carlo trial per SNR point over an inclusive
//! integer dB range. Each point gets its own RNG derived from the sweep
//! seed, so points are reproducible and order-independent; a parallel
//! driver could evaluate them in any order with no shared state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use berlab_channel::model::ChannelType;
use berlab_fec::scheme::CodeType;

use crate::ber::{simulate_ber, DEFAULT_TRIAL_SIZE};
use crate::{Result, SimError};

/// One measured point of a BER curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BerPoint {
    /// Eb/N0 in dB.
    pub snr_db: f64,
    /// Measured bit error rate.
    pub ber: f64,
}

/// Configuration for a BER-vs-SNR sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First SNR point, dB (inclusive).
    pub start_db: i32,
    /// Last SNR point, dB (inclusive).
    pub end_db: i32,
    /// SNR step, dB. Must be positive.
    pub step_db: i32,
    pub channel_type: ChannelType,
    pub code_type: CodeType,
    /// Message bits per point.
    pub trial_size: usize,
    /// Base seed for per-point RNGs.
    pub seed: u64,
}

impl SweepConfig {
    /// Sweep with the reference defaults: 0..=15 dB in 2 dB steps, AWGN,
    /// uncoded, 11 000 bits per point.
    pub fn new(channel_type: ChannelType, code_type: CodeType) -> Self {
        Self {
            start_db: 0,
            end_db: 15,
            step_db: 2,
            channel_type,
            code_type,
            trial_size: DEFAULT_TRIAL_SIZE,
            seed: 0,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.step_db <= 0 || self.start_db > self.end_db {
            return Err(SimError::InvalidSnrRange {
                start_db: self.start_db,
                end_db: self.end_db,
                step_db: self.step_db,
            });
        }
        Ok(())
    }

    /// The SNR points this sweep will visit, in ascending order.
    ///
    /// A config that would fail [`sweep_ber`] validation (non-positive step
    /// or an inverted range) has no points.
    pub fn snr_points(&self) -> Vec<i32> {
        if self.validate().is_err() {
            return Vec::new();
        }
        (self.start_db..=self.end_db)
            .step_by(self.step_db as usize)
            .collect()
    }
}

/// RNG for point `index` of a sweep, split off the base seed.
fn point_rng(seed: u64, index: u64) -> StdRng {
    // Golden-ratio increment keeps neighbouring point seeds decorrelated.
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run a full sweep, one [`simulate_ber`] trial per SNR point.
pub fn sweep_ber(config: &SweepConfig) -> Result<Vec<BerPoint>> {
    config.validate()?;
    let mut points = Vec::new();
    for (index, snr_db) in config.snr_points().into_iter().enumerate() {
        let mut rng = point_rng(config.seed, index as u64);
        let ber = simulate_ber(
            f64::from(snr_db),
            config.channel_type,
            config.code_type,
            config.trial_size,
            &mut rng,
        )?;
        debug!(snr_db, ber, "sweep point");
        points.push(BerPoint {
            snr_db: f64::from(snr_db),
            ber,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snr_points_inclusive_range() {
        let config = SweepConfig::new(ChannelType::Awgn, CodeType::None);
        assert_eq!(config.snr_points(), vec![0, 2, 4, 6, 8, 10, 12, 14]);

        let mut config = config;
        config.end_db = 16;
        assert_eq!(config.snr_points().last(), Some(&16));
    }

    #[test]
    fn test_single_point_range() {
        let mut config = SweepConfig::new(ChannelType::Awgn, CodeType::None);
        config.start_db = 5;
        config.end_db = 5;
        config.step_db = 1;
        assert_eq!(config.snr_points(), vec![5]);
    }

    #[test]
    fn test_snr_points_on_invalid_config_are_empty() {
        let mut config = SweepConfig::new(ChannelType::Awgn, CodeType::None);
        config.step_db = 0;
        assert!(config.snr_points().is_empty());

        config.step_db = -2;
        assert!(config.snr_points().is_empty());

        config.step_db = 2;
        config.start_db = 10;
        config.end_db = 0;
        assert!(config.snr_points().is_empty());
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let mut config = SweepConfig::new(ChannelType::Awgn, CodeType::None);
        config.step_db = 0;
        assert!(matches!(
            sweep_ber(&config),
            Err(SimError::InvalidSnrRange { .. })
        ));

        let mut config = SweepConfig::new(ChannelType::Awgn, CodeType::None);
        config.start_db = 10;
        config.end_db = 0;
        assert!(matches!(
            sweep_ber(&config),
            Err(SimError::InvalidSnrRange { .. })
        ));
    }

    #[test]
    fn test_sweep_shape_and_order() {
        let mut config = SweepConfig::new(ChannelType::Awgn, CodeType::Rep3);
        config.end_db = 6;
        config.trial_size = 3_000;
        let points = sweep_ber(&config).unwrap();
        assert_eq!(points.len(), 4);
        for (point, snr) in points.iter().zip([0.0, 2.0, 4.0, 6.0]) {
            assert_eq!(point.snr_db, snr);
            assert!((0.0..=1.0).contains(&point.ber));
        }
    }

    #[test]
    fn test_sweep_reproducible_for_seed() {
        let mut config = SweepConfig::new(ChannelType::Rayleigh, CodeType::Hamming74);
        config.end_db = 4;
        config.seed = 31;
        let a = sweep_ber(&config).unwrap();
        let b = sweep_ber(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_rngs_decorrelated() {
        use rand::RngCore;
        let mut draws = Vec::new();
        for index in 0..8 {
            draws.push(point_rng(42, index).next_u64());
        }
        let mut unique = draws.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), draws.len());
    }
}
