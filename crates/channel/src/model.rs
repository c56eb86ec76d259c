//! Channel noise models
//!
//! AWGN and flat Rayleigh fading applied in-place to a BPSK symbol slice.
//! Noise power is derived from Eb/N0 with a rate adjustment so that coded
//! and uncoded schemes are compared at equal information SNR rather than
//! equal coded-symbol SNR.

use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ChannelError, Result};

/// Selector for the supported channel noise models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelType {
    /// Additive white Gaussian noise only.
    Awgn,
    /// Flat Rayleigh fading magnitude plus AWGN.
    Rayleigh,
}

impl ChannelType {
    /// Resolve a legacy string identifier to a channel type.
    ///
    /// Unknown identifiers resolve to [`ChannelType::Awgn`] rather than an
    /// error.
    pub fn from_id(id: &str) -> Self {
        match id {
            "rayleigh" => ChannelType::Rayleigh,
            _ => ChannelType::Awgn,
        }
    }
}

/// Noise standard deviation for a given Eb/N0 and code rate:
/// `sigma = sqrt(1 / (2 · 10^(snr_db/10) · rate))`.
pub fn noise_sigma(snr_db: f64, rate: f64) -> f64 {
    let snr_linear = 10f64.powf(snr_db / 10.0);
    (1.0 / (2.0 * snr_linear * rate)).sqrt()
}

/// A stateless noisy channel parameterized by type and noise sigma.
#[derive(Debug, Clone)]
pub struct Channel {
    channel_type: ChannelType,
    sigma: f64,
    noise: Normal<f64>,
}

impl Channel {
    /// Create a channel with an explicit noise standard deviation.
    pub fn new(channel_type: ChannelType, sigma: f64) -> Result<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ChannelError::InvalidNoiseSigma { sigma });
        }
        let noise =
            Normal::new(0.0, sigma).map_err(|_| ChannelError::InvalidNoiseSigma { sigma })?;
        Ok(Self {
            channel_type,
            sigma,
            noise,
        })
    }

    /// Create a channel from Eb/N0 in dB, rate-adjusted for the code in use.
    pub fn from_snr_db(channel_type: ChannelType, snr_db: f64, rate: f64) -> Result<Self> {
        if !(rate.is_finite() && rate > 0.0 && rate <= 1.0) {
            return Err(ChannelError::InvalidRate { rate });
        }
        let sigma = noise_sigma(snr_db, rate);
        debug!(?channel_type, snr_db, rate, sigma, "derived noise sigma");
        Self::new(channel_type, sigma)
    }

    /// The channel type.
    pub fn channel_type(&self) -> ChannelType {
        self.channel_type
    }

    /// The noise standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Perturb a slice of transmitted symbols in place.
    ///
    /// AWGN adds `sigma · N(0,1)` per sample. Rayleigh first scales each
    /// sample by an independent fading magnitude `h = sqrt((X² + Y²) / 2)`
    /// with X, Y standard normal (unit second moment), then adds the same
    /// additive noise.
    pub fn apply<R: Rng>(&self, rng: &mut R, symbols: &mut [f64]) {
        match self.channel_type {
            ChannelType::Awgn => {
                for y in symbols.iter_mut() {
                    *y += self.noise.sample(rng);
                }
            }
            ChannelType::Rayleigh => {
                for y in symbols.iter_mut() {
                    let x1: f64 = StandardNormal.sample(rng);
                    let x2: f64 = StandardNormal.sample(rng);
                    let h = ((x1 * x1 + x2 * x2) / 2.0).sqrt();
                    *y = h * *y + self.noise.sample(rng);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_id() {
        assert_eq!(ChannelType::from_id("rayleigh"), ChannelType::Rayleigh);
        assert_eq!(ChannelType::from_id("awgn"), ChannelType::Awgn);
        assert_eq!(ChannelType::from_id("ionosphere"), ChannelType::Awgn);
    }

    #[test]
    fn test_noise_sigma_values() {
        // 0 dB, rate 1: sigma = sqrt(1/2)
        assert!((noise_sigma(0.0, 1.0) - 0.5f64.sqrt()).abs() < 1e-12);
        // 10 dB, rate 1: sigma = sqrt(1/20)
        assert!((noise_sigma(10.0, 1.0) - (1.0 / 20.0f64).sqrt()).abs() < 1e-12);
        // Lower rate raises sigma at equal Eb/N0.
        assert!(noise_sigma(0.0, 1.0 / 3.0) > noise_sigma(0.0, 1.0));
    }

    #[test]
    fn test_negative_snr_is_valid() {
        assert!(noise_sigma(-5.0, 1.0).is_finite());
        assert!(Channel::from_snr_db(ChannelType::Awgn, -5.0, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_bad_sigma() {
        assert!(Channel::new(ChannelType::Awgn, 0.0).is_err());
        assert!(Channel::new(ChannelType::Awgn, -1.0).is_err());
        assert!(Channel::new(ChannelType::Awgn, f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_bad_rate() {
        assert!(Channel::from_snr_db(ChannelType::Awgn, 0.0, 0.0).is_err());
        assert!(Channel::from_snr_db(ChannelType::Awgn, 0.0, 1.5).is_err());
    }

    #[test]
    fn test_awgn_statistics() {
        let mut rng = StdRng::seed_from_u64(7);
        let channel = Channel::new(ChannelType::Awgn, 0.5).unwrap();
        let mut symbols = vec![1.0; 20_000];
        channel.apply(&mut rng, &mut symbols);
        let mean = symbols.iter().sum::<f64>() / symbols.len() as f64;
        let var =
            symbols.iter().map(|y| (y - mean) * (y - mean)).sum::<f64>() / symbols.len() as f64;
        assert!((mean - 1.0).abs() < 0.02);
        assert!((var - 0.25).abs() < 0.02);
    }

    #[test]
    fn test_rayleigh_attenuates_on_average() {
        // E[h] = sqrt(pi)/2 ≈ 0.886 for unit-second-moment Rayleigh fading.
        let mut rng = StdRng::seed_from_u64(11);
        let channel = Channel::new(ChannelType::Rayleigh, 1e-9).unwrap();
        let mut symbols = vec![1.0; 50_000];
        channel.apply(&mut rng, &mut symbols);
        let mean = symbols.iter().sum::<f64>() / symbols.len() as f64;
        assert!((mean - 0.886).abs() < 0.01);
        let second_moment = symbols.iter().map(|y| y * y).sum::<f64>() / symbols.len() as f64;
        assert!((second_moment - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_seeded_channel_is_reproducible() {
        let channel = Channel::new(ChannelType::Rayleigh, 0.3).unwrap();
        let mut a = vec![1.0; 64];
        let mut b = vec![1.0; 64];
        channel.apply(&mut StdRng::seed_from_u64(42), &mut a);
        channel.apply(&mut StdRng::seed_from_u64(42), &mut b);
        assert_eq!(a, b);
    }
}
