//! Monte-Carlo BER estimation
//!
//! One trial: random message bits → encode → BPSK modulate → noisy channel
//! → hard-decision detect → decode → fraction of mismatched message bits.
//! The caller owns the RNG, so repeated trials are independent and
//! reproducible given a seed.

use rand::Rng;
use tracing::debug;

use berlab_channel::model::{Channel, ChannelType};
use berlab_fec::codec::{decode, encode};
use berlab_fec::scheme::CodeType;

use crate::Result;

/// Message bits per trial, matching the reference simulator. Divisible by
/// every supported message length, so a default-size trial never trips the
/// block-length check.
pub const DEFAULT_TRIAL_SIZE: usize = 11_000;

/// Generate uniformly random message bits from an explicit RNG.
pub fn random_bits<R: Rng>(rng: &mut R, num_bits: usize) -> Vec<u8> {
    (0..num_bits).map(|_| u8::from(rng.gen_bool(0.5))).collect()
}

/// Fraction of positions where two equal-length bit sequences differ.
pub fn mismatch_fraction(tx: &[u8], rx: &[u8]) -> f64 {
    if tx.is_empty() {
        return 0.0;
    }
    let errors = tx.iter().zip(rx.iter()).filter(|(a, b)| a != b).count();
    errors as f64 / tx.len() as f64
}

/// Run one Monte-Carlo BER trial.
///
/// `trial_size` message bits are drawn from `rng`, passed through the coded
/// BPSK link at the given Eb/N0, and compared against the decoder output.
/// The noise sigma is rate-adjusted so every code is measured at equal
/// information SNR. The result depends only on the arguments and the RNG
/// state.
pub fn simulate_ber<R: Rng>(
    snr_db: f64,
    channel_type: ChannelType,
    code_type: CodeType,
    trial_size: usize,
    rng: &mut R,
) -> Result<f64> {
    let scheme = code_type.scheme();
    let channel = Channel::from_snr_db(channel_type, snr_db, scheme.rate())?;

    let tx_bits = random_bits(rng, trial_size);
    let coded = encode(&tx_bits, code_type)?;
    let mut symbols = berlab_channel::bpsk::modulate(&coded);
    channel.apply(rng, &mut symbols);
    let detected = berlab_channel::bpsk::detect(&symbols);
    let rx_bits = decode(&detected, code_type)?;

    let ber = mismatch_fraction(&tx_bits, &rx_bits);
    debug!(
        snr_db,
        ?channel_type,
        ?code_type,
        trial_size,
        ber,
        "BER trial complete"
    );
    Ok(ber)
}
