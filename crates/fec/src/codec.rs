//! Block encoder and decoder
//!
//! Stateless transforms between message bit sequences and codeword bit
//! sequences, parameterized by a [`CodeType`]. Bits are `u8` values in
//! {0, 1}. Input lengths must be an exact multiple of the scheme's block
//! size; anything else is a [`FecError::BlockLength`], never a silent
//! truncation.

use tracing::debug;

use crate::scheme::{CodeScheme, CodeType, HAMMING74_PARITY_CHECK};
use crate::{FecError, Result};

/// Encode a message bit sequence with the given code.
///
/// The input length must be a multiple of the scheme's message length; the
/// output length is `bits.len() * n / k`.
pub fn encode(bits: &[u8], code: CodeType) -> Result<Vec<u8>> {
    let scheme = code.scheme();
    let k = scheme.message_length;
    if bits.len() % k != 0 {
        return Err(FecError::BlockLength {
            length: bits.len(),
            block_size: k,
        });
    }

    let n = scheme.codeword_length;
    debug!(?code, blocks = bits.len() / k, "encoding");
    match scheme.generator {
        // Repetition replicates each bit n times; n == 1 is the uncoded
        // identity.
        None => {
            let mut coded = Vec::with_capacity(bits.len() * n);
            for &bit in bits {
                for _ in 0..n {
                    coded.push(bit);
                }
            }
            Ok(coded)
        }
        // Matrix-coded schemes: codeword = block · Gᵗ mod 2.
        Some(g) => {
            let mut coded = Vec::with_capacity(bits.len() / k * n);
            for block in bits.chunks_exact(k) {
                for j in 0..n {
                    let mut parity = 0u8;
                    for (i, row) in g.iter().enumerate() {
                        parity ^= block[i] & row[j];
                    }
                    coded.push(parity);
                }
            }
            Ok(coded)
        }
    }
}

/// Decode a hard-decision codeword bit sequence with the given code.
///
/// The input length must be a multiple of the scheme's codeword length; the
/// output length is `bits.len() * k / n`.
///
/// Hamming(15,11) extracts the systematic message bits without syndrome
/// correction, matching the reference behavior of the simulator this crate
/// reproduces. Its BER curve is therefore the uncorrected one.
pub fn decode(bits: &[u8], code: CodeType) -> Result<Vec<u8>> {
    let scheme = code.scheme();
    let n = scheme.codeword_length;
    if bits.len() % n != 0 {
        return Err(FecError::BlockLength {
            length: bits.len(),
            block_size: n,
        });
    }

    debug!(?code, blocks = bits.len() / n, "decoding");
    match code {
        CodeType::None => Ok(bits.to_vec()),
        CodeType::Rep3 | CodeType::Rep5 => Ok(decode_majority(bits, n)),
        CodeType::Hamming74 => Ok(decode_hamming74(bits, scheme)),
        CodeType::Hamming1511 => Ok(extract_message_bits(bits, scheme)),
    }
}

/// Majority vote over each block of `n` repeated bits. A tie (possible only
/// for even n) decides 0.
fn decode_majority(bits: &[u8], n: usize) -> Vec<u8> {
    bits.chunks_exact(n)
        .map(|block| {
            let ones = block.iter().filter(|&&b| b == 1).count();
            u8::from(2 * ones > n)
        })
        .collect()
}

/// Syndrome decoding with single-error correction.
///
/// The syndrome read with parity-check row 0 as the least significant bit is
/// the 1-indexed position of a single-bit error, because each column of H is
/// the binary expansion of its position.
fn decode_hamming74(bits: &[u8], scheme: &CodeScheme) -> Vec<u8> {
    let n = scheme.codeword_length;
    let mut decoded = Vec::with_capacity(bits.len() / n * scheme.message_length);
    let mut block = [0u8; 7];
    for chunk in bits.chunks_exact(n) {
        block.copy_from_slice(chunk);
        let mut syndrome = 0usize;
        for (i, row) in HAMMING74_PARITY_CHECK.iter().enumerate() {
            let bit = row
                .iter()
                .zip(block.iter())
                .map(|(&h, &b)| h & b)
                .fold(0, |acc, x| acc ^ x);
            syndrome |= (bit as usize) << i;
        }
        if syndrome != 0 {
            block[syndrome - 1] ^= 1;
        }
        decoded.extend(scheme.message_positions.iter().map(|&p| block[p]));
    }
    decoded
}

/// Strip the systematic message bits out of each codeword block.
fn extract_message_bits(bits: &[u8], scheme: &CodeScheme) -> Vec<u8> {
    let n = scheme.codeword_length;
    bits.chunks_exact(n)
        .flat_map(|block| scheme.message_positions.iter().map(|&p| block[p]))
        .collect()
}
