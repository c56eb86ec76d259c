//! BPSK symbol mapping and hard-decision detection
//!
//! The simulator uses antipodal baseband BPSK: bit 0 maps to -1.0 and bit 1
//! to +1.0. Detection is zero-threshold slicing, which is the
//! maximum-likelihood decision for this constellation under symmetric noise.

/// Map bits to antipodal BPSK symbols (0 → -1.0, 1 → +1.0).
pub fn modulate(bits: &[u8]) -> Vec<f64> {
    bits.iter().map(|&b| 2.0 * f64::from(b) - 1.0).collect()
}

/// Hard-decision detection: sample > 0 reads as bit 1, otherwise 0.
pub fn detect(samples: &[f64]) -> Vec<u8> {
    samples.iter().map(|&y| u8::from(y > 0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_modulate_antipodal() {
        assert_eq!(modulate(&[0, 1, 1, 0]), vec![-1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_detect_threshold() {
        assert_eq!(detect(&[-0.3, 0.7, 1.4, -2.0]), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_detect_zero_reads_as_zero() {
        assert_eq!(detect(&[0.0]), vec![0]);
    }

    #[quickcheck]
    fn prop_detect_inverts_modulate(bits: Vec<bool>) -> bool {
        let bits: Vec<u8> = bits.into_iter().map(u8::from).collect();
        detect(&modulate(&bits)) == bits
    }
}
