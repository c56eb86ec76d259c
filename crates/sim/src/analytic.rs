//! Analytic reference curves
//!
//! Closed-form BER for uncoded BPSK, used by the tests as a Monte-Carlo
//! sanity anchor and exposed for plotting layers that want a theory overlay.

/// Complementary error function, Abramowitz & Stegun approximation 7.1.26.
///
/// Maximum absolute error about 1.5e-7, more than enough for BER work.
pub fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.3275911 * x.abs());
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let result = poly * (-x * x).exp();
    if x >= 0.0 {
        result
    } else {
        2.0 - result
    }
}

/// Theoretical uncoded BPSK BER over AWGN: `0.5 · erfc(sqrt(Eb/N0))`.
pub fn theoretical_bpsk_awgn(snr_db: f64) -> f64 {
    let eb_n0 = 10f64.powf(snr_db / 10.0);
    0.5 * erfc(eb_n0.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erfc_anchors() {
        assert!((erfc(0.0) - 1.0).abs() < 1e-6);
        assert!(erfc(5.0) < 1e-10);
        assert!((erfc(-5.0) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_bpsk_at_0db() {
        // Q(sqrt(2)) ≈ 0.0786
        assert!((theoretical_bpsk_awgn(0.0) - 0.0786).abs() < 1e-3);
    }

    #[test]
    fn test_bpsk_decreases_with_snr() {
        let mut prev = 1.0;
        for snr in [0.0, 2.0, 4.0, 6.0, 8.0, 10.0] {
            let ber = theoretical_bpsk_awgn(snr);
            assert!(ber < prev);
            prev = ber;
        }
    }
}
