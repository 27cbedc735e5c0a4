//! Causality and anti-causality
//!
//! Both checks lay a symmetric index axis over the samples,
//! `n[i] = i - N/2` (integer division), independent of the signal's own
//! axis. A signal is causal when every sample left of the origin is
//! negligible, and anti-causal when every sample right of it is. An
//! all-zero signal is both.

/// Summary of the two causality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Causality {
    Causal,
    AntiCausal,
    /// Negligible on both sides of the origin
    Both,
    Neither,
}

impl Causality {
    pub fn from_flags(causal: bool, anti_causal: bool) -> Self {
        match (causal, anti_causal) {
            (true, true) => Causality::Both,
            (true, false) => Causality::Causal,
            (false, true) => Causality::AntiCausal,
            (false, false) => Causality::Neither,
        }
    }
}

/// Symmetric index of sample `i` in a signal of `len` samples.
pub fn centered_index(i: usize, len: usize) -> i64 {
    i as i64 - (len / 2) as i64
}

/// `n[i]` for every sample
pub fn centered_axis(len: usize) -> Vec<i64> {
    (0..len).map(|i| centered_index(i, len)).collect()
}

fn negligible_where(samples: &[f64], tolerance: f64, side: impl Fn(i64) -> bool) -> bool {
    let len = samples.len();
    samples
        .iter()
        .enumerate()
        .filter(|(i, _)| side(centered_index(*i, len)))
        .all(|(_, s)| s.abs() <= tolerance)
}

/// No non-negligible sample strictly before the origin.
pub fn is_causal(samples: &[f64], tolerance: f64) -> bool {
    negligible_where(samples, tolerance, |n| n < 0)
}

/// No non-negligible sample strictly after the origin.
pub fn is_anti_causal(samples: &[f64], tolerance: f64) -> bool {
    negligible_where(samples, tolerance, |n| n > 0)
}
