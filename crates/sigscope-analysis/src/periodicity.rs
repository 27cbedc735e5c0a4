//! Periodicity detection
//!
//! A lag `p` is a period when every sample matches the one `p` steps later,
//! within an absolute tolerance, over the whole overlap:
//!
//! ```text
//! |x[i] - x[i+p]| <= tol   for all i with i + p < N
//! ```
//!
//! Candidates are tried in ascending order so the smallest period wins.
//!
//! ## Search bound
//!
//! Lags run from 1 to `min(max_period, N / 2)`. Capping at `N / 2` means the
//! signal must show at least two full cycles; without it, lags close to `N`
//! compare only a handful of samples and match almost anything (a lag of
//! `N - 1` compares the first and last sample only, and a zero-padded pulse
//! matches any lag whose overlap misses the pulse). A single sample is never
//! periodic.
//!
//! Cost is O(N × bound), direct comparison.

/// Largest lag tried for a signal of `len` samples.
pub fn search_bound(len: usize, max_period: usize) -> usize {
    max_period.min(len / 2)
}

/// Whether `samples` repeats with lag `period` within `tolerance`.
pub fn matches_at_lag(samples: &[f64], period: usize, tolerance: f64) -> bool {
    if period == 0 {
        return false;
    }
    samples
        .iter()
        .zip(samples.iter().skip(period))
        .all(|(a, b)| (a - b).abs() <= tolerance)
}

/// Smallest period of `samples`, or `None` if no lag up to the search bound
/// matches.
pub fn find_period(samples: &[f64], max_period: usize, tolerance: f64) -> Option<usize> {
    let bound = search_bound(samples.len(), max_period);
    let period = (1..=bound).find(|&p| {
        let hit = matches_at_lag(samples, p, tolerance);
        tracing::trace!(lag = p, hit, "periodicity candidate");
        hit
    });
    tracing::debug!(len = samples.len(), bound, ?period, "periodicity search");
    period
}
