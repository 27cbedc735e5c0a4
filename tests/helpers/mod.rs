//! Test helpers and fixtures for sigscope integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-12): Exact operations (transforms, axes)
//! - `NUMERIC_EPSILON` (1e-9): Running sums, trig on long grids
//! - `NEGLIGIBLE` (1e-5): The analysis engine's own tolerance

#![allow(dead_code)]


use sigscope::prelude::*;

/// Analyzer with the default configuration.
pub fn test_analyzer() -> SignalAnalyzer {
    SignalAnalyzer::builder()
        .build()
        .expect("Failed to build default analyzer")
}

/// Construct a signal, panicking with the source on failure.
pub fn build(source: &Source) -> Signal {
    sigscope::construct(source)
        .unwrap_or_else(|e| panic!("Failed to construct {:?}: {}", source, e))
}

/// Construct and analyze.
pub fn analyze_source(source: &Source) -> Analysis {
    test_analyzer()
        .run(source)
        .unwrap_or_else(|e| panic!("Failed to analyze {:?}: {}", source, e))
}

/// Check if two sample sequences are approximately equal within tolerance.
pub fn samples_approx_equal(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Assert that two sample sequences match within tolerance, reporting the
/// first mismatch.
pub fn assert_samples_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    if let Some((i, (a, e))) = actual
        .iter()
        .zip(expected)
        .enumerate()
        .find(|(_, (a, e))| (*a - *e).abs() > tolerance)
    {
        panic!(
            "sample {} differs: got {}, expected {} (tolerance {})",
            i, a, e, tolerance
        );
    }
}

/// Route engine tracing to the test writer. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
