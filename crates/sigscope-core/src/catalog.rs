//! Sample Catalog
//!
//! Fixed set of canonical discrete reference signals, looked up by label:
//!
//! | Label | Samples | Axis |
//! |---|---|---|
//! | Exponential Decay | `e^-n` | `0..50` |
//! | Sine Wave | `sin(2πn/10)`, ten periods | `0..100` |
//! | Cosine Wave | `cos(2πn/10)`, ten periods | `0..100` |
//! | Unit Step Signal | `1` | `0..50` |
//! | Unit Impulse Signal | `δ[n]` | `0..50` |
//! | Ramp Signal | `n` | `0..50` |
//! | Non-Causal | rectangular pulse, `|n| <= 5` | `-25..25` |
//!
//! The non-causal pulse keeps its negative-index region so causality
//! detection has something to reject.

use std::f64::consts::PI;

use crate::signal::{index_axis, DomainKind, Signal};
use crate::{Error, Result};

pub const EXPONENTIAL_DECAY: &str = "Exponential Decay";
pub const SINE_WAVE: &str = "Sine Wave";
pub const COSINE_WAVE: &str = "Cosine Wave";
pub const UNIT_STEP: &str = "Unit Step Signal";
pub const UNIT_IMPULSE: &str = "Unit Impulse Signal";
pub const RAMP: &str = "Ramp Signal";
pub const NON_CAUSAL: &str = "Non-Causal";

const LABELS: [&str; 7] = [
    EXPONENTIAL_DECAY,
    SINE_WAVE,
    COSINE_WAVE,
    UNIT_STEP,
    UNIT_IMPULSE,
    RAMP,
    NON_CAUSAL,
];

const SHORT_LEN: usize = 50;
const PERIODIC_LEN: usize = 100;
const SAMPLES_PER_CYCLE: usize = 10;
const PULSE_HALF_WIDTH: i64 = 5;

/// All catalog labels, in presentation order.
pub fn labels() -> &'static [&'static str] {
    &LABELS
}

/// Look up a catalog entry with its native discrete axis.
///
/// Matching ignores case and surrounding whitespace.
pub fn lookup(label: &str) -> Result<Signal> {
    lookup_with_domain(label, DomainKind::Discrete)
}

/// Look up a catalog entry, laying its axis out for `domain_kind`.
///
/// Zero-based entries get the default continuous axis `[0, N/10]`; the
/// non-causal pulse keeps its origin and is scaled by 1/10.
pub fn lookup_with_domain(label: &str, domain_kind: DomainKind) -> Result<Signal> {
    let canonical = LABELS
        .iter()
        .copied()
        .find(|l| l.eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| Error::UnknownLabel(label.to_string()))?;

    tracing::debug!(label = canonical, ?domain_kind, "catalog lookup");

    if canonical == NON_CAUSAL {
        return non_causal_pulse(domain_kind);
    }

    let samples: Vec<f64> = match canonical {
        EXPONENTIAL_DECAY => (0..SHORT_LEN).map(|n| (-(n as f64)).exp()).collect(),
        SINE_WAVE => periodic(f64::sin),
        COSINE_WAVE => periodic(f64::cos),
        UNIT_STEP => vec![1.0; SHORT_LEN],
        UNIT_IMPULSE => {
            let mut samples = vec![0.0; SHORT_LEN];
            samples[0] = 1.0;
            samples
        }
        RAMP => (0..SHORT_LEN).map(|n| n as f64).collect(),
        _ => return Err(Error::UnknownLabel(label.to_string())),
    };

    Signal::with_domain(samples, domain_kind)
}

fn periodic(f: fn(f64) -> f64) -> Vec<f64> {
    (0..PERIODIC_LEN)
        .map(|n| f(2.0 * PI * n as f64 / SAMPLES_PER_CYCLE as f64))
        .collect()
}

fn non_causal_pulse(domain_kind: DomainKind) -> Result<Signal> {
    let indices = index_axis(SHORT_LEN, -(SHORT_LEN as i64 / 2));
    let samples = indices
        .iter()
        .map(|&n| if n.abs() <= PULSE_HALF_WIDTH as f64 { 1.0 } else { 0.0 })
        .collect();
    let axis = match domain_kind {
        DomainKind::Discrete => indices,
        DomainKind::Continuous => indices.iter().map(|n| n / 10.0).collect(),
    };
    Signal::new(samples, axis, domain_kind)
}
