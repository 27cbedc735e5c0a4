//! Signal Transformer
//!
//! Pointwise and cumulative operations that derive a new signal from a base
//! signal. The axis, domain kind, and length are always preserved.
//!
//! Derivative and integral are discrete approximations (first difference and
//! running sum) and are applied the same way to continuous signals.

use crate::signal::Signal;

/// Factor used when a scale request omits one.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// Transformation applied by [`transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum TransformOp {
    /// `y[i] = |x[i]|`
    Modulus,
    /// `y[i] = x[i] - x[i-1]`, with `x[-1] = 0`
    Derivative,
    /// `y[i] = x[0] + ... + x[i]`
    Integral,
    /// `y[i] = factor * x[i]`
    Scale(f64),
}

impl TransformOp {
    pub fn name(&self) -> &'static str {
        match self {
            TransformOp::Modulus => "modulus",
            TransformOp::Derivative => "derivative",
            TransformOp::Integral => "integral",
            TransformOp::Scale(_) => "scale",
        }
    }
}

/// Apply `op` to `base`, producing a signal on the same axis.
pub fn transform(base: &Signal, op: TransformOp) -> Signal {
    let x = base.samples();
    let samples = match op {
        TransformOp::Modulus => x.iter().map(|s| s.abs()).collect(),
        TransformOp::Derivative => first_difference(x),
        TransformOp::Integral => running_sum(x),
        TransformOp::Scale(factor) => x.iter().map(|s| factor * s).collect(),
    };
    tracing::debug!(op = op.name(), len = x.len(), "transformed signal");
    base.with_samples(samples)
}

fn first_difference(x: &[f64]) -> Vec<f64> {
    let mut prev = 0.0;
    x.iter()
        .map(|&s| {
            let d = s - prev;
            prev = s;
            d
        })
        .collect()
}

fn running_sum(x: &[f64]) -> Vec<f64> {
    x.iter()
        .scan(0.0, |acc, &s| {
            *acc += s;
            Some(*acc)
        })
        .collect()
}
