//! The `Signal` value type
//!
//! A signal is a finite run of real samples paired with a strictly increasing
//! axis. The axis holds integer sample indices for discrete signals and time
//! values for continuous ones. Once built, a signal never changes; transforms
//! produce new signals.

use crate::{Error, Result};

/// How the axis of a signal should be read.
///
/// Only affects axis semantics and display. Analysis formulas operate on the
/// samples alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DomainKind {
    /// Integer sample indices (`n`)
    #[default]
    Discrete,
    /// Time values (`t`)
    Continuous,
}

impl DomainKind {
    /// Axis label used by plotting collaborators
    pub fn axis_label(&self) -> &'static str {
        match self {
            DomainKind::Discrete => "n (samples)",
            DomainKind::Continuous => "t (seconds)",
        }
    }
}

/// Immutable sample sequence with its axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Signal {
    samples: Vec<f64>,
    axis: Vec<f64>,
    domain_kind: DomainKind,
}

impl Signal {
    /// Build a signal from samples and an explicit axis.
    ///
    /// Fails if the signal is empty, the lengths differ, the axis is not
    /// strictly increasing, or any value is non-finite.
    pub fn new(samples: Vec<f64>, axis: Vec<f64>, domain_kind: DomainKind) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InvalidSignal(
                "a signal needs at least one sample".to_string(),
            ));
        }
        if samples.len() != axis.len() {
            return Err(Error::InvalidSignal(format!(
                "{} samples but {} axis values",
                samples.len(),
                axis.len()
            )));
        }
        if let Some(i) = samples.iter().position(|s| !s.is_finite()) {
            return Err(Error::InvalidSignal(format!(
                "sample {} is not finite ({})",
                i, samples[i]
            )));
        }
        if let Some(i) = axis.iter().position(|a| !a.is_finite()) {
            return Err(Error::InvalidSignal(format!(
                "axis value {} is not finite ({})",
                i, axis[i]
            )));
        }
        if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::InvalidSignal(format!(
                "axis must be strictly increasing (axis[{}] = {}, axis[{}] = {})",
                i,
                axis[i],
                i + 1,
                axis[i + 1]
            )));
        }

        Ok(Self {
            samples,
            axis,
            domain_kind,
        })
    }

    /// Discrete signal indexed `0, 1, ..., N-1`
    pub fn discrete(samples: Vec<f64>) -> Result<Self> {
        let axis = index_axis(samples.len(), 0);
        Self::new(samples, axis, DomainKind::Discrete)
    }

    /// Signal with the default axis for `domain_kind`.
    ///
    /// Discrete signals are indexed from 0. Continuous signals span
    /// `[0, N/10]` with `N` evenly spaced points.
    pub fn with_domain(samples: Vec<f64>, domain_kind: DomainKind) -> Result<Self> {
        let axis = match domain_kind {
            DomainKind::Discrete => index_axis(samples.len(), 0),
            DomainKind::Continuous => {
                let len = samples.len();
                linspace(0.0, len as f64 / 10.0, len)
            }
        };
        Self::new(samples, axis, domain_kind)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn domain_kind(&self) -> DomainKind {
        self.domain_kind
    }

    /// Number of samples (always at least 1)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate `(axis, sample)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.axis.iter().copied().zip(self.samples.iter().copied())
    }

    /// Same axis and domain, new samples. Length must match.
    pub(crate) fn with_samples(&self, samples: Vec<f64>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            samples,
            axis: self.axis.clone(),
            domain_kind: self.domain_kind,
        }
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, DomainKind) {
        (self.samples, self.axis, self.domain_kind)
    }
}

/// Consecutive integers starting at `start`
pub fn index_axis(len: usize, start: i64) -> Vec<f64> {
    (0..len as i64).map(|i| (start + i) as f64).collect()
}

/// `len` evenly spaced values over `[start, end]`, endpoints included.
///
/// A single point sits at `start`.
pub fn linspace(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let steps = (len - 1) as f64;
            (0..len)
                .map(|i| start + span * i as f64 / steps)
                .collect()
        }
    }
}
