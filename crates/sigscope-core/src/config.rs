//! Analysis configuration.
//!
//! The energy threshold and the matching tolerance are heuristics carried over
//! for compatibility with existing results. They are not derived from signal
//! theory and are kept here so they can be recalibrated in one place.

use crate::{Error, Result};

/// Energy below this value classifies a signal as an energy signal.
pub const DEFAULT_ENERGY_THRESHOLD: f64 = 1000.0;

/// Absolute tolerance shared by the periodicity and causality checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Largest candidate period searched.
pub const DEFAULT_MAX_PERIOD: usize = 100;

/// Configuration for the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AnalysisConfig {
    pub energy_threshold: f64,
    pub tolerance: f64,
    pub max_period: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            energy_threshold: DEFAULT_ENERGY_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
            max_period: DEFAULT_MAX_PERIOD,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.energy_threshold.is_finite() || self.energy_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "energy_threshold {} must be finite and positive",
                self.energy_threshold
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance {} must be finite and non-negative",
                self.tolerance
            )));
        }
        if self.max_period == 0 {
            return Err(Error::InvalidConfig(
                "max_period must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
