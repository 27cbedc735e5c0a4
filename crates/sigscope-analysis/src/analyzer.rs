//! The analysis engine

use sigscope_core::{AnalysisConfig, Result, Signal};

use crate::causality::{is_anti_causal, is_causal};
use crate::energy::{classify, energy, power};
use crate::periodicity::find_period;
use crate::result::AnalysisResult;

/// Stateless analyzer parameterized by thresholds and tolerances.
///
/// Analysis never fails for a constructed [`Signal`]; only building an
/// analyzer from an invalid config does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, signal: &Signal) -> AnalysisResult {
        self.analyze_samples(signal.samples())
    }

    /// Analyze a bare sample slice. An empty slice reads as silence.
    pub fn analyze_samples(&self, samples: &[f64]) -> AnalysisResult {
        let cfg = &self.config;
        let energy = energy(samples);
        let power = power(samples);
        let period = find_period(samples, cfg.max_period, cfg.tolerance);

        let result = AnalysisResult {
            energy,
            power,
            classification: classify(energy, cfg.energy_threshold),
            is_periodic: period.is_some(),
            period,
            is_causal: is_causal(samples, cfg.tolerance),
            is_anti_causal: is_anti_causal(samples, cfg.tolerance),
        };

        tracing::debug!(
            len = samples.len(),
            energy = result.energy,
            power = result.power,
            classification = ?result.classification,
            period = ?result.period,
            causal = result.is_causal,
            anti_causal = result.is_anti_causal,
            "analyzed signal"
        );

        result
    }
}

/// Analyze with the default configuration.
pub fn analyze(signal: &Signal) -> AnalysisResult {
    Analyzer::default().analyze(signal)
}
