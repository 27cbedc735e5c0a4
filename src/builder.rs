//! Builder for configuring and constructing a `SignalAnalyzer`.

use sigscope_analysis::Analyzer;
use sigscope_core::AnalysisConfig;

use crate::{Result, SignalAnalyzer};

/// Thresholds default to the values in [`AnalysisConfig::default`]; they are
/// validated in [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use sigscope::prelude::*;
///
/// let analyzer = SignalAnalyzer::builder()
///     .energy_threshold(500.0)
///     .tolerance(1e-6)
///     .max_period(50)
///     .build()?;
///
/// assert_eq!(analyzer.config().max_period, 50);
/// # Ok::<(), sigscope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignalAnalyzerBuilder {
    config: AnalysisConfig,
}

impl SignalAnalyzerBuilder {
    /// Default: 1000
    pub fn energy_threshold(mut self, threshold: f64) -> Self {
        self.config.energy_threshold = threshold;
        self
    }

    /// Default: 1e-5
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Default: 100
    pub fn max_period(mut self, max_period: usize) -> Self {
        self.config.max_period = max_period;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<SignalAnalyzer> {
        let analyzer = Analyzer::new(self.config)?;
        tracing::debug!(config = ?self.config, "built signal analyzer");
        Ok(SignalAnalyzer::from_analyzer(analyzer))
    }
}
