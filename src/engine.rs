//! `SignalAnalyzer`: construct a signal from a source and analyze it.

use sigscope_analysis::{AnalysisResult, Analyzer};
use sigscope_core::{AnalysisConfig, Signal};

use crate::builder::SignalAnalyzerBuilder;
use crate::construct::construct;
use crate::source::Source;
use crate::Result;

/// A constructed signal together with its analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub signal: Signal,
    pub result: AnalysisResult,
}

/// Entry point for one analysis round.
///
/// Holds only configuration. Each call builds its own signal, so a single
/// analyzer can be shared freely; callers that keep a "current signal"
/// between rounds hold it themselves and resubmit a new [`Source`].
///
/// # Example
///
/// ```rust
/// use sigscope::prelude::*;
///
/// let analyzer = SignalAnalyzer::builder().build()?;
/// let analysis = analyzer.run(&Source::literal("1, 0, -1, 0, 1"))?;
///
/// assert_eq!(analysis.result.energy, 3.0);
/// assert!(!analysis.result.is_causal);
/// # Ok::<(), sigscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalAnalyzer {
    analyzer: Analyzer,
}

impl SignalAnalyzer {
    pub fn builder() -> SignalAnalyzerBuilder {
        SignalAnalyzerBuilder::default()
    }

    pub(crate) fn from_analyzer(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.analyzer.config()
    }

    pub fn construct(&self, source: &Source) -> Result<Signal> {
        construct(source)
    }

    pub fn analyze(&self, signal: &Signal) -> AnalysisResult {
        self.analyzer.analyze(signal)
    }

    /// Construct and analyze in one step.
    pub fn run(&self, source: &Source) -> Result<Analysis> {
        let signal = construct(source)?;
        let result = self.analyzer.analyze(&signal);
        Ok(Analysis { signal, result })
    }
}
