//! Analysis results

use std::fmt;

use crate::causality::Causality;
use crate::energy::Classification;

/// Everything the engine reports about one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AnalysisResult {
    /// `Σ |x[i]|²`
    pub energy: f64,
    /// `energy / N`
    pub power: f64,
    pub classification: Classification,
    pub is_periodic: bool,
    /// Smallest period in samples, present iff `is_periodic`
    pub period: Option<usize>,
    pub is_causal: bool,
    pub is_anti_causal: bool,
}

impl AnalysisResult {
    pub fn causality(&self) -> Causality {
        Causality::from_flags(self.is_causal, self.is_anti_causal)
    }

    pub fn is_energy_signal(&self) -> bool {
        self.classification == Classification::EnergySignal
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Human-readable summary. Rounding here is presentation only.
impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Energy: {:.4}", self.energy)?;
        writeln!(f, "Power: {:.4}", self.power)?;
        writeln!(f, "Classified as: {}", self.classification.label())?;
        match self.period {
            Some(period) => writeln!(f, "Periodic: Yes (Period = {})", period)?,
            None => writeln!(f, "Periodic: No")?,
        }
        writeln!(f, "Causal: {}", yes_no(self.is_causal))?;
        write!(f, "Anti-causal: {}", yes_no(self.is_anti_causal))
    }
}
