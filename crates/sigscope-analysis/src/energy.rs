//! Energy, power, and the energy/power classification.

/// Display heuristic: energy below the threshold reads as an energy signal.
///
/// This is not the formal definition (any finite-energy signal is an energy
/// signal); it reproduces the classification users already rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Classification {
    EnergySignal,
    PowerSignal,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::EnergySignal => "Energy Signal",
            Classification::PowerSignal => "Power Signal",
        }
    }
}

/// `Σ |x[i]|²`
pub fn energy(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s * s).sum()
}

/// Mean squared magnitude, `energy / N`. Zero for an empty slice.
pub fn power(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    energy(samples) / samples.len() as f64
}

pub fn classify(energy: f64, threshold: f64) -> Classification {
    if energy < threshold {
        Classification::EnergySignal
    } else {
        Classification::PowerSignal
    }
}
