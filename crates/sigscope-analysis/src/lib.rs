//! # sigscope-analysis
//!
//! Characterizes a [`Signal`](sigscope_core::Signal) by:
//! - **Energy / power**: `Σ|x|²` and its mean, with a threshold-based
//!   energy/power classification
//! - **Periodicity**: smallest lag at which the signal matches itself
//! - **Causality**: whether the signal is negligible before (causal) or after
//!   (anti-causal) the origin of a symmetric index axis
//!
//! Every operation is a pure function of the samples. Nothing here fails for
//! a constructed signal.
//!
//! ## Example
//!
//! ```rust
//! use sigscope_analysis::analyze;
//! use sigscope_core::catalog;
//!
//! let sine = catalog::lookup("Sine Wave").unwrap();
//! let result = analyze(&sine);
//! assert_eq!(result.period, Some(10));
//! ```

pub mod causality;
pub mod energy;
pub mod periodicity;

mod analyzer;
mod result;

pub use analyzer::{analyze, Analyzer};
pub use causality::{centered_axis, is_anti_causal, is_causal, Causality};
pub use energy::{classify, energy, power, Classification};
pub use periodicity::find_period;
pub use result::AnalysisResult;
