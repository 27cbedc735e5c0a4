//! # sigscope - Signal Construction and Analysis
//!
//! Classifies one-dimensional signals by standard signal-processing
//! properties.
//!
//! ## Architecture
//!
//! sigscope is an umbrella crate that coordinates:
//! - **sigscope-core** - `Signal`, sample catalog, transforms, config
//! - **sigscope-expr** - expression parser and grid evaluator
//! - **sigscope-analysis** - energy/power, periodicity, causality
//!
//! and adds the signal constructor, which turns any [`Source`] (catalog
//! label, literal list, expression, transform chain, raw samples) into a
//! validated [`Signal`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sigscope::prelude::*;
//!
//! let analyzer = SignalAnalyzer::builder().build()?;
//!
//! let sine = analyzer.run(&Source::catalog("Sine Wave"))?;
//! assert_eq!(sine.result.period, Some(10));
//!
//! let scaled = Source::catalog("Unit Step Signal").transformed(TransformOp::Scale(0.0));
//! let silent = analyzer.run(&scaled)?;
//! assert_eq!(silent.result.energy, 0.0);
//! # Ok::<(), sigscope::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serialization` - serde support for signals, configs and results

/// Re-export of sigscope-core for direct access
pub use sigscope_core as core;

/// Re-export of sigscope-expr
pub use sigscope_expr as expr;

/// Re-export of sigscope-analysis
pub use sigscope_analysis as analysis;

mod builder;
mod construct;
mod engine;
mod error;
mod source;

pub use builder::SignalAnalyzerBuilder;
pub use construct::{construct, parse_literal};
pub use engine::{Analysis, SignalAnalyzer};
pub use error::{Error, ErrorKind, Result};
pub use source::{RawAxis, RawSamples, Source, TransformSpec};

pub use sigscope_analysis::{analyze, AnalysisResult, Causality, Classification};
pub use sigscope_core::{catalog, transform, AnalysisConfig, DomainKind, Signal, TransformOp};
pub use sigscope_expr::{evaluate, FreeVariable};

pub mod prelude {
    pub use crate::{SignalAnalyzer, SignalAnalyzerBuilder};

    pub use crate::{Analysis, Source, TransformSpec};

    pub use crate::{AnalysisResult, Causality, Classification};

    pub use crate::{DomainKind, Signal, TransformOp};

    pub use crate::{Error, ErrorKind};
}
