//! # sigscope-core
//!
//! Core types for one-dimensional signal analysis:
//! - **Signal**: immutable samples plus a strictly increasing axis
//! - **Catalog**: canonical reference signals looked up by label
//! - **Transforms**: modulus, first difference, running sum, scaling
//! - **Config**: thresholds and tolerances used by the analysis engine
//!
//! ## Example
//!
//! ```rust
//! use sigscope_core::{catalog, transform, TransformOp};
//!
//! let ramp = catalog::lookup("Ramp Signal").unwrap();
//! let slope = transform(&ramp, TransformOp::Derivative);
//! assert_eq!(slope.samples()[10], 1.0);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod signal;
pub mod transform;

pub use config::{AnalysisConfig, DEFAULT_ENERGY_THRESHOLD, DEFAULT_MAX_PERIOD, DEFAULT_TOLERANCE};
pub use error::{Error, Result};
pub use signal::{index_axis, linspace, DomainKind, Signal};
pub use transform::{transform, TransformOp, DEFAULT_SCALE_FACTOR};
