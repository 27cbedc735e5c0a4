//! Fixed sampling grids and the free-variable convention.

use std::fmt;
use std::str::FromStr;

use sigscope_core::{linspace, DomainKind};

use crate::error::Error;

/// Points sampled for continuous (`t`) expressions.
pub const CONTINUOUS_POINTS: usize = 1000;
/// Continuous expressions cover `[0, CONTINUOUS_END]`.
pub const CONTINUOUS_END: f64 = 10.0;
/// Discrete (`n`) expressions cover `0..DISCRETE_POINTS`.
pub const DISCRETE_POINTS: usize = 20;

/// The single free variable an expression is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreeVariable {
    /// Continuous time
    T,
    /// Discrete index
    N,
}

impl FreeVariable {
    pub fn symbol(self) -> &'static str {
        match self {
            FreeVariable::T => "t",
            FreeVariable::N => "n",
        }
    }

    pub fn domain_kind(self) -> DomainKind {
        match self {
            FreeVariable::T => DomainKind::Continuous,
            FreeVariable::N => DomainKind::Discrete,
        }
    }

    pub fn grid(self) -> Grid {
        match self {
            FreeVariable::T => Grid {
                start: 0.0,
                end: CONTINUOUS_END,
                points: CONTINUOUS_POINTS,
            },
            FreeVariable::N => Grid {
                start: 0.0,
                end: (DISCRETE_POINTS - 1) as f64,
                points: DISCRETE_POINTS,
            },
        }
    }
}

impl fmt::Display for FreeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FreeVariable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "t" => Ok(FreeVariable::T),
            "n" => Ok(FreeVariable::N),
            "" => Err(Error::UnrecognizedDomain(
                "no free variable given; expected 't' or 'n'".to_string(),
            )),
            other => Err(Error::UnrecognizedDomain(format!(
                "free variable '{other}' is not 't' or 'n'"
            ))),
        }
    }
}

/// Evenly spaced sampling grid, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl Grid {
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.points)
    }
}
