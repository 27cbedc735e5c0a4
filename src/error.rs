//! Centralized error type for the sigscope umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.
//! All errors originate from signal construction; analysis itself never fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sigscope_core::Error),

    #[error(transparent)]
    Expr(#[from] sigscope_expr::Error),

    #[error("Malformed literal '{input}': {token:?} is not a number")]
    MalformedLiteral { input: String, token: String },
}

/// Flat view of the error taxonomy, for callers that only need to branch on
/// the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownLabel,
    UnrecognizedDomain,
    InvalidExpression,
    MalformedLiteral,
    InvalidSignal,
    InvalidConfig,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Core(sigscope_core::Error::UnknownLabel(_)) => ErrorKind::UnknownLabel,
            Error::Core(sigscope_core::Error::InvalidSignal(_)) => ErrorKind::InvalidSignal,
            Error::Core(sigscope_core::Error::InvalidConfig(_)) => ErrorKind::InvalidConfig,
            Error::Expr(sigscope_expr::Error::UnrecognizedDomain(_)) => {
                ErrorKind::UnrecognizedDomain
            }
            Error::Expr(sigscope_expr::Error::InvalidExpression { .. }) => {
                ErrorKind::InvalidExpression
            }
            Error::MalformedLiteral { .. } => ErrorKind::MalformedLiteral,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
