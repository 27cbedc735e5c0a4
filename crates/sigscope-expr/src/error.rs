//! Error types for sigscope-expr

use thiserror::Error;

/// Errors surfaced to callers of the evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Free variable is not `t` or `n`, the expression uses a foreign
    /// variable, or no free variable could be inferred.
    #[error("Unrecognized domain: {0}")]
    UnrecognizedDomain(String),

    #[error("Invalid expression '{expression}': {detail}")]
    InvalidExpression { expression: String, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Low-level parse and evaluation failures.
///
/// Rendered into the `detail` of [`Error::InvalidExpression`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number '{text}' at position {pos}")]
    BadNumber { text: String, pos: usize },

    #[error("unexpected {found} at position {pos}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        pos: usize,
    },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{name}' takes {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("expression nested deeper than {max} levels at position {pos}")]
    TooDeep { max: usize, pos: usize },

    #[error("unbound variable '{0}'")]
    UnboundVariable(String),

    #[error("expression evaluates to {value} at {variable} = {at}")]
    NonFinite {
        variable: String,
        at: f64,
        value: f64,
    },
}
