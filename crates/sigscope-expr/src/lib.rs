//! # sigscope-expr
//!
//! Evaluates a symbolic expression in one free variable on a fixed grid.
//!
//! - `t` expressions are continuous and sampled at 1000 evenly spaced points
//!   over `[0, 10]`
//! - `n` expressions are discrete and sampled at the integers `0..=19`
//!
//! Supported syntax: arithmetic (`+ - * / % ^ **`), comparisons
//! (`< <= > >= == !=`, yielding 1 or 0), logical `&& || !`, the constants
//! `pi` and `e`, and common functions (`sin`, `cos`, `exp`, `log`, `sqrt`,
//! `abs`, `heaviside`/`u`, `rect`, `sinc`, `min`, `max`, ...).
//!
//! Evaluation is all-or-nothing: a parse error, or a non-finite value at any
//! grid point, fails the whole request.
//!
//! ## Example
//!
//! ```rust
//! use sigscope_expr::evaluate;
//!
//! let points = evaluate("(n >= 3) * 2", "n").unwrap();
//! assert_eq!(points.len(), 20);
//! assert_eq!(points[2], (2.0, 0.0));
//! assert_eq!(points[3], (3.0, 2.0));
//! ```

pub mod ast;
pub mod error;
pub mod grid;
pub mod lexer;
pub mod parser;

use std::collections::BTreeSet;

pub use error::{Error, ExprError, Result};
pub use grid::{FreeVariable, Grid, CONTINUOUS_END, CONTINUOUS_POINTS, DISCRETE_POINTS};

/// A parsed expression together with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: ast::Expr,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self> {
        let root = parser::parse(source).map_err(|e| invalid(source, &e))?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of all variables the expression references
    pub fn variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.root.collect_variables(&mut out);
        out
    }

    /// The free variable this expression is written in.
    ///
    /// Exactly one of `t` or `n` must appear, and nothing else.
    pub fn infer_variable(&self) -> Result<FreeVariable> {
        let vars = self.variables();
        let mut names = vars.iter().map(String::as_str);
        match (names.next(), names.next()) {
            (Some(only), None) => only.parse(),
            (None, _) => Err(Error::UnrecognizedDomain(format!(
                "'{}' references no free variable; expected 't' or 'n'",
                self.source
            ))),
            (Some(_), Some(_)) => Err(Error::UnrecognizedDomain(format!(
                "'{}' mixes variables {:?}; expected exactly one of 't' or 'n'",
                self.source, vars
            ))),
        }
    }

    /// Fail if the expression names any variable other than `var`.
    fn check_variables(&self, var: FreeVariable) -> Result<()> {
        match self.variables().into_iter().find(|v| v != var.symbol()) {
            Some(foreign) => Err(Error::UnrecognizedDomain(format!(
                "'{}' uses '{}' but the free variable is '{}'",
                self.source, foreign, var
            ))),
            None => Ok(()),
        }
    }

    /// Value at a single point
    pub fn eval_at(&self, var: FreeVariable, x: f64) -> Result<f64> {
        let value = self
            .root
            .eval(var.symbol(), x)
            .map_err(|e| invalid(&self.source, &e))?;
        if !value.is_finite() {
            return Err(invalid(
                &self.source,
                &ExprError::NonFinite {
                    variable: var.symbol().to_string(),
                    at: x,
                    value,
                },
            ));
        }
        Ok(value)
    }

    /// Sample the expression over the grid of `var`.
    ///
    /// Returns `(axis_value, sample_value)` pairs in grid order.
    pub fn sample(&self, var: FreeVariable) -> Result<Vec<(f64, f64)>> {
        self.check_variables(var)?;
        let points = var
            .grid()
            .values()
            .into_iter()
            .map(|x| self.eval_at(var, x).map(|y| (x, y)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            expression = %self.source,
            variable = %var,
            points = points.len(),
            "sampled expression"
        );
        Ok(points)
    }
}

fn invalid(source: &str, err: &ExprError) -> Error {
    Error::InvalidExpression {
        expression: source.to_string(),
        detail: err.to_string(),
    }
}

/// Parse `expression` and sample it over the grid of `free_variable`
/// (`"t"` or `"n"`).
pub fn evaluate(expression: &str, free_variable: &str) -> Result<Vec<(f64, f64)>> {
    let var: FreeVariable = free_variable.parse()?;
    Expression::parse(expression)?.sample(var)
}

/// Like [`evaluate`], inferring the free variable from the expression.
pub fn evaluate_inferred(expression: &str) -> Result<(FreeVariable, Vec<(f64, f64)>)> {
    let parsed = Expression::parse(expression)?;
    let var = parsed.infer_variable()?;
    Ok((var, parsed.sample(var)?))
}
