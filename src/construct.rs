//! Signal Constructor
//!
//! Turns any [`Source`] into a validated [`Signal`]. Construction is
//! all-or-nothing: on error no signal is produced.

use sigscope_core::{catalog, transform, DomainKind, Signal, TransformOp};
use sigscope_expr::{Expression, FreeVariable};

use crate::source::{RawAxis, RawSamples, Source, TransformSpec};
use crate::{Error, Result};

/// Build a signal from `source`.
pub fn construct(source: &Source) -> Result<Signal> {
    let signal = match source {
        Source::Catalog { label, domain } => catalog::lookup_with_domain(label, *domain)?,
        Source::Literal { text, domain } => Signal::with_domain(parse_literal(text)?, *domain)?,
        Source::Expression { text, variable } => from_expression(text, variable.as_deref())?,
        Source::Transform(spec) => from_transform(spec)?,
        Source::Raw(raw) => from_raw(raw)?,
    };
    tracing::debug!(
        len = signal.len(),
        domain = ?signal.domain_kind(),
        "constructed signal"
    );
    Ok(signal)
}

/// Parse comma-separated numbers.
///
/// Tokens are trimmed; an empty token, a non-number, or a non-finite value
/// (`inf`, `NaN`) rejects the whole list.
pub fn parse_literal(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::MalformedLiteral {
                input: text.to_string(),
                token: token.to_string(),
            }),
        })
        .collect()
}

fn from_expression(text: &str, variable: Option<&str>) -> Result<Signal> {
    let expression = Expression::parse(text)?;
    let var = match variable {
        Some(v) => v.parse::<FreeVariable>()?,
        None => expression.infer_variable()?,
    };
    let (axis, samples): (Vec<f64>, Vec<f64>) = expression.sample(var)?.into_iter().unzip();
    Ok(Signal::new(samples, axis, var.domain_kind())?)
}

fn from_transform(spec: &TransformSpec) -> Result<Signal> {
    if let TransformOp::Scale(factor) = spec.op {
        if !factor.is_finite() {
            return Err(sigscope_core::Error::InvalidSignal(format!(
                "scale factor {factor} is not finite"
            ))
            .into());
        }
    }
    let base = construct(&spec.base)?;
    // re-validate: scaling or summing can overflow to infinity
    let (samples, axis, kind) = transform(&base, spec.op).into_parts();
    Ok(Signal::new(samples, axis, kind)?)
}

fn from_raw(raw: &RawSamples) -> Result<Signal> {
    let samples = raw.samples.clone();
    let signal = match &raw.axis {
        RawAxis::Indices => Signal::discrete(samples)?,
        RawAxis::SampleRate(rate) => {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(sigscope_core::Error::InvalidSignal(format!(
                    "sample rate {rate} must be finite and positive"
                ))
                .into());
            }
            let axis = (0..samples.len()).map(|i| i as f64 / rate).collect();
            Signal::new(samples, axis, DomainKind::Continuous)?
        }
        RawAxis::Explicit(axis) => Signal::new(samples, axis.clone(), DomainKind::Continuous)?,
    };
    Ok(signal)
}
