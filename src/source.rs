//! Inbound requests: where a signal comes from.

use sigscope_core::{DomainKind, TransformOp};

/// One of the accepted signal sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Catalog entry, laid out on the axis for `domain`
    Catalog { label: String, domain: DomainKind },
    /// Comma-separated numbers, e.g. `"1, 0, -1"`
    Literal { text: String, domain: DomainKind },
    /// Expression in `t` or `n`; `None` infers the variable from the text
    Expression {
        text: String,
        variable: Option<String>,
    },
    /// Derived signal; the base resolves recursively
    Transform(Box<TransformSpec>),
    /// Samples handed over by a decoder or file loader
    Raw(RawSamples),
}

impl Source {
    pub fn catalog(label: impl Into<String>) -> Self {
        Source::Catalog {
            label: label.into(),
            domain: DomainKind::Discrete,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Source::Literal {
            text: text.into(),
            domain: DomainKind::Discrete,
        }
    }

    pub fn expression(text: impl Into<String>, variable: impl Into<String>) -> Self {
        Source::Expression {
            text: text.into(),
            variable: Some(variable.into()),
        }
    }

    pub fn expression_inferred(text: impl Into<String>) -> Self {
        Source::Expression {
            text: text.into(),
            variable: None,
        }
    }

    pub fn raw(samples: Vec<f64>, axis: RawAxis) -> Self {
        Source::Raw(RawSamples { samples, axis })
    }

    /// Request the continuous or discrete axis layout.
    ///
    /// Only catalog and literal sources have a choice; the others carry
    /// their own axis and are returned unchanged.
    pub fn in_domain(self, kind: DomainKind) -> Self {
        match self {
            Source::Catalog { label, .. } => Source::Catalog {
                label,
                domain: kind,
            },
            Source::Literal { text, .. } => Source::Literal { text, domain: kind },
            other => other,
        }
    }

    /// Wrap this source in a transform request.
    pub fn transformed(self, op: TransformOp) -> Self {
        Source::Transform(Box::new(TransformSpec { op, base: self }))
    }
}

/// A derived-signal request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSpec {
    pub op: TransformOp,
    pub base: Source,
}

impl TransformSpec {
    pub fn new(op: TransformOp, base: Source) -> Self {
        Self { op, base }
    }
}

/// Raw sample sequence plus whatever the collaborator knows about its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSamples {
    pub samples: Vec<f64>,
    pub axis: RawAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawAxis {
    /// No timing information: discrete, indexed from 0
    Indices,
    /// Uniform sampling in Hz: continuous, `t[i] = i / rate`
    SampleRate(f64),
    /// Time values in seconds (e.g. first column of a table): continuous
    Explicit(Vec<f64>),
}
