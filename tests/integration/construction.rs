//! Construction integration tests
//!
//! Literal lists, expressions, raw samples and transform chains, plus the
//! error taxonomy surfaced to callers.

use sigscope::prelude::*;
use sigscope::{RawAxis, TransformSpec};

use crate::helpers::tolerances::{FLOAT_EPSILON, NUMERIC_EPSILON};
use crate::helpers::*;

#[test]
fn test_literal_defaults_to_discrete_index_axis() {
    let signal = build(&Source::literal("1,0,-1,0,1"));
    assert_eq!(signal.len(), 5);
    assert_eq!(signal.axis(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(signal.domain_kind(), DomainKind::Discrete);
}

#[test]
fn test_malformed_literals_produce_no_signal() {
    for text in ["1,,3", "abc", "", "  ", "1, 2, x"] {
        let err = sigscope::construct(&Source::literal(text)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLiteral, "input {text:?}");
    }
}

#[test]
fn test_expression_continuous_grid() {
    init_tracing();
    let signal = build(&Source::expression("exp(-t) * (t >= 0)", "t"));
    assert_eq!(signal.len(), 1000);
    assert_eq!(signal.domain_kind(), DomainKind::Continuous);
    assert_eq!(signal.axis()[0], 0.0);
    assert!((signal.axis()[999] - 10.0).abs() < FLOAT_EPSILON);
    assert_eq!(signal.samples()[0], 1.0);
}

#[test]
fn test_expression_discrete_grid() {
    let signal = build(&Source::expression("0.5^n", "n"));
    assert_eq!(signal.len(), 20);
    let expected: Vec<f64> = (0..20).map(|n| 0.5f64.powi(n)).collect();
    assert_samples_close(signal.samples(), &expected, FLOAT_EPSILON);
}

#[test]
fn test_expression_errors() {
    let err = sigscope::construct(&Source::expression("sin(w * t)", "t")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedDomain);

    let err = sigscope::construct(&Source::expression("sin(t)", "z")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedDomain);

    let err = sigscope::construct(&Source::expression_inferred("4 * 2")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedDomain);

    let err = sigscope::construct(&Source::expression("sin(t))", "t")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    assert!(err.to_string().contains("sin(t))"));

    let err = sigscope::construct(&Source::expression("sqrt(t - 5)", "t")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
}

#[test]
fn test_expression_identical_input_identical_output() {
    let a = build(&Source::expression("sin(3 * t) + cos(t)^2", "t"));
    let b = build(&Source::expression("sin(3 * t) + cos(t)^2", "t"));
    assert_eq!(a, b);
}

#[test]
fn test_transform_source_recursion() {
    let spec = TransformSpec::new(
        TransformOp::Modulus,
        Source::literal("-1, 2, -3").transformed(TransformOp::Scale(2.0)),
    );
    let signal = build(&Source::Transform(Box::new(spec)));
    assert_eq!(signal.samples(), &[2.0, 4.0, 6.0]);
}

#[test]
fn test_ramp_integral_derivative_round_trip() {
    let ramp = build(&Source::catalog("Ramp Signal"));

    let di = build(
        &Source::catalog("Ramp Signal")
            .transformed(TransformOp::Integral)
            .transformed(TransformOp::Derivative),
    );
    assert_samples_close(di.samples(), ramp.samples(), NUMERIC_EPSILON);

    let id = build(
        &Source::catalog("Ramp Signal")
            .transformed(TransformOp::Derivative)
            .transformed(TransformOp::Integral),
    );
    assert_samples_close(id.samples(), ramp.samples(), NUMERIC_EPSILON);
}

#[test]
fn test_transform_on_continuous_expression_keeps_axis() {
    let base = build(&Source::expression("t^2", "t"));
    let slope = build(&Source::expression("t^2", "t").transformed(TransformOp::Derivative));
    assert_eq!(slope.axis(), base.axis());
    assert_eq!(slope.domain_kind(), DomainKind::Continuous);
    // first difference, not a true derivative
    assert_eq!(slope.samples()[0], base.samples()[0]);
    let step = base.samples()[2] - base.samples()[1];
    assert!((slope.samples()[2] - step).abs() < FLOAT_EPSILON);
}

#[test]
fn test_raw_samples_from_decoder() {
    let samples: Vec<f64> = (0..441).map(|i| (i as f64 * 0.01).sin()).collect();
    let signal = build(&Source::raw(samples.clone(), RawAxis::SampleRate(44100.0)));
    assert_eq!(signal.domain_kind(), DomainKind::Continuous);
    assert!((signal.axis()[441 - 1] - 440.0 / 44100.0).abs() < FLOAT_EPSILON);

    let signal = build(&Source::raw(samples, RawAxis::Indices));
    assert_eq!(signal.domain_kind(), DomainKind::Discrete);
}

#[test]
fn test_raw_table_axis() {
    let signal = build(&Source::raw(
        vec![0.0, 1.0, 0.0],
        RawAxis::Explicit(vec![-0.5, 0.0, 0.5]),
    ));
    assert_eq!(signal.axis(), &[-0.5, 0.0, 0.5]);
    assert_eq!(signal.domain_kind(), DomainKind::Continuous);

    let err = sigscope::construct(&Source::raw(
        vec![0.0, 1.0],
        RawAxis::Explicit(vec![0.0, 0.0]),
    ))
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSignal);
}

#[test]
fn test_deeply_nested_expression_is_rejected() {
    let depth = 10_000;
    let text = format!("{}t{}", "(".repeat(depth), ")".repeat(depth));
    let err = sigscope::construct(&Source::expression(text, "t")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);

    let text = format!("{}n", "-".repeat(depth));
    let err = sigscope::construct(&Source::expression_inferred(text)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
}

#[test]
fn test_long_flat_expression() {
    let text = vec!["n"; 50_000].join("+");
    let signal = build(&Source::expression(text, "n"));
    assert_eq!(signal.len(), 20);
    assert_eq!(signal.samples()[19], 19.0 * 50_000.0);
}

#[test]
fn test_long_literal_list() {
    let text = (0..100_000)
        .map(|i| (i % 7).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let analysis = test_analyzer().run(&Source::literal(text)).unwrap();
    assert_eq!(analysis.signal.len(), 100_000);
    assert_eq!(analysis.result.period, Some(7));
}
