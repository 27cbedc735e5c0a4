//! Analysis integration tests
//!
//! Classification, periodicity and causality scenarios end to end.

use approx::assert_relative_eq;
use sigscope::prelude::*;
use sigscope::AnalysisConfig;

use crate::helpers::*;

#[test]
fn test_literal_scenario() {
    init_tracing();
    let analysis = analyze_source(&Source::literal("1,0,-1,0,1"));
    let result = analysis.result;

    assert_eq!(analysis.signal.axis(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(result.energy, 3.0);
    assert_relative_eq!(result.power, 0.6);
    assert_eq!(result.classification, Classification::EnergySignal);
    assert!(!result.is_periodic);
    assert_eq!(result.period, None);
    // symmetric axis is [-2, -1, 0, 1, 2]; n = -2 carries 1.0
    assert!(!result.is_causal);
}

#[test]
fn test_scale_zero_is_silent() {
    for label in sigscope::catalog::labels() {
        let analysis =
            analyze_source(&Source::catalog(*label).transformed(TransformOp::Scale(0.0)));
        assert_eq!(analysis.result.energy, 0.0, "{label}");
        assert_eq!(analysis.result.power, 0.0, "{label}");
        assert_eq!(analysis.result.classification, Classification::EnergySignal);
        assert_eq!(analysis.result.causality(), Causality::Both);
    }
}

#[test]
fn test_causal_and_anti_causal_literals() {
    let right = analyze_source(&Source::literal("0, 0, 0, 1, 2, 3"));
    assert!(right.result.is_causal);
    assert!(!right.result.is_anti_causal);
    assert_eq!(right.result.causality(), Causality::Causal);

    let left = analyze_source(&Source::literal("3, 2, 1, 0, 0, 0"));
    assert!(!left.result.is_causal);
    assert!(left.result.is_anti_causal);
    assert_eq!(left.result.causality(), Causality::AntiCausal);
}

#[test]
fn test_causality_ignores_signal_axis() {
    // same samples, different axes: the symmetric index axis decides
    let on_indices = analyze_source(&Source::literal("0, 0, 5, 5"));
    let on_time = analyze_source(&Source::raw(
        vec![0.0, 0.0, 5.0, 5.0],
        sigscope::RawAxis::Explicit(vec![-3.0, -2.0, -1.0, -0.5]),
    ));
    assert!(on_indices.result.is_causal);
    assert_eq!(on_indices.result, on_time.result);
}

#[test]
fn test_single_sample_signal() {
    let analysis = analyze_source(&Source::literal("2"));
    assert_eq!(analysis.result.energy, 4.0);
    assert_eq!(analysis.result.power, 4.0);
    assert!(!analysis.result.is_periodic);
    assert!(analysis.result.is_causal);
}

#[test]
fn test_discrete_expression_periodicity() {
    let analysis = analyze_source(&Source::expression("cos(pi * n / 2)", "n"));
    assert_eq!(analysis.result.period, Some(4));
}

#[test]
fn test_energy_threshold_boundary() {
    // energy exactly 1000 is a power signal
    let analysis = analyze_source(&Source::literal("10, 10, 10, 10, 10, 10, 10, 10, 10, 10"));
    assert_eq!(analysis.result.energy, 1000.0);
    assert_eq!(analysis.result.classification, Classification::PowerSignal);
}

#[test]
fn test_custom_configuration() {
    let analyzer = SignalAnalyzer::builder()
        .config(AnalysisConfig {
            energy_threshold: 10_000.0,
            tolerance: 1e-5,
            max_period: 5,
        })
        .build()
        .unwrap();

    let ramp = analyzer.run(&Source::catalog("Ramp Signal")).unwrap();
    assert!(!ramp.result.is_energy_signal());

    let sine = analyzer.run(&Source::catalog("Sine Wave")).unwrap();
    assert!(!sine.result.is_periodic, "period 10 is past max_period 5");

    let step = analyzer.run(&Source::catalog("Unit Step Signal")).unwrap();
    assert!(step.result.is_energy_signal());
}

#[test]
fn test_summary_text() {
    let analysis = analyze_source(&Source::catalog("Sine Wave"));
    let text = analysis.result.to_string();
    assert!(text.contains("Energy: 50.0000"), "{text}");
    assert!(text.contains("Periodic: Yes (Period = 10)"), "{text}");
}
