//! Catalog integration tests
//!
//! Every reference signal constructed through the public API and checked
//! against its known properties.

use approx::assert_relative_eq;
use sigscope::catalog;
use sigscope::prelude::*;

use crate::helpers::tolerances::FLOAT_EPSILON;
use crate::helpers::*;

#[test]
fn test_catalog_labels_in_presentation_order() {
    assert_eq!(
        catalog::labels(),
        &[
            "Exponential Decay",
            "Sine Wave",
            "Cosine Wave",
            "Unit Step Signal",
            "Unit Impulse Signal",
            "Ramp Signal",
            "Non-Causal",
        ]
    );
}

#[test]
fn test_catalog_unit_impulse() {
    let analysis = analyze_source(&Source::catalog("Unit Impulse Signal"));
    assert_eq!(analysis.result.energy, 1.0);
    assert_eq!(analysis.result.power, 1.0 / analysis.signal.len() as f64);
    assert_eq!(analysis.result.classification, Classification::EnergySignal);
    assert!(!analysis.result.is_periodic);
}

#[test]
fn test_catalog_sine_and_cosine_have_period_ten() {
    for label in ["Sine Wave", "Cosine Wave"] {
        let analysis = analyze_source(&Source::catalog(label));
        assert_eq!(analysis.signal.len(), 100, "{label}");
        assert!(analysis.result.is_periodic, "{label} should be periodic");
        assert_eq!(analysis.result.period, Some(10), "{label}");
        // ten full cycles of a unit sinusoid: energy = N/2
        assert_relative_eq!(analysis.result.energy, 50.0, epsilon = 1e-9);
    }
}

#[test]
fn test_catalog_exponential_decay() {
    let analysis = analyze_source(&Source::catalog("Exponential Decay"));
    // Σ e^{-2n} → 1 / (1 - e^{-2})
    let expected = 1.0 / (1.0 - (-2.0f64).exp());
    assert_relative_eq!(analysis.result.energy, expected, epsilon = 1e-12);
    assert_eq!(analysis.result.classification, Classification::EnergySignal);
    assert!(!analysis.result.is_periodic);
}

#[test]
fn test_catalog_unit_step_is_constant() {
    let analysis = analyze_source(&Source::catalog("Unit Step Signal"));
    assert_eq!(analysis.result.energy, 50.0);
    assert_eq!(analysis.result.power, 1.0);
    assert_eq!(analysis.result.period, Some(1));
}

#[test]
fn test_catalog_ramp_is_power_signal() {
    let analysis = analyze_source(&Source::catalog("Ramp Signal"));
    assert_eq!(analysis.result.classification, Classification::PowerSignal);
    assert!(analysis.result.energy >= 1000.0);
}

#[test]
fn test_catalog_non_causal_entry() {
    let analysis = analyze_source(&Source::catalog("Non-Causal"));
    assert!(!analysis.result.is_causal);
    assert_eq!(analysis.result.causality(), Causality::Neither);
    assert!(analysis.signal.axis()[0] < 0.0);
}

#[test]
fn test_catalog_continuous_layout_keeps_samples() {
    for label in catalog::labels() {
        let discrete = build(&Source::catalog(*label));
        let continuous = build(&Source::catalog(*label).in_domain(DomainKind::Continuous));
        assert_eq!(continuous.domain_kind(), DomainKind::Continuous);
        assert_eq!(discrete.samples(), continuous.samples(), "{label}");

        let a = test_analyzer().analyze(&discrete);
        let b = test_analyzer().analyze(&continuous);
        assert_eq!(a, b, "{label}: axis layout must not change analysis");
    }
}

#[test]
fn test_catalog_continuous_axis_span() {
    let ramp = build(&Source::catalog("Ramp Signal").in_domain(DomainKind::Continuous));
    let axis = ramp.axis();
    assert_eq!(axis[0], 0.0);
    assert!((axis[axis.len() - 1] - 5.0).abs() < FLOAT_EPSILON);
}

#[test]
fn test_catalog_unknown_label() {
    let err = sigscope::construct(&Source::catalog("Triangle Wave")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownLabel);
    assert!(err.to_string().contains("Triangle Wave"));
}
