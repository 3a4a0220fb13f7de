//! End-to-end integration scenarios

mod common;

use common::*;
use numint_core::{Dataset, Error, ScalarBackend};
use numint_quadrature::{
    integrate, AdaptiveIntegrator, DerivativeBounds, EstimateKind, IntegrationMethod,
    IntegrationParameters, Integrator, Rule, Spacing,
};
use std::f64::consts::PI;

#[test]
fn test_parabola_uses_simpson_one_third() {
    let ds = dataset_of(&[0.0, 1.0, 2.0, 3.0, 4.0], |x| x * x);
    let result = adaptive(&ds);

    assert_relative_eq!(result.value(), 64.0 / 3.0, epsilon = 1e-12);
    assert_eq!(result.partitions().len(), 1);
    assert_eq!(result.partitions()[0].spacing, Spacing::Uniform { step: 1.0 });
    assert_eq!(result.steps().len(), 1);
    assert_eq!(result.steps()[0].rule(), Rule::Simpson13);
    assert_eq!(result.steps()[0].x_range(), (0.0, 4.0));
}

#[test]
fn test_forced_trapezoidal() {
    let ds = Dataset::from_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0, 2.0]).unwrap();
    let result = forced(Rule::Trapezoidal, &ds).unwrap();
    assert_relative_eq!(result.value(), 3.5, epsilon = 1e-12);
    assert_eq!(result.rules_used(), vec![Rule::Trapezoidal]);
}

#[test]
fn test_non_uniform_grid() {
    let ds = Dataset::from_xy(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap();
    let result = adaptive(&ds);

    assert_relative_eq!(result.value(), 10.5, epsilon = 1e-12);
    assert_eq!(result.partitions().len(), 2);
    assert!(result.partitions().iter().all(|p| p.spacing == Spacing::NonUniform));
    assert!(result.has_heuristic_error());
    assert_eq!(result.method_name(), "Adaptive (Trapezoidal)");
}

#[test]
fn test_two_samples() {
    let ds = Dataset::from_xy(&[1.0, 3.0], &[2.0, 4.0]).unwrap();
    let result = adaptive(&ds);
    assert_relative_eq!(result.value(), 6.0);
    assert_eq!(result.rules_used(), vec![Rule::Trapezoidal]);
}

#[test]
fn test_forced_simpson_three_eighths_on_two_points() {
    let ds = Dataset::from_xy(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    let err = forced(Rule::Simpson38, &ds).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { expected: 4, actual: 2 }));

    let err = forced(Rule::Simpson13, &ds).unwrap_err();
    assert!(matches!(err, Error::InsufficientData { expected: 3, actual: 2 }));
}

#[test]
fn test_rejects_invalid_input() {
    let integrator = AdaptiveIntegrator::new(ScalarBackend::new());
    assert!(matches!(
        integrator.integrate_xy(&[0.0], &[1.0]),
        Err(Error::InsufficientData { expected: 2, actual: 1 })
    ));
    assert!(matches!(
        integrator.integrate_xy(&[0.0, 2.0, 1.0], &[1.0, 1.0, 1.0]),
        Err(Error::NonMonotonicInput { index: 2, .. })
    ));
    assert!(matches!(
        integrator.integrate_xy(&[0.0, 1.0], &[1.0, f64::NAN]),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_odd_run_gets_trapezoidal_tail() {
    let xs: Vec<f64> = (0..=5).map(f64::from).collect();
    let ds = dataset_of(&xs, |x| x * x);
    let result = adaptive(&ds);

    let plan: Vec<(Rule, usize)> = result
        .steps()
        .iter()
        .map(|s| (s.rule(), s.segment().intervals()))
        .collect();
    assert_eq!(plan, vec![(Rule::Simpson13, 4), (Rule::Trapezoidal, 1)]);
    assert_relative_eq!(result.value(), 64.0 / 3.0 + 20.5, epsilon = 1e-12);
    assert_eq!(result.method_name(), "Adaptive (Simpson's 1/3 + Trapezoidal)");
}

#[test]
fn test_mixed_spacing_partitions() {
    // h = 1 over [0, 4], h = 2 over [4, 10], then a lone interval to 10.5
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 10.0, 10.5];
    let ds = dataset_of(&xs, |x| 2.0 * x + 1.0);
    let result = adaptive(&ds);

    assert_eq!(result.partitions().len(), 3);
    assert_eq!(
        result.rules_used(),
        vec![Rule::Simpson13, Rule::Simpson38, Rule::Trapezoidal]
    );
    // Linear data is integrated exactly by every rule
    assert_relative_eq!(result.value(), 10.5 * 10.5 + 10.5, epsilon = 1e-9);

    let partition_ids: Vec<usize> = result.steps().iter().map(|s| s.partition()).collect();
    assert_eq!(partition_ids, vec![0, 1, 2]);
}

#[test]
fn test_method_labels() {
    let xs: Vec<f64> = (0..=5).map(f64::from).collect();
    let ds = dataset_of(&xs, |x| x);

    let hybrid = forced(Rule::Simpson13, &ds).unwrap();
    assert_eq!(hybrid.method_name(), "Simpson's 1/3 + Trapezoidal (Hybrid)");

    let exact = forced(Rule::Simpson38, &dataset_of(&xs[..4], |x| x)).unwrap();
    assert_eq!(exact.method_name(), "Simpson's 3/8 Rule");

    let multi = forced(Rule::Simpson13, &dataset_of(&[0.0, 1.0, 2.0, 4.0], |x| x)).unwrap();
    assert_eq!(multi.method_name(), "Simpson's 1/3 Rule (Adaptive)");
}

#[test]
fn test_error_bounds_cover_actual_error() {
    for n in [10, 12, 15] {
        let ds = Dataset::from_fn(f64::sin, 0.0, PI, n).unwrap();
        for method in IntegrationMethod::ALL {
            let params = IntegrationParameters::default().with_method(method);
            let result = integrate(ds.xs(), ds.ys(), &params).unwrap();
            let actual = (result.value() - 2.0).abs();
            assert!(
                actual <= result.error_estimate(),
                "{method} n={n}: actual {actual:.3e} > bound {:.3e}",
                result.error_estimate()
            );
            assert!(!result.has_heuristic_error());
        }
    }
}

#[test]
fn test_derivative_hints() {
    let ds = Dataset::from_fn(|x| x.powi(4), 0.0, 2.0, 4).unwrap();
    let params = IntegrationParameters::default()
        .with_derivative_bounds(DerivativeBounds::none().with_fourth(24.0));
    let integrator = AdaptiveIntegrator::with_parameters(ScalarBackend::new(), params).unwrap();
    let result = integrator.integrate(&ds).unwrap();

    let step = &result.steps()[0];
    assert_eq!(step.error().kind, EstimateKind::Analytic);
    assert_eq!(step.error().derivative, Some(24.0));
    // (b - a) * h^4 / 180 * M4 with h = 0.5
    assert_relative_eq!(result.error_estimate(), 2.0 * 0.0625 / 180.0 * 24.0, epsilon = 1e-12);
}

#[test]
fn test_explain_lines() {
    let ds = dataset_of(&[0.0, 1.0, 2.0, 3.0, 4.0], |x| x * x);
    let result = adaptive(&ds);
    let lines = result.steps()[0].explain();

    assert!(lines[0].starts_with("Simpson's 1/3 Rule on samples 0..=4"));
    assert!(lines.iter().any(|l| l.contains("Odd-indexed terms x 4: 40.000000")));
    assert!(lines.iter().any(|l| l.contains("Apply formula")));
    assert!(lines[1].starts_with("Formula: (h/3)"));
    assert!(lines.last().unwrap().ends_with("O(h^4))"));
    assert!(lines.last().unwrap().starts_with("Error estimate"));

    let text = result.to_string();
    assert!(text.contains("Method: Adaptive (Simpson's 1/3)"));
    assert!(text.contains("Value: 21.3333333333"));
}

#[test]
fn test_error_estimate_on_very_fine_grids() {
    let xs: Vec<f64> = (0..5).map(|i| i as f64 * 1e-90).collect();
    let ds = Dataset::from_xy(&xs, &[0.0, 1.0, 0.0, 1.0, 0.0]).unwrap();
    let result = adaptive(&ds);
    assert!(result.error_estimate().is_finite());
    assert!(result.error_estimate() >= 0.0);

    let xs = [0.0, 1e-170, 2e-170];
    let ds = Dataset::from_xy(&xs, &[0.0, 1.0, 0.0]).unwrap();
    let result = forced(Rule::Trapezoidal, &ds).unwrap();
    assert!(result.error_estimate().is_finite());
    assert!(result.error_estimate() >= 0.0);
    assert!(result.has_heuristic_error());
}

#[test]
fn test_serialized_result() {
    let ds = Dataset::from_xy(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap();
    let json = serde_json::to_value(adaptive(&ds)).unwrap();

    assert_eq!(json["method"], "adaptive");
    assert_eq!(json["sample_size"], 3);
    assert_eq!(json["partitions"][0]["spacing"]["kind"], "non_uniform");
    assert_eq!(json["steps"][1]["detail"]["form"], "trapezoidal_pairwise");
    assert_eq!(json["steps"][1]["error"]["kind"], "heuristic");
}
