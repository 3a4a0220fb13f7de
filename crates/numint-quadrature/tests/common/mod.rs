//! Shared utilities for integration tests

#![allow(dead_code)]

use numint_core::{Dataset, ScalarBackend};
use numint_quadrature::{AdaptiveIntegrator, IntegrationParameters, IntegrationResult, Integrator, Rule};

pub use approx::assert_relative_eq;

/// Absolute slack scaled to the magnitudes involved
pub fn tolerance(exact: f64, scale: f64) -> f64 {
    1e-9 * (1.0 + exact.abs() + scale.abs())
}

/// Strictly increasing grid built from positive gaps, starting at `origin`
pub fn grid_from_gaps(origin: f64, gaps: &[f64]) -> Vec<f64> {
    let mut xs = Vec::with_capacity(gaps.len() + 1);
    xs.push(origin);
    for &g in gaps {
        let last = xs[xs.len() - 1];
        xs.push(last + g);
    }
    xs
}

pub fn dataset_of<F: Fn(f64) -> f64>(xs: &[f64], f: F) -> Dataset {
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
    Dataset::from_xy(xs, &ys).unwrap()
}

pub fn adaptive(dataset: &Dataset) -> IntegrationResult {
    AdaptiveIntegrator::new(ScalarBackend::new())
        .integrate(dataset)
        .unwrap()
}

pub fn forced(rule: Rule, dataset: &Dataset) -> numint_core::Result<IntegrationResult> {
    AdaptiveIntegrator::with_parameters(ScalarBackend::new(), IntegrationParameters::fixed(rule))?
        .integrate(dataset)
}
