//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

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

/// Inputs that must be rejected before any integration happens
pub fn rejected_inputs() -> Vec<(Vec<f64>, Vec<f64>)> {
    vec![
        (vec![], vec![]),
        (vec![1.0], vec![1.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![0.0, 0.0], vec![1.0, 1.0]),
        (vec![0.0, 2.0, 1.0], vec![1.0, 1.0, 1.0]),
        (vec![0.0, f64::NAN], vec![1.0, 1.0]),
        (vec![0.0, 1.0], vec![f64::NEG_INFINITY, 1.0]),
    ]
}
