//! Computational primitives (Layer 1)
//!
//! Kernels in `numint-quadrature` express every formula in terms of these
//! operations. All reductions fold strictly left to right so results are
//! reproducible across backends and runs.

/// Low-level slice operations used by the quadrature kernels
pub trait ComputePrimitives: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Sum all elements in a slice
    fn sum(&self, data: &[f64]) -> f64 {
        data.iter().fold(0.0, |acc, &x| acc + x)
    }

    /// Sum of `data[start], data[start + step], ...` strictly before `end`
    fn strided_sum(&self, data: &[f64], start: usize, end: usize, step: usize) -> f64 {
        debug_assert!(step > 0, "Stride must be positive");
        let end = end.min(data.len());
        if start >= end {
            return 0.0;
        }
        data[start..end].iter().step_by(step).fold(0.0, |acc, &x| acc + x)
    }

    /// Largest absolute value, `0.0` for an empty slice
    fn max_abs(&self, data: &[f64]) -> f64 {
        data.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }

    /// Largest `|data[i] - data[i - 1]|`, `0.0` for fewer than two elements
    fn max_abs_step(&self, data: &[f64]) -> f64 {
        data.windows(2)
            .fold(0.0_f64, |acc, w| acc.max((w[1] - w[0]).abs()))
    }

    /// `order`-th forward differences of `data`
    ///
    /// Returns an empty vector when `data.len() <= order`.
    fn forward_differences(&self, data: &[f64], order: usize) -> Vec<f64> {
        if data.len() <= order {
            return Vec::new();
        }
        let mut diffs = data.to_vec();
        for _ in 0..order {
            diffs = diffs.windows(2).map(|w| w[1] - w[0]).collect();
        }
        diffs
    }
}

/// Scalar backend - plain sequential loops
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ComputePrimitives for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}
