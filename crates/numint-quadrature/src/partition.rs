//! Splitting a dataset into evenly spaced runs
//!
//! A single left-to-right pass over the spacings `x[i+1] - x[i]`. Each run
//! extends while spacings match the run's first spacing within a relative
//! tolerance; the first mismatch starts a new run. Runs of two or more
//! intervals are uniform, single-interval runs are non-uniform.

use crate::types::{Partition, Spacing};
use numint_core::{check_strictly_increasing, Dataset, Error, Result};

/// Default relative tolerance for "equal" spacings
pub const DEFAULT_SPACING_TOLERANCE: f64 = 1e-9;

/// Groups consecutive equal spacings into partitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partitioner {
    tolerance: f64,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SPACING_TOLERANCE,
        }
    }
}

impl Partitioner {
    /// Create a partitioner with a relative spacing tolerance
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `tolerance` is negative or not finite.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Spacing tolerance must be a finite non-negative number (got {tolerance})"
            )));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Partition a validated dataset
    pub fn partition(&self, dataset: &Dataset) -> Vec<Partition> {
        self.partition_sorted(dataset.xs())
    }

    /// Partition raw abscissae, validating them first
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`] for fewer than two points
    /// - [`Error::NonMonotonicInput`] if `xs` is not strictly increasing
    pub fn partition_abscissae(&self, xs: &[f64]) -> Result<Vec<Partition>> {
        if xs.len() < Dataset::MIN_SAMPLES {
            return Err(Error::InsufficientData {
                expected: Dataset::MIN_SAMPLES,
                actual: xs.len(),
            });
        }
        check_strictly_increasing(xs)?;
        Ok(self.partition_sorted(xs))
    }

    fn partition_sorted(&self, xs: &[f64]) -> Vec<Partition> {
        let spacings: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let mut partitions = Vec::new();
        let mut start = 0;

        while start < spacings.len() {
            let reference = spacings[start];
            let mut end = start + 1;
            while end < spacings.len() && self.same_spacing(spacings[end], reference) {
                end += 1;
            }

            let intervals = end - start;
            let spacing = if intervals >= 2 {
                Spacing::Uniform {
                    step: (xs[end] - xs[start]) / intervals as f64,
                }
            } else {
                Spacing::NonUniform
            };
            partitions.push(Partition::new(start, end, spacing));
            start = end;
        }

        partitions
    }

    fn same_spacing(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance * a.abs().max(b.abs())
    }
}
