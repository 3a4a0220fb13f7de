//! Samples and validated datasets
//!
//! A [`Dataset`] is the only input the integrators accept. Construction
//! enforces the invariants every downstream component relies on: at least two
//! samples, finite coordinates, and strictly increasing abscissae.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(x, y)` observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// An ordered, validated sequence of samples
///
/// Abscissae and ordinates are stored as separate columns so that kernels can
/// operate on plain `&[f64]` slices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Dataset {
    /// Minimum number of samples for any integration
    pub const MIN_SAMPLES: usize = 2;

    /// Build a dataset from parallel x/y columns
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the columns differ in length or contain
    ///   NaN/infinite values
    /// - [`Error::InsufficientData`] for fewer than two samples
    /// - [`Error::NonMonotonicInput`] if x is not strictly increasing
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::size_mismatch(xs.len(), ys.len(), "y values"));
        }
        Self::from_columns(xs.to_vec(), ys.to_vec())
    }

    /// Build a dataset from a sequence of samples
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Sample>,
    {
        let (xs, ys): (Vec<f64>, Vec<f64>) = samples
            .into_iter()
            .map(|s| {
                let s = s.into();
                (s.x, s.y)
            })
            .unzip();
        Self::from_columns(xs, ys)
    }

    /// Sample `f` on a uniform grid of `n` subintervals over `[a, b]`
    ///
    /// The grid points are computed as `a + i * h` with `h = (b - a) / n`, and
    /// the last point is pinned to `b` exactly.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `a < b` (both finite) and `n >= 1`.
    pub fn from_fn<F>(f: F, a: f64, b: f64, n: usize) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Integration bounds must be finite (got a={a}, b={b})"
            )));
        }
        if a >= b {
            return Err(Error::InvalidParameter(format!(
                "Lower bound 'a' must be less than upper bound 'b' (got a={a}, b={b})"
            )));
        }
        if n < 1 {
            return Err(Error::InvalidParameter(format!(
                "'n' must be a positive integer (got n={n})"
            )));
        }

        let h = (b - a) / n as f64;
        let xs: Vec<f64> = (0..=n)
            .map(|i| if i == n { b } else { a + i as f64 * h })
            .collect();
        let ys = xs.iter().map(|&x| f(x)).collect();
        Self::from_columns(xs, ys)
    }

    fn from_columns(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        debug_assert_eq!(xs.len(), ys.len());

        if xs.len() < Self::MIN_SAMPLES {
            return Err(Error::InsufficientData {
                expected: Self::MIN_SAMPLES,
                actual: xs.len(),
            });
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample data"));
        }
        check_strictly_increasing(&xs)?;

        Ok(Self { xs, ys })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; a dataset holds at least two samples
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Number of intervals (`len - 1`)
    pub fn intervals(&self) -> usize {
        self.xs.len() - 1
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Sample at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// Iterate samples in x order
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Sample::new(x, y))
    }

    /// Columns for the inclusive sample range `start..=end`
    ///
    /// # Panics
    ///
    /// If `end` is out of bounds or `start > end`.
    pub fn window(&self, start: usize, end: usize) -> (&[f64], &[f64]) {
        (&self.xs[start..=end], &self.ys[start..=end])
    }

    /// `(x_min, x_max)`
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// `(y_min, y_max)`
    pub fn range(&self) -> (f64, f64) {
        self.ys.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        })
    }

    /// Consecutive spacings `x[i+1] - x[i]`
    pub fn spacings(&self) -> Vec<f64> {
        self.xs.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// Verify `xs` is strictly increasing
///
/// # Errors
///
/// [`Error::NonMonotonicInput`] naming the first offending index.
pub fn check_strictly_increasing(xs: &[f64]) -> Result<()> {
    match xs.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(Error::NonMonotonicInput {
            index: i + 1,
            previous: xs[i],
            current: xs[i + 1],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_xy_valid() {
        let ds = Dataset::from_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0, 2.0]).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.intervals(), 2);
        assert_eq!(ds.domain(), (0.0, 2.0));
        assert_eq!(ds.range(), (1.0, 2.0));
        assert_eq!(ds.get(1), Some(Sample::new(1.0, 2.0)));
        assert_eq!(ds.get(3), None);
    }

    #[test]
    fn test_from_xy_rejects_short_input() {
        let err = Dataset::from_xy(&[0.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 2, actual: 1 }));

        let err = Dataset::from_xy(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 2, actual: 0 }));
    }

    #[test]
    fn test_from_xy_rejects_length_mismatch() {
        let err = Dataset::from_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_xy_rejects_non_monotonic() {
        let err = Dataset::from_xy(&[0.0, 2.0, 1.0], &[0.0, 0.0, 0.0]).unwrap_err();
        match err {
            Error::NonMonotonicInput { index, previous, current } => {
                assert_eq!(index, 2);
                assert_eq!(previous, 2.0);
                assert_eq!(current, 1.0);
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        // Duplicates are not strictly increasing either
        let err = Dataset::from_xy(&[0.0, 1.0, 1.0], &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::NonMonotonicInput { index: 2, .. }));
    }

    #[test]
    fn test_from_xy_rejects_non_finite() {
        assert!(Dataset::from_xy(&[0.0, f64::NAN], &[0.0, 1.0]).is_err());
        assert!(Dataset::from_xy(&[0.0, 1.0], &[f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_from_samples() {
        let ds = Dataset::from_samples(vec![(0.0, 0.0), (1.0, 1.0), (3.0, 9.0)]).unwrap();
        assert_eq!(ds.xs(), &[0.0, 1.0, 3.0]);
        assert_eq!(ds.ys(), &[0.0, 1.0, 9.0]);
        assert_eq!(ds.spacings(), vec![1.0, 2.0]);
        let collected: Vec<Sample> = ds.samples().collect();
        assert_eq!(collected[2], Sample::new(3.0, 9.0));
    }

    #[test]
    fn test_from_fn_uniform_grid() {
        let ds = Dataset::from_fn(|x| x * x, 0.0, 2.0, 4).unwrap();
        assert_eq!(ds.len(), 5);
        assert_relative_eq!(ds.xs()[1], 0.5);
        assert_relative_eq!(ds.ys()[3], 2.25);
        assert_eq!(ds.domain().1, 2.0);
    }

    #[test]
    fn test_from_fn_invalid_params() {
        assert!(matches!(
            Dataset::from_fn(|x| x, 1.0, 0.0, 5),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Dataset::from_fn(|x| x, 0.0, 1.0, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Dataset::from_fn(|x| x, 0.0, f64::INFINITY, 3),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_window_is_inclusive() {
        let ds = Dataset::from_xy(&[0.0, 1.0, 2.0, 3.0], &[5.0, 6.0, 7.0, 8.0]).unwrap();
        let (xs, ys) = ds.window(1, 3);
        assert_eq!(xs, &[1.0, 2.0, 3.0]);
        assert_eq!(ys, &[6.0, 7.0, 8.0]);
    }
}
