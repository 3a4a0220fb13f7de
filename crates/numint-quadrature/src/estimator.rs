//! Truncation-error estimation
//!
//! Composite error bounds, with `M2 = max|f''|` and `M4 = max|f''''|`:
//!
//! - Trapezoidal: `sum_i (h_i^3 / 12) * M2`
//! - Simpson 1/3: `(b - a) * h^4 / 180 * M4`
//! - Simpson 3/8: `(b - a) * h^4 / 80 * M4`
//!
//! Derivative magnitudes come from caller hints when present, otherwise from
//! finite differences over the enclosing partition. With too few points for
//! the difference stencil the estimator falls back to `h_max * max|Δy|` over
//! the partition and flags the estimate as heuristic.

use crate::rule::Rule;
use crate::types::{ErrorEstimate, Partition, Segment, Spacing};
use numint_core::{ComputePrimitives, Dataset, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points needed for a second divided difference
const SECOND_DIFFERENCE_POINTS: usize = 3;
/// Points needed for a fourth forward difference
const FOURTH_DIFFERENCE_POINTS: usize = 5;

/// Optional caller-supplied derivative bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeBounds {
    /// Bound on `|f''|`, used by the Trapezoidal estimate
    pub second: Option<f64>,
    /// Bound on `|f''''|`, used by both Simpson estimates
    pub fourth: Option<f64>,
}

impl DerivativeBounds {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_second(mut self, bound: f64) -> Self {
        self.second = Some(bound);
        self
    }

    pub fn with_fourth(mut self, bound: f64) -> Self {
        self.fourth = Some(bound);
        self
    }

    /// Reject negative or non-finite hints
    pub fn validate(&self) -> Result<()> {
        for (name, bound) in [("second", self.second), ("fourth", self.fourth)] {
            if let Some(b) = bound {
                if !b.is_finite() || b < 0.0 {
                    return Err(Error::InvalidParameter(format!(
                        "{name} derivative bound must be finite and non-negative (got {b})"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Per-segment error estimator
#[derive(Clone, Debug)]
pub struct ErrorEstimator<P: ComputePrimitives> {
    primitives: P,
    bounds: DerivativeBounds,
}

impl<P: ComputePrimitives> ErrorEstimator<P> {
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            bounds: DerivativeBounds::default(),
        }
    }

    pub fn with_bounds(primitives: P, bounds: DerivativeBounds) -> Self {
        Self { primitives, bounds }
    }

    pub fn bounds(&self) -> &DerivativeBounds {
        &self.bounds
    }

    /// Estimate the truncation error of `segment`
    ///
    /// `partition` is the enclosing partition; its samples form the
    /// finite-difference stencil. A bound that is not a finite non-negative
    /// number (derivative estimates overflow on very fine grids) is replaced
    /// by the heuristic.
    pub fn estimate(&self, segment: &Segment, partition: &Partition, dataset: &Dataset) -> ErrorEstimate {
        let (seg_xs, _) = dataset.window(segment.start, segment.end);
        let (stencil_xs, stencil_ys) = dataset.window(partition.start, partition.end);

        let analytic = match segment.rule {
            Rule::Trapezoidal => self
                .bounds
                .second
                .or_else(|| self.second_derivative(stencil_xs, stencil_ys))
                .map(|m2| (trapezoidal_bound(seg_xs, m2), m2)),
            rule @ (Rule::Simpson13 | Rule::Simpson38) => {
                let step = match segment.spacing {
                    Spacing::Uniform { step } => step,
                    // The selector never pairs Simpson with unequal spacing
                    Spacing::NonUniform => return self.heuristic(stencil_xs, stencil_ys),
                };
                match self.bounds.fourth {
                    Some(m4) => Some((simpson_bound(rule, seg_xs, step.powi(4) * m4), m4)),
                    // h^4 cancels: (b - a) * max|Δ⁴y| / 180
                    None => self
                        .fourth_difference(stencil_ys, partition.spacing)
                        .map(|d4| (simpson_bound(rule, seg_xs, d4), d4 / step.powi(4))),
                }
            }
        };

        match analytic {
            Some((bound, derivative)) if bound.is_finite() && bound >= 0.0 => {
                ErrorEstimate::analytic(bound, derivative)
            }
            Some((bound, _)) => {
                debug!(
                    rule = segment.rule.id(),
                    start = segment.start,
                    bound,
                    "Analytic bound unstable, using heuristic"
                );
                self.heuristic(stencil_xs, stencil_ys)
            }
            None => self.heuristic(stencil_xs, stencil_ys),
        }
    }

    /// Max absolute second divided difference, `None` below three points
    ///
    /// `f'' ≈ 2 * f[x_i, x_{i+1}, x_{i+2}]` holds for any spacing.
    pub fn second_derivative(&self, xs: &[f64], ys: &[f64]) -> Option<f64> {
        if ys.len() < SECOND_DIFFERENCE_POINTS {
            return None;
        }
        let estimates: Vec<f64> = (0..ys.len() - 2)
            .map(|i| {
                let left = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
                let right = (ys[i + 2] - ys[i + 1]) / (xs[i + 2] - xs[i + 1]);
                2.0 * (right - left) / (xs[i + 2] - xs[i])
            })
            .collect();
        Some(self.primitives.max_abs(&estimates))
    }

    /// `max|Δ⁴y|` on a uniform stencil, `None` below five points
    ///
    /// Dividing by `h⁴` gives the `M4` estimate.
    pub fn fourth_difference(&self, ys: &[f64], spacing: Spacing) -> Option<f64> {
        if !spacing.is_uniform() || ys.len() < FOURTH_DIFFERENCE_POINTS {
            return None;
        }
        let diffs = self.primitives.forward_differences(ys, 4);
        Some(self.primitives.max_abs(&diffs))
    }

    /// `h_max * max|Δy|` over the given window
    fn heuristic(&self, xs: &[f64], ys: &[f64]) -> ErrorEstimate {
        let widths: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let h_max = self.primitives.max_abs(&widths);
        ErrorEstimate::heuristic(h_max * self.primitives.max_abs_step(ys))
    }
}

fn trapezoidal_bound(xs: &[f64], m2: f64) -> f64 {
    xs.windows(2)
        .map(|w| (w[1] - w[0]).powi(3) / 12.0)
        .fold(0.0, |acc, term| acc + term)
        * m2
}

/// `(b - a) * scaled / denominator`, where `scaled` is `h⁴ * M4` or `max|Δ⁴y|`
fn simpson_bound(rule: Rule, xs: &[f64], scaled: f64) -> f64 {
    let width = xs[xs.len() - 1] - xs[0];
    let denominator = match rule {
        Rule::Simpson38 => 80.0,
        _ => 180.0,
    };
    width * scaled / denominator
}
