//! Quadrature kernels (Layer 2)
//!
//! Express each rule's weighted sum in terms of primitive operations. The
//! kernel trusts nothing about its input: applying a Simpson rule to an
//! interval count it cannot consume, or to unequal spacing, is reported as
//! [`Error::RuleMismatch`].

use crate::rule::Rule;
use crate::types::{Evaluation, RuleDetail, Spacing};
use numint_core::{ComputePrimitives, Error, Result};

/// Evaluates Newton-Cotes weighted sums over sample windows
#[derive(Clone, Debug)]
pub struct QuadratureKernel<P: ComputePrimitives> {
    primitives: P,
}

impl<P: ComputePrimitives> QuadratureKernel<P> {
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &P {
        &self.primitives
    }

    /// Apply `rule` to the window `xs`/`ys` with the given spacing
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`] for fewer than two samples
    /// - [`Error::RuleMismatch`] if the rule cannot consume the window
    pub fn apply(&self, rule: Rule, xs: &[f64], ys: &[f64], spacing: Spacing) -> Result<Evaluation> {
        if xs.len() != ys.len() {
            return Err(Error::size_mismatch(xs.len(), ys.len(), "kernel window"));
        }
        if ys.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: ys.len(),
            });
        }

        match (rule, spacing) {
            (Rule::Trapezoidal, Spacing::Uniform { step }) => Ok(self.trapezoidal(xs, ys, step)),
            (Rule::Trapezoidal, Spacing::NonUniform) => Ok(self.trapezoidal_pairwise(xs, ys)),
            (Rule::Simpson13, Spacing::Uniform { step }) => self.simpson_one_third(ys, step),
            (Rule::Simpson38, Spacing::Uniform { step }) => self.simpson_three_eighths(ys, step),
            (rule, Spacing::NonUniform) => Err(Error::RuleMismatch {
                rule: rule.name(),
                intervals: ys.len() - 1,
                detail: " with non-uniform spacing".to_string(),
            }),
        }
    }

    /// `(h/2) * (y0 + yn + 2*sum(y1..y_{n-1}))`
    ///
    /// The value is summed over the actual interval widths, which within a
    /// uniform partition only agree with `step` up to the spacing tolerance.
    pub fn trapezoidal(&self, xs: &[f64], ys: &[f64], step: f64) -> Evaluation {
        let n = ys.len() - 1;
        let endpoints = ys[0] + ys[n];
        let interior_sum = self.primitives.sum(&ys[1..n]);
        let value = self.primitives.sum(&pairwise_areas(xs, ys));

        Evaluation {
            value,
            detail: RuleDetail::Trapezoidal {
                step,
                endpoints,
                interior_sum,
            },
        }
    }

    /// Sum of `((x_{i+1} - x_i) / 2) * (y_i + y_{i+1})`
    pub fn trapezoidal_pairwise(&self, xs: &[f64], ys: &[f64]) -> Evaluation {
        let areas = pairwise_areas(xs, ys);
        let value = self.primitives.sum(&areas);

        Evaluation {
            value,
            detail: RuleDetail::TrapezoidalPairwise { areas },
        }
    }

    /// `(h/3) * (y0 + yn + 4*sum(odd) + 2*sum(even interior))`
    pub fn simpson_one_third(&self, ys: &[f64], step: f64) -> Result<Evaluation> {
        let n = ys.len() - 1;
        if !Rule::Simpson13.accepts(n) {
            return Err(Error::rule_mismatch(Rule::Simpson13.name(), n));
        }

        let endpoints = ys[0] + ys[n];
        let odd_sum = self.primitives.strided_sum(ys, 1, n, 2);
        let even_sum = self.primitives.strided_sum(ys, 2, n, 2);
        let value = (step / 3.0) * (endpoints + 4.0 * odd_sum + 2.0 * even_sum);

        Ok(Evaluation {
            value,
            detail: RuleDetail::Simpson13 {
                step,
                endpoints,
                odd_sum,
                even_sum,
            },
        })
    }

    /// `(3h/8) * (y0 + yn + 3*sum(i % 3 != 0) + 2*sum(i % 3 == 0, interior))`
    pub fn simpson_three_eighths(&self, ys: &[f64], step: f64) -> Result<Evaluation> {
        let n = ys.len() - 1;
        if !Rule::Simpson38.accepts(n) {
            return Err(Error::rule_mismatch(Rule::Simpson38.name(), n));
        }

        let endpoints = ys[0] + ys[n];
        let sum_mod3 = (1..n)
            .filter(|i| i % 3 != 0)
            .fold(0.0, |acc, i| acc + ys[i]);
        let sum_mul3 = self.primitives.strided_sum(ys, 3, n, 3);
        let value = (3.0 * step / 8.0) * (endpoints + 3.0 * sum_mod3 + 2.0 * sum_mul3);

        Ok(Evaluation {
            value,
            detail: RuleDetail::Simpson38 {
                step,
                endpoints,
                sum_mod3,
                sum_mul3,
            },
        })
    }
}

fn pairwise_areas(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| ((x[1] - x[0]) / 2.0) * (y[0] + y[1]))
        .collect()
}
