//! Adaptive composite integration over sampled data
//!
//! The pipeline for one dataset:
//!
//! 1. [`Partitioner`] splits the samples into evenly spaced runs
//! 2. [`RuleSelector`] decomposes each run into single-rule segments
//! 3. [`QuadratureKernel`] evaluates each segment
//! 4. [`ErrorEstimator`] bounds each segment's truncation error
//! 5. [`Aggregator`] sums values and bounds left to right
//!
//! Each call owns all of its intermediate state, so one integrator can serve
//! many datasets concurrently.

use crate::aggregate::Aggregator;
use crate::estimator::ErrorEstimator;
use crate::kernel::QuadratureKernel;
use crate::parameters::IntegrationParameters;
use crate::partition::Partitioner;
use crate::selector::RuleSelector;
use crate::traits::{ConfigurableIntegrator, Integrator, IntegratorProperties};
use crate::types::{IntegrationResult, StepRecord};
use numint_core::{ComputePrimitives, Dataset, Error, Result, ScalarBackend};
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Partition-aware Newton-Cotes integrator
#[derive(Clone, Debug)]
pub struct AdaptiveIntegrator<P: ComputePrimitives = ScalarBackend> {
    partitioner: Partitioner,
    selector: RuleSelector,
    kernel: QuadratureKernel<P>,
    estimator: ErrorEstimator<P>,
    params: IntegrationParameters,
}

impl Default for AdaptiveIntegrator<ScalarBackend> {
    fn default() -> Self {
        Self::new(ScalarBackend::new())
    }
}

impl<P: ComputePrimitives> AdaptiveIntegrator<P> {
    /// Create an integrator with default parameters
    pub fn new(primitives: P) -> Self {
        let params = IntegrationParameters::default();
        Self {
            partitioner: Partitioner::default(),
            selector: RuleSelector::new(params.method),
            kernel: QuadratureKernel::new(primitives.clone()),
            estimator: ErrorEstimator::with_bounds(primitives, params.derivative_bounds),
            params,
        }
    }

    /// Create an integrator with explicit parameters
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `params` fails validation.
    pub fn with_parameters(primitives: P, params: IntegrationParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            partitioner: Partitioner::new(params.spacing_tolerance)?,
            selector: RuleSelector::new(params.method),
            kernel: QuadratureKernel::new(primitives.clone()),
            estimator: ErrorEstimator::with_bounds(primitives, params.derivative_bounds),
            params,
        })
    }

    pub fn partitioner(&self) -> &Partitioner {
        &self.partitioner
    }

    pub fn selector(&self) -> &RuleSelector {
        &self.selector
    }

    /// Integrate many datasets independently
    ///
    /// Results are returned in input order. With the `parallel` feature the
    /// datasets are processed on the rayon thread pool.
    pub fn integrate_batch(&self, datasets: &[Dataset]) -> Vec<Result<IntegrationResult>> {
        debug!("Integrating batch of {} datasets", datasets.len());

        #[cfg(feature = "parallel")]
        let results = datasets.par_iter().map(|d| self.integrate(d)).collect();
        #[cfg(not(feature = "parallel"))]
        let results = datasets.iter().map(|d| self.integrate(d)).collect();

        results
    }

    fn check_size(&self, dataset: &Dataset) -> Result<()> {
        let required = self.minimum_intervals();
        if dataset.intervals() < required {
            return Err(Error::InsufficientData {
                expected: required + 1,
                actual: dataset.len(),
            });
        }
        Ok(())
    }
}

impl<P: ComputePrimitives> IntegratorProperties for AdaptiveIntegrator<P> {
    fn algorithm_name(&self) -> &'static str {
        "Adaptive Newton-Cotes"
    }

    fn minimum_intervals(&self) -> usize {
        self.params.method.min_intervals()
    }
}

impl<P: ComputePrimitives> Integrator for AdaptiveIntegrator<P> {
    #[instrument(skip(self, dataset), fields(samples = dataset.len(), method = %self.params.method))]
    fn integrate(&self, dataset: &Dataset) -> Result<IntegrationResult> {
        self.check_size(dataset)?;

        let partitions = self.partitioner.partition(dataset);
        debug!(
            "Split {} samples into {} partition(s)",
            dataset.len(),
            partitions.len()
        );

        let mut aggregator = Aggregator::new();
        for (index, partition) in partitions.iter().enumerate() {
            let plan = self.selector.plan(partition);
            debug!(
                "Partition {} [{}..={}] ({}): {} segment(s)",
                index,
                partition.start,
                partition.end,
                partition.spacing,
                plan.len()
            );

            for segment in plan {
                let (xs, ys) = dataset.window(segment.start, segment.end);
                let evaluation = self.kernel.apply(segment.rule, xs, ys, segment.spacing)?;
                let error = self.estimator.estimate(&segment, partition, dataset);
                trace!(
                    rule = segment.rule.id(),
                    start = segment.start,
                    end = segment.end,
                    value = evaluation.value,
                    bound = error.bound,
                    "Segment evaluated"
                );

                let x_range = (xs[0], xs[xs.len() - 1]);
                aggregator.push(StepRecord::new(index, segment, x_range, evaluation, error));
            }
        }

        let (value, error_estimate, steps) = aggregator.finish();
        debug!(value, error_estimate, steps = steps.len(), "Integration complete");

        Ok(IntegrationResult::new(
            value,
            error_estimate,
            self.params.method,
            dataset.len(),
            partitions,
            steps,
        ))
    }
}

impl<P: ComputePrimitives> ConfigurableIntegrator for AdaptiveIntegrator<P> {
    type Parameters = IntegrationParameters;

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()> {
        params.validate()?;
        self.partitioner = Partitioner::new(params.spacing_tolerance)?;
        self.selector = RuleSelector::new(params.method);
        self.estimator =
            ErrorEstimator::with_bounds(self.kernel.primitives().clone(), params.derivative_bounds);
        self.params = params;
        Ok(())
    }
}

/// Integrate raw columns with the scalar backend
///
/// # Example
///
/// ```rust
/// use numint_quadrature::{integrate, IntegrationParameters};
///
/// let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
/// let result = integrate(&xs, &ys, &IntegrationParameters::default()).unwrap();
/// assert!((result.value() - 64.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate(xs: &[f64], ys: &[f64], params: &IntegrationParameters) -> Result<IntegrationResult> {
    AdaptiveIntegrator::with_parameters(ScalarBackend::new(), *params)?.integrate_xy(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{IntegrationMethod, Rule};
    use approx::assert_relative_eq;

    #[test]
    fn test_simpson_parabola() {
        let result = AdaptiveIntegrator::default()
            .integrate_xy(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 4.0, 9.0, 16.0])
            .unwrap();
        assert_relative_eq!(result.value(), 64.0 / 3.0, epsilon = 1e-12);
        assert_eq!(result.rules_used(), vec![Rule::Simpson13]);
        assert_eq!(result.partitions().len(), 1);
        assert_eq!(result.method_name(), "Adaptive (Simpson's 1/3)");
    }

    #[test]
    fn test_non_uniform_pairwise() {
        let result = AdaptiveIntegrator::default()
            .integrate_xy(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0])
            .unwrap();
        assert_relative_eq!(result.value(), 10.5);
        assert_eq!(result.partitions().len(), 2);
        assert_eq!(result.steps().len(), 2);
        assert_relative_eq!(result.steps()[0].value(), 0.5);
        assert_relative_eq!(result.steps()[1].value(), 10.0);
    }

    #[test]
    fn test_forced_rule_minimum() {
        let integrator = AdaptiveIntegrator::with_parameters(
            ScalarBackend::new(),
            IntegrationParameters::fixed(Rule::Simpson38),
        )
        .unwrap();
        assert_eq!(integrator.minimum_sample_size(), 4);
        let err = integrator.integrate_xy(&[0.0, 1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 4, actual: 2 }));
    }

    #[test]
    fn test_set_parameters() {
        let mut integrator = AdaptiveIntegrator::default();
        integrator
            .set_parameters(IntegrationParameters::fixed(Rule::Trapezoidal))
            .unwrap();
        assert_eq!(integrator.selector().method(), IntegrationMethod::Fixed(Rule::Trapezoidal));

        let result = integrator.integrate_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0, 2.0]).unwrap();
        assert_relative_eq!(result.value(), 3.5);
        assert_eq!(result.method_name(), "Trapezoidal Rule");

        let bad = IntegrationParameters::default().with_spacing_tolerance(f64::NAN);
        assert!(integrator.set_parameters(bad).is_err());
        assert_eq!(integrator.parameters().method, IntegrationMethod::Fixed(Rule::Trapezoidal));
    }

    #[test]
    fn test_batch_preserves_order() {
        let integrator = AdaptiveIntegrator::default();
        let datasets: Vec<Dataset> = (1..=4)
            .map(|k| Dataset::from_fn(|x| k as f64 * x, 0.0, 1.0, 2 * k).unwrap())
            .collect();
        let results = integrator.integrate_batch(&datasets);
        assert_eq!(results.len(), 4);
        for (k, result) in (1..=4).zip(results) {
            assert_relative_eq!(result.unwrap().value(), k as f64 / 2.0, epsilon = 1e-12);
        }
    }
}
