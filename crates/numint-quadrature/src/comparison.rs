//! Running every method on one dataset
//!
//! A failing method (for example Simpson 3/8 on two intervals) does not abort
//! the comparison; its error is kept alongside the successful outcomes.

use crate::integrator::AdaptiveIntegrator;
use crate::parameters::IntegrationParameters;
use crate::rule::IntegrationMethod;
use crate::traits::Integrator;
use crate::types::IntegrationResult;
use numint_core::{ComputePrimitives, Dataset, Error, Result};
use std::fmt;
use tracing::{debug, instrument};

/// Outcome of one method in a comparison
#[derive(Debug)]
pub struct MethodOutcome {
    pub method: IntegrationMethod,
    pub outcome: Result<IntegrationResult>,
}

impl MethodOutcome {
    pub fn result(&self) -> Option<&IntegrationResult> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Results of every method, in [`IntegrationMethod::ALL`] order
#[derive(Debug)]
pub struct MethodComparison {
    outcomes: Vec<MethodOutcome>,
    sample_size: usize,
}

impl MethodComparison {
    pub fn outcomes(&self) -> &[MethodOutcome] {
        &self.outcomes
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn get(&self, method: IntegrationMethod) -> Option<&MethodOutcome> {
        self.outcomes.iter().find(|o| o.method == method)
    }

    /// Successful results only
    pub fn successes(&self) -> impl Iterator<Item = &IntegrationResult> {
        self.outcomes.iter().filter_map(MethodOutcome::result)
    }

    /// Successful result with the smallest error bound
    ///
    /// Ties go to the method listed first.
    pub fn best_by_error(&self) -> Option<&IntegrationResult> {
        self.successes().fold(None, |best: Option<&IntegrationResult>, r| match best {
            Some(b) if b.error_estimate() <= r.error_estimate() => Some(b),
            _ => Some(r),
        })
    }
}

impl fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method Comparison ({} samples):", self.sample_size)?;
        for outcome in &self.outcomes {
            match &outcome.outcome {
                Ok(result) => writeln!(
                    f,
                    "  {:<32} {:>20.10}  (error <= {:.3e})",
                    result.method_name(),
                    result.value(),
                    result.error_estimate()
                )?,
                Err(e) => writeln!(f, "  {:<32} failed: {}", outcome.method.id(), e)?,
            }
        }
        Ok(())
    }
}

/// Compare all methods with the scalar backend and default tolerances
pub fn compare_methods(dataset: &Dataset) -> MethodComparison {
    compare_methods_with(numint_core::ScalarBackend::new(), dataset, &IntegrationParameters::default())
}

/// Compare all methods, overriding only `method` in `base`
#[instrument(skip(primitives, dataset, base), fields(samples = dataset.len()))]
pub fn compare_methods_with<P: ComputePrimitives>(
    primitives: P,
    dataset: &Dataset,
    base: &IntegrationParameters,
) -> MethodComparison {
    let outcomes = IntegrationMethod::ALL
        .into_iter()
        .map(|method| {
            let params = base.with_method(method);
            let outcome = AdaptiveIntegrator::with_parameters(primitives.clone(), params)
                .and_then(|integrator| integrator.integrate(dataset));
            if let Err(e) = &outcome {
                debug!("{} failed: {}", method, e);
            }
            MethodOutcome { method, outcome }
        })
        .collect();

    MethodComparison {
        outcomes,
        sample_size: dataset.len(),
    }
}
