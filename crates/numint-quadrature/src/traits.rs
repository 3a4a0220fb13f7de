//! Core traits for sampled-data integration
//!
//! Following the three-layer architecture:
//! - Layer 3: Integrators (this module and [`crate::integrator`])
//! - Layer 2: Quadrature kernels and error estimation
//! - Layer 1: Computational primitives (from numint-core)

use crate::types::IntegrationResult;
use numint_core::{Dataset, Result};

/// Properties of an integrator that don't depend on the data
pub trait IntegratorProperties {
    /// Get the name of the integration algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Smallest interval count a dataset must provide
    fn minimum_intervals(&self) -> usize;

    /// Smallest sample count a dataset must provide
    fn minimum_sample_size(&self) -> usize {
        self.minimum_intervals() + 1
    }
}

/// Integrate a validated dataset
pub trait Integrator: IntegratorProperties {
    fn integrate(&self, dataset: &Dataset) -> Result<IntegrationResult>;

    /// Validate raw columns into a [`Dataset`], then integrate
    fn integrate_xy(&self, xs: &[f64], ys: &[f64]) -> Result<IntegrationResult> {
        let dataset = Dataset::from_xy(xs, ys)?;
        self.integrate(&dataset)
    }
}

/// Integrators whose behaviour is driven by a parameter struct
pub trait ConfigurableIntegrator {
    type Parameters;

    fn parameters(&self) -> &Self::Parameters;

    /// Replace the parameters, rejecting invalid values
    fn set_parameters(&mut self, params: Self::Parameters) -> Result<()>;
}
