//! Integrator configuration

use crate::estimator::DerivativeBounds;
use crate::partition::DEFAULT_SPACING_TOLERANCE;
use crate::rule::{IntegrationMethod, Rule};
use numint_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for [`AdaptiveIntegrator`](crate::AdaptiveIntegrator)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationParameters {
    /// Adaptive selection or a forced rule
    pub method: IntegrationMethod,
    /// Relative tolerance for treating two spacings as equal
    pub spacing_tolerance: f64,
    /// Optional derivative hints for the error bound
    pub derivative_bounds: DerivativeBounds,
}

impl Default for IntegrationParameters {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::Adaptive,
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
            derivative_bounds: DerivativeBounds::default(),
        }
    }
}

impl IntegrationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for forcing one rule
    pub fn fixed(rule: Rule) -> Self {
        Self::default().with_method(IntegrationMethod::Fixed(rule))
    }

    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_spacing_tolerance(mut self, tolerance: f64) -> Self {
        self.spacing_tolerance = tolerance;
        self
    }

    pub fn with_derivative_bounds(mut self, bounds: DerivativeBounds) -> Self {
        self.derivative_bounds = bounds;
        self
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<()> {
        if !self.spacing_tolerance.is_finite() || self.spacing_tolerance < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Spacing tolerance must be a finite non-negative number (got {})",
                self.spacing_tolerance
            )));
        }
        self.derivative_bounds.validate()
    }
}
