//! Adaptive Newton-Cotes integration of sampled data
//!
//! Integrates a sequence of `(x, y)` samples by splitting it into evenly
//! spaced runs and applying the highest-order rule each run supports.
//!
//! # Rules
//!
//! - **Trapezoidal**: any interval count, uniform or pairwise on unequal spacing
//! - **Simpson 1/3**: uniform runs with an even interval count
//! - **Simpson 3/8**: uniform runs with an interval count divisible by 3
//!
//! Odd runs that are not a multiple of three take Simpson 1/3 on all but the
//! last interval, which falls back to Trapezoidal.
//!
//! ## Usage
//!
//! ```rust
//! use numint_core::{Dataset, ScalarBackend};
//! use numint_quadrature::{AdaptiveIntegrator, Integrator, Rule};
//!
//! // Two uniform runs: h = 1 over [0, 4], h = 2 over [4, 10]
//! let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 10.0];
//! let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
//! let dataset = Dataset::from_xy(&xs, &ys).unwrap();
//!
//! let integrator = AdaptiveIntegrator::new(ScalarBackend::new());
//! let result = integrator.integrate(&dataset).unwrap();
//!
//! assert_eq!(result.partitions().len(), 2);
//! assert_eq!(result.rules_used(), vec![Rule::Simpson13, Rule::Simpson38]);
//! assert!((result.value() - 1000.0 / 3.0).abs() < 1e-9);
//! ```

pub mod aggregate;
pub mod comparison;
pub mod estimator;
pub mod integrator;
pub mod kernel;
pub mod parameters;
pub mod partition;
pub mod rule;
pub mod selector;
pub mod traits;
pub mod types;

pub use aggregate::Aggregator;
pub use comparison::{compare_methods, compare_methods_with, MethodComparison, MethodOutcome};
pub use estimator::{DerivativeBounds, ErrorEstimator};
pub use integrator::{integrate, AdaptiveIntegrator};
pub use kernel::QuadratureKernel;
pub use parameters::IntegrationParameters;
pub use partition::{Partitioner, DEFAULT_SPACING_TOLERANCE};
pub use rule::{IntegrationMethod, Rule};
pub use selector::RuleSelector;
pub use traits::{ConfigurableIntegrator, Integrator, IntegratorProperties};
pub use types::{
    ErrorEstimate, EstimateKind, Evaluation, IntegrationResult, Partition, RuleDetail, Segment,
    Spacing, StepRecord,
};
