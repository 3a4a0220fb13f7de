//! Adaptive numerical integration of sampled data
//!
//! This crate re-exports the numint workspace:
//!
//! - [`numint_core`]: errors, validated datasets and compute primitives
//! - [`quadrature`]: partitioning, rule selection, kernels and error bounds
//! - [`io`]: CSV and manual input parsing, report export
//!
//! # Example
//!
//! ```rust
//! use numint::prelude::*;
//!
//! let dataset = Dataset::from_fn(|x| x * x, 0.0, 4.0, 4).unwrap();
//! let result = AdaptiveIntegrator::default().integrate(&dataset).unwrap();
//! assert!((result.value() - 64.0 / 3.0).abs() < 1e-12);
//! ```

pub use numint_core;
pub use numint_io as io;
pub use numint_quadrature as quadrature;

pub use numint_core::{Dataset, Error, Result, Sample};
pub use numint_quadrature::{
    compare_methods, integrate, AdaptiveIntegrator, IntegrationMethod, IntegrationParameters,
    IntegrationResult, Rule,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use numint_core::prelude::*;
    pub use numint_io::{parse_csv_str, parse_manual_input, ExportFormat};
    pub use numint_quadrature::{
        compare_methods, AdaptiveIntegrator, ConfigurableIntegrator, DerivativeBounds,
        IntegrationMethod, IntegrationParameters, IntegrationResult, Integrator, Rule,
    };
}
