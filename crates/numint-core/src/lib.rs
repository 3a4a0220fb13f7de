//! Core types for sampled-data numerical integration
//!
//! This crate provides the foundation shared by the numint crates:
//!
//! 1. **Errors** - one [`Error`] enum and [`Result`] alias for every crate
//! 2. **Samples** - [`Sample`] and the validated [`Dataset`]
//! 3. **Primitives** - [`ComputePrimitives`], the slice operations kernels are
//!    written against
//!
//! # Example
//!
//! ```rust
//! use numint_core::{ComputePrimitives, Dataset, ScalarBackend};
//!
//! let dataset = Dataset::from_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0, 2.0]).unwrap();
//! assert_eq!(dataset.intervals(), 2);
//!
//! let primitives = ScalarBackend::new();
//! assert_eq!(primitives.sum(dataset.ys()), 5.0);
//! ```

pub mod error;
pub mod primitives;
pub mod sample;

// Re-export core types
pub use error::{Error, Result};
pub use primitives::{scalar_backend, ComputePrimitives, ScalarBackend};
pub use sample::{check_strictly_increasing, Dataset, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ComputePrimitives, Dataset, Error, Result, Sample, ScalarBackend};
}
