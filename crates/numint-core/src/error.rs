//! Error types for sampled-data integration
//!
//! Provides a unified error type for all numint crates.

use thiserror::Error;

/// Core error type for integration operations
#[derive(Error, Debug)]
pub enum Error {
    /// Too few samples for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Abscissae are not strictly increasing
    #[error("Non-monotonic input: x[{index}] = {current} does not exceed preceding value {previous}")]
    NonMonotonicInput {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A rule was applied to a range it cannot consume.
    ///
    /// This is a contract violation between the rule selector and the
    /// quadrature kernel and always indicates a bug.
    #[error("Rule mismatch: {rule} cannot be applied to {intervals} interval(s){detail}")]
    RuleMismatch {
        rule: &'static str,
        intervals: usize,
        detail: String,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for x/y arrays of different lengths
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create a rule mismatch without extra detail
    pub fn rule_mismatch(rule: &'static str, intervals: usize) -> Self {
        Self::RuleMismatch {
            rule,
            intervals,
            detail: String::new(),
        }
    }

    /// Whether this error signals a bug rather than bad input
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::RuleMismatch { .. })
    }
}
