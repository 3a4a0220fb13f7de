//! Accumulating segment results into a dataset total

use crate::types::StepRecord;

/// Running totals over step records, left to right
///
/// Values are added as computed; error bounds are added as absolute values so
/// cancellation between segments can never shrink the reported bound.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    value: f64,
    error: f64,
    steps: Vec<StepRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next segment in x order
    pub fn push(&mut self, step: StepRecord) {
        self.value += step.value();
        self.error += step.error().bound.abs();
        self.steps.push(step);
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `(total value, total error bound, trace)`
    pub fn finish(self) -> (f64, f64, Vec<StepRecord>) {
        (self.value, self.error, self.steps)
    }
}

impl Extend<StepRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = StepRecord>>(&mut self, iter: I) {
        for step in iter {
            self.push(step);
        }
    }
}
