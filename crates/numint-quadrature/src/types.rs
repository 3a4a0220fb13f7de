//! Types produced while integrating a dataset

use crate::rule::{IntegrationMethod, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spacing classification of a partition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Spacing {
    /// Every interval has width `step` within tolerance
    Uniform { step: f64 },
    /// Irregular or single-interval run
    NonUniform,
}

impl Spacing {
    pub fn step(&self) -> Option<f64> {
        match self {
            Spacing::Uniform { step } => Some(*step),
            Spacing::NonUniform => None,
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, Spacing::Uniform { .. })
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Uniform { step } => write!(f, "uniform (h = {step:.6})"),
            Spacing::NonUniform => write!(f, "non-uniform"),
        }
    }
}

/// A contiguous run of samples sharing one spacing classification
///
/// `start` and `end` are inclusive sample indices; neighbouring partitions
/// share their boundary sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
    pub spacing: Spacing,
}

impl Partition {
    pub fn new(start: usize, end: usize, spacing: Spacing) -> Self {
        debug_assert!(end > start, "A partition spans at least one interval");
        Self { start, end, spacing }
    }

    /// Number of intervals (`samples - 1`)
    pub fn intervals(&self) -> usize {
        self.end - self.start
    }

    /// Number of samples covered
    pub fn sample_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A sub-run of a partition integrated by exactly one rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub rule: Rule,
    pub spacing: Spacing,
}

impl Segment {
    pub fn new(start: usize, end: usize, rule: Rule, spacing: Spacing) -> Self {
        debug_assert!(end > start, "A segment spans at least one interval");
        Self { start, end, rule, spacing }
    }

    pub fn intervals(&self) -> usize {
        self.end - self.start
    }
}

/// How an error bound was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateKind {
    /// Classical truncation-error formula with a derivative bound
    Analytic,
    /// `h * max|Δy|` fallback when derivatives could not be estimated
    Heuristic,
}

impl fmt::Display for EstimateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateKind::Analytic => write!(f, "analytic"),
            EstimateKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Non-negative error bound for one segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorEstimate {
    pub bound: f64,
    pub kind: EstimateKind,
    /// Derivative magnitude plugged into the analytic formula, `None` when
    /// it overflowed
    pub derivative: Option<f64>,
}

impl ErrorEstimate {
    pub fn analytic(bound: f64, derivative: f64) -> Self {
        Self {
            bound,
            kind: EstimateKind::Analytic,
            derivative: Some(derivative).filter(|d| d.is_finite()),
        }
    }

    pub fn heuristic(bound: f64) -> Self {
        Self {
            bound,
            kind: EstimateKind::Heuristic,
            derivative: None,
        }
    }

    pub fn is_heuristic(&self) -> bool {
        self.kind == EstimateKind::Heuristic
    }
}

/// The intermediate sums a rule produced, for the step-by-step trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum RuleDetail {
    /// Uniform composite trapezoid
    Trapezoidal {
        step: f64,
        endpoints: f64,
        interior_sum: f64,
    },
    /// One trapezoid per interval on unequal spacing
    TrapezoidalPairwise { areas: Vec<f64> },
    Simpson13 {
        step: f64,
        endpoints: f64,
        odd_sum: f64,
        even_sum: f64,
    },
    Simpson38 {
        step: f64,
        endpoints: f64,
        sum_mod3: f64,
        sum_mul3: f64,
    },
}

impl RuleDetail {
    /// Bracketed weighted sum before the `h` coefficient is applied
    pub fn weighted_sum(&self) -> Option<f64> {
        match self {
            RuleDetail::Trapezoidal { endpoints, interior_sum, .. } => {
                Some(endpoints + 2.0 * interior_sum)
            }
            RuleDetail::TrapezoidalPairwise { .. } => None,
            RuleDetail::Simpson13 { endpoints, odd_sum, even_sum, .. } => {
                Some(endpoints + 4.0 * odd_sum + 2.0 * even_sum)
            }
            RuleDetail::Simpson38 { endpoints, sum_mod3, sum_mul3, .. } => {
                Some(endpoints + 3.0 * sum_mod3 + 2.0 * sum_mul3)
            }
        }
    }
}

/// Value and trace detail returned by a kernel evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub detail: RuleDetail,
}

/// One immutable entry of the step trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    partition: usize,
    segment: Segment,
    x_start: f64,
    x_end: f64,
    value: f64,
    error: ErrorEstimate,
    detail: RuleDetail,
}

impl StepRecord {
    pub(crate) fn new(
        partition: usize,
        segment: Segment,
        x_range: (f64, f64),
        evaluation: Evaluation,
        error: ErrorEstimate,
    ) -> Self {
        Self {
            partition,
            segment,
            x_start: x_range.0,
            x_end: x_range.1,
            value: evaluation.value,
            error,
            detail: evaluation.detail,
        }
    }

    /// Index of the partition this step belongs to
    pub fn partition(&self) -> usize {
        self.partition
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn rule(&self) -> Rule {
        self.segment.rule
    }

    /// `(x_start, x_end)`
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_start, self.x_end)
    }

    /// Partial integral over this segment
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn error(&self) -> &ErrorEstimate {
        &self.error
    }

    pub fn detail(&self) -> &RuleDetail {
        &self.detail
    }

    /// Human-readable explanation of how the value was obtained
    pub fn explain(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!(
            "{} on samples {}..={} (x from {:.6} to {:.6}, {} interval(s), {})",
            self.segment.rule,
            self.segment.start,
            self.segment.end,
            self.x_start,
            self.x_end,
            self.segment.intervals(),
            self.segment.spacing,
        ));
        if !matches!(self.detail, RuleDetail::TrapezoidalPairwise { .. }) {
            lines.push(format!("Formula: {}", self.segment.rule.formula()));
        }
        match &self.detail {
            RuleDetail::Trapezoidal { step, endpoints, interior_sum } => {
                lines.push(format!("First and last terms: {endpoints:.6}"));
                lines.push(format!("Sum of middle terms x 2: {:.6}", 2.0 * interior_sum));
                lines.push(format!(
                    "Apply formula: ({step:.6}/2) x {:.6} = {:.6}",
                    endpoints + 2.0 * interior_sum,
                    self.value
                ));
            }
            RuleDetail::TrapezoidalPairwise { areas } => {
                for (k, area) in areas.iter().enumerate() {
                    lines.push(format!(
                        "Interval {}: area = {area:.6}",
                        self.segment.start + k + 1
                    ));
                }
                lines.push(format!("Total area = {:.6}", self.value));
            }
            RuleDetail::Simpson13 { step, endpoints, odd_sum, even_sum } => {
                lines.push(format!("First and last terms: {endpoints:.6}"));
                lines.push(format!("Odd-indexed terms x 4: {:.6}", 4.0 * odd_sum));
                lines.push(format!("Even-indexed terms x 2: {:.6}", 2.0 * even_sum));
                lines.push(format!(
                    "Apply formula: ({step:.6}/3) x {:.6} = {:.6}",
                    endpoints + 4.0 * odd_sum + 2.0 * even_sum,
                    self.value
                ));
            }
            RuleDetail::Simpson38 { step, endpoints, sum_mod3, sum_mul3 } => {
                lines.push(format!("First and last terms: {endpoints:.6}"));
                lines.push(format!("Terms x 3: {:.6}", 3.0 * sum_mod3));
                lines.push(format!("Terms x 2: {:.6}", 2.0 * sum_mul3));
                lines.push(format!(
                    "Apply formula: (3 x {step:.6}/8) x {:.6} = {:.6}",
                    endpoints + 3.0 * sum_mod3 + 2.0 * sum_mul3,
                    self.value
                ));
            }
        }
        lines.push(format!(
            "Error estimate: {:.6e} ({}, O(h^{}))",
            self.error.bound,
            self.error.kind,
            self.segment.rule.error_order()
        ));
        lines
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on [{:.6}, {:.6}] = {:.6} (error <= {:.3e}, {})",
            self.segment.rule, self.x_start, self.x_end, self.value, self.error.bound, self.error.kind
        )
    }
}

/// Result of integrating one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationResult {
    value: f64,
    error_estimate: f64,
    method: IntegrationMethod,
    sample_size: usize,
    partitions: Vec<Partition>,
    steps: Vec<StepRecord>,
}

impl IntegrationResult {
    pub(crate) fn new(
        value: f64,
        error_estimate: f64,
        method: IntegrationMethod,
        sample_size: usize,
        partitions: Vec<Partition>,
        steps: Vec<StepRecord>,
    ) -> Self {
        Self {
            value,
            error_estimate,
            method,
            sample_size,
            partitions,
            steps,
        }
    }

    /// Approximate integral over the whole dataset
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sum of the absolute per-segment error bounds
    pub fn error_estimate(&self) -> f64 {
        self.error_estimate
    }

    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Step trace in x order
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Distinct rules in order of first use
    pub fn rules_used(&self) -> Vec<Rule> {
        let mut rules = Vec::new();
        for step in &self.steps {
            if !rules.contains(&step.rule()) {
                rules.push(step.rule());
            }
        }
        rules
    }

    /// Whether any segment fell back to the heuristic bound
    pub fn has_heuristic_error(&self) -> bool {
        self.steps.iter().any(|s| s.error().is_heuristic())
    }

    /// Label describing how the method played out on this dataset
    pub fn method_name(&self) -> String {
        let rules = self.rules_used();
        match self.method {
            IntegrationMethod::Fixed(Rule::Trapezoidal) => Rule::Trapezoidal.name().to_string(),
            IntegrationMethod::Fixed(rule) => {
                if self.partitions.len() > 1 {
                    format!("{} (Adaptive)", rule.name())
                } else if rules == [rule] {
                    rule.name().to_string()
                } else {
                    format!("{} + Trapezoidal (Hybrid)", rule.short_name())
                }
            }
            IntegrationMethod::Adaptive => {
                let names: Vec<&str> = rules.iter().map(|r| r.short_name()).collect();
                format!("Adaptive ({})", names.join(" + "))
            }
        }
    }
}

impl fmt::Display for IntegrationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Integration Result:")?;
        writeln!(f, "  Method: {}", self.method_name())?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Partitions: {}", self.partitions.len())?;
        writeln!(f, "  Value: {:.10}", self.value)?;
        writeln!(f, "  Error estimate: {:.3e}", self.error_estimate)?;

        if !self.steps.is_empty() {
            writeln!(f, "  Steps:")?;
            for (i, step) in self.steps.iter().enumerate() {
                writeln!(f, "    {}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}
