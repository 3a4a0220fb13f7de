//! Rule selection and greedy decomposition of partitions
//!
//! Adaptive precedence for a uniform partition of `n` intervals:
//!
//! | n                         | plan                                  |
//! |---------------------------|---------------------------------------|
//! | even                      | Simpson 1/3 over all `n`              |
//! | odd, multiple of 3        | Simpson 3/8 over all `n`              |
//! | 1                         | Trapezoidal                           |
//! | odd, not a multiple of 3  | Simpson 1/3 over `n - 1`, Trapezoidal on the last interval |
//!
//! Non-uniform partitions always use the pairwise Trapezoidal rule. When a
//! rule is forced, each uniform partition consumes the largest leading
//! multiple of that rule's divisor and finishes with Trapezoidal.

use crate::rule::{IntegrationMethod, Rule};
use crate::types::{Partition, Segment, Spacing};

/// Maps partitions to rule segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSelector {
    method: IntegrationMethod,
}

impl RuleSelector {
    pub fn new(method: IntegrationMethod) -> Self {
        Self { method }
    }

    pub fn adaptive() -> Self {
        Self::new(IntegrationMethod::Adaptive)
    }

    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    /// The rule applied to the leading part of `partition`
    pub fn select(&self, partition: &Partition) -> Rule {
        self.plan(partition)
            .first()
            .map_or(Rule::Trapezoidal, |segment| segment.rule)
    }

    /// Decompose `partition` into consecutive single-rule segments
    ///
    /// The segments cover the partition exactly, leftmost first.
    pub fn plan(&self, partition: &Partition) -> Vec<Segment> {
        let whole = |rule| vec![Segment::new(partition.start, partition.end, rule, partition.spacing)];

        if !partition.spacing.is_uniform() {
            return whole(Rule::Trapezoidal);
        }

        let n = partition.intervals();
        match self.method {
            IntegrationMethod::Adaptive => {
                if Rule::Simpson13.accepts(n) {
                    whole(Rule::Simpson13)
                } else if Rule::Simpson38.accepts(n) {
                    whole(Rule::Simpson38)
                } else if n == 1 {
                    whole(Rule::Trapezoidal)
                } else {
                    split(partition, Rule::Simpson13, n - 1)
                }
            }
            IntegrationMethod::Fixed(Rule::Trapezoidal) => whole(Rule::Trapezoidal),
            IntegrationMethod::Fixed(rule) => {
                let leading = (n / rule.divisor()) * rule.divisor();
                if leading == 0 {
                    whole(Rule::Trapezoidal)
                } else if leading == n {
                    whole(rule)
                } else {
                    split(partition, rule, leading)
                }
            }
        }
    }
}

/// `rule` over the first `leading` intervals, Trapezoidal over the rest
fn split(partition: &Partition, rule: Rule, leading: usize) -> Vec<Segment> {
    let spacing: Spacing = partition.spacing;
    let boundary = partition.start + leading;
    vec![
        Segment::new(partition.start, boundary, rule, spacing),
        Segment::new(boundary, partition.end, Rule::Trapezoidal, spacing),
    ]
}
