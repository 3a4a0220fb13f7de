//! Quadrature rules and method selection

use numint_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of Newton-Cotes rules the integrators apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "trapezoidal")]
    Trapezoidal,
    #[serde(rename = "simpson_1_3")]
    Simpson13,
    #[serde(rename = "simpson_3_8")]
    Simpson38,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Trapezoidal, Rule::Simpson13, Rule::Simpson38];

    /// Interval counts consumed by this rule must be a multiple of this
    pub fn divisor(self) -> usize {
        match self {
            Rule::Trapezoidal => 1,
            Rule::Simpson13 => 2,
            Rule::Simpson38 => 3,
        }
    }

    /// Smallest interval count the rule can integrate
    pub fn min_intervals(self) -> usize {
        self.divisor()
    }

    /// Whether the rule can consume exactly `intervals` uniform intervals
    pub fn accepts(self, intervals: usize) -> bool {
        intervals >= self.min_intervals() && intervals % self.divisor() == 0
    }

    /// Power of `h` in the composite truncation error
    pub fn error_order(self) -> u32 {
        match self {
            Rule::Trapezoidal => 2,
            Rule::Simpson13 | Rule::Simpson38 => 4,
        }
    }

    /// Display name, e.g. `Simpson's 1/3 Rule`
    pub fn name(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "Trapezoidal Rule",
            Rule::Simpson13 => "Simpson's 1/3 Rule",
            Rule::Simpson38 => "Simpson's 3/8 Rule",
        }
    }

    /// Name without the trailing "Rule"
    pub fn short_name(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "Trapezoidal",
            Rule::Simpson13 => "Simpson's 1/3",
            Rule::Simpson38 => "Simpson's 3/8",
        }
    }

    /// Stable identifier used in configuration and exports
    pub fn id(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "trapezoidal",
            Rule::Simpson13 => "simpson_1_3",
            Rule::Simpson38 => "simpson_3_8",
        }
    }

    /// Weighted-sum formula for a uniform run
    pub fn formula(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "(h/2) * (y0 + yn + 2*sum(interior))",
            Rule::Simpson13 => "(h/3) * (y0 + yn + 4*sum(odd) + 2*sum(even interior))",
            Rule::Simpson38 => "(3h/8) * (y0 + yn + 3*sum(i mod 3 != 0) + 2*sum(i mod 3 == 0 interior))",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.id() == s.trim())
            .ok_or_else(|| Error::InvalidParameter(format!("Unknown method: {s}")))
    }
}

/// How rules are chosen for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// Pick the highest-order rule each partition supports
    #[default]
    Adaptive,
    /// Prefer one rule everywhere, falling back to Trapezoidal where it cannot apply
    Fixed(Rule),
}

impl IntegrationMethod {
    /// Every selectable method, adaptive last
    pub const ALL: [IntegrationMethod; 4] = [
        IntegrationMethod::Fixed(Rule::Trapezoidal),
        IntegrationMethod::Fixed(Rule::Simpson13),
        IntegrationMethod::Fixed(Rule::Simpson38),
        IntegrationMethod::Adaptive,
    ];

    pub fn id(self) -> &'static str {
        match self {
            IntegrationMethod::Adaptive => "adaptive",
            IntegrationMethod::Fixed(rule) => rule.id(),
        }
    }

    /// The forced rule, if any
    pub fn forced_rule(self) -> Option<Rule> {
        match self {
            IntegrationMethod::Adaptive => None,
            IntegrationMethod::Fixed(rule) => Some(rule),
        }
    }

    /// Smallest interval count the whole dataset must provide
    pub fn min_intervals(self) -> usize {
        self.forced_rule().map_or(1, Rule::min_intervals)
    }
}

impl From<Rule> for IntegrationMethod {
    fn from(rule: Rule) -> Self {
        IntegrationMethod::Fixed(rule)
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for IntegrationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "adaptive" => Ok(IntegrationMethod::Adaptive),
            other => other.parse::<Rule>().map(IntegrationMethod::Fixed),
        }
    }
}
