//! Rule operators
//!
//! The closed set of operators a response's correctness test can use.
//! Names round-trip through [`FromStr`]/[`Display`] because authoring UI
//! state stores them as plain strings.

use crate::error::RuleError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Operator families of the grading-rule grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleOperator {
    /// Text: input contains a fragment
    Contains,
    /// Text: negated containment
    NotContains,
    /// Text: regex / identity match (`input like {…}`)
    Regex,
    /// Numeric: strictly greater
    Gt,
    /// Numeric: greater or equal (derived, not primitive)
    Gte,
    /// Numeric: equal
    Eq,
    /// Numeric: strictly less
    Lt,
    /// Numeric: less or equal (derived, not primitive)
    Lte,
    /// Numeric: not equal (derived)
    Neq,
    /// Range: between two bounds, inclusive
    Btw,
    /// Range: outside two bounds
    Nbtw,
}

impl RuleOperator {
    /// All operators, in declaration order
    pub const ALL: [RuleOperator; 11] = [
        Self::Contains,
        Self::NotContains,
        Self::Regex,
        Self::Gt,
        Self::Gte,
        Self::Eq,
        Self::Lt,
        Self::Lte,
        Self::Neq,
        Self::Btw,
        Self::Nbtw,
    ];

    /// Lowercase name, as stored by authoring UI state
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::NotContains => "notcontains",
            Self::Regex => "regex",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Neq => "neq",
            Self::Btw => "btw",
            Self::Nbtw => "nbtw",
        }
    }

    /// Whether this operator takes a pair of operands
    #[inline]
    #[must_use]
    pub fn is_range(self) -> bool {
        matches!(self, Self::Btw | Self::Nbtw)
    }
}

impl Display for RuleOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleOperator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(Self::Contains),
            "notcontains" => Ok(Self::NotContains),
            "regex" => Ok(Self::Regex),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            "eq" => Ok(Self::Eq),
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            "neq" => Ok(Self::Neq),
            "btw" => Ok(Self::Btw),
            "nbtw" => Ok(Self::Nbtw),
            other => Err(RuleError::UnknownOperator(other.to_string())),
        }
    }
}

/// Whether a string names a known operator
#[inline]
#[must_use]
pub fn is_operator(s: &str) -> bool {
    RuleOperator::from_str(s).is_ok()
}
