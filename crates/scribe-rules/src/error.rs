//! Error types for the rule compiler
//!
//! Builders are total and never fail; only the heuristic parsers and the
//! operator/input dispatch raise errors.

use crate::operator::RuleOperator;

/// Errors raised while parsing rule text or dispatching a build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// String is not one of the known operator names
    #[error("'{0}' is not a valid rule operator")]
    UnknownOperator(String),

    /// No operator pattern matched the rule text
    #[error("operator could not be found in rule '{0}'")]
    OperatorNotFound(String),

    /// Rule text carries no braced input
    #[error("no braced input in rule '{0}'")]
    MissingInput(String),

    /// Operator given the wrong input shape (single vs. pair)
    #[error("operator '{operator}' expects a {expected} input")]
    InputShape {
        /// The operator being dispatched
        operator: RuleOperator,
        /// `"single"` or `"pair"`
        expected: &'static str,
    },
}
