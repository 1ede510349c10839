//! Scribe Rule Compiler
//!
//! The textual domain-specific language expressing how a student's answer
//! is matched against correctness criteria: equality, containment,
//! ordering, numeric comparisons, ranges, and boolean combinators.
//!
//! # Overview
//!
//! - [`compose`]: total string builders for operators, combinators
//!   (`AND`/`OR`/`NOT`), range construction, and id-set rule generation
//! - [`parse`]: the inverse direction, heuristic operator inference and
//!   operand extraction, used to repopulate UI state from stored text
//! - [`operator`]: the closed [`RuleOperator`] set
//!
//! Rule text produced by the builders is re-parseable by the parsers
//! (round-trip law). The text itself is the contract: grading of
//! already-authored activities depends on byte-for-byte output, so the
//! historical operand-order asymmetry of the combinators is preserved, not
//! corrected.
//!
//! # Example
//!
//! ```
//! use scribe_rules::{and_rules, invert_rule, match_rule, parse_operator_from_rule, RuleOperator};
//!
//! let rule = and_rules([match_rule("id1"), invert_rule(&match_rule("id2"))]);
//! assert_eq!(rule, "(!(input like {id2})) && (input like {id1})");
//! assert_eq!(parse_operator_from_rule("input > {3}").unwrap(), RuleOperator::Gt);
//! ```
//!
//! Evaluating a rule against live student input is a separate runtime
//! collaborator; this crate only builds and parses the text.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod compose;
pub mod error;
pub mod operator;
pub mod parse;

// Re-exports
pub use compose::{
    and_rules, btw_rule, contains_rule, create_rule_for_ids, eq_rule, gt_rule, gte_rule,
    invert_rule, lt_rule, lte_rule, make_rule, match_in_order_rule, match_list_rule, match_rule,
    nbtw_rule, neq_rule, not_contains_rule, or_rules, RuleInput, CATCH_ALL,
};
pub use error::RuleError;
pub use operator::{is_operator, RuleOperator};
pub use parse::{
    is_catch_all_rule, is_text_rule, parse_numeric_input_from_rule, parse_operator_from_rule,
    parse_text_input_from_rule,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rule construction and parsing
    pub use crate::{
        and_rules, create_rule_for_ids, invert_rule, is_catch_all_rule, make_rule, match_rule,
        or_rules, parse_numeric_input_from_rule, parse_operator_from_rule, RuleInput, RuleOperator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
