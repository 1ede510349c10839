//! Rule parsing
//!
//! The inverse direction of [`compose`](crate::compose), used to
//! repopulate authoring UI state from stored rule text. Parsing is
//! **heuristic, not grammar-driven**: the operator is inferred from the
//! presence of `!`, `>`, `<`, `=` and the text operator keywords, in a
//! fixed priority order that downstream callers depend on.
//!
//! Sharp edge, by contract: these functions do not validate that the text
//! was produced by the rule grammar. Arbitrary text that happens to
//! contain `<` or `=` is silently mis-parsed rather than rejected;
//! changing that would alter grading outcomes for already-authored
//! content. Callers guard with [`is_catch_all_rule`] or known-format
//! assumptions before invoking a specific-shape parser.

use crate::compose::{match_rule, RuleInput, CATCH_ALL};
use crate::error::RuleError;
use crate::operator::RuleOperator;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two equality captures, e.g. `input = {17} || … = {1} …`, marking a
/// range rule. Greedy, so the captures are the first and last occurrence,
/// in textual order.
static BETWEEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"= \{(\d+)\}.* = \{(\d+)\}").unwrap());

/// Infer the operator that produced a rule
///
/// Priority order (first match wins): notcontains, contains, regex, nbtw,
/// btw, gte, gt, lte, lt, neq, eq.
///
/// # Errors
/// [`RuleError::OperatorNotFound`] when no pattern matches at all.
pub fn parse_operator_from_rule(rule: &str) -> Result<RuleOperator, RuleError> {
    let has = |c: char| rule.contains(c);
    // text
    if has('!') && rule.contains("contains") {
        Ok(RuleOperator::NotContains)
    } else if rule.contains("contains") {
        Ok(RuleOperator::Contains)
    } else if rule.contains("like") {
        Ok(RuleOperator::Regex)
    }
    // numeric
    else if has('!') && has('>') && has('<') && has('=') {
        Ok(RuleOperator::Nbtw)
    } else if has('>') && has('<') && has('=') {
        Ok(RuleOperator::Btw)
    } else if has('>') && has('=') {
        Ok(RuleOperator::Gte)
    } else if has('>') {
        Ok(RuleOperator::Gt)
    } else if has('<') && has('=') {
        Ok(RuleOperator::Lte)
    } else if has('<') {
        Ok(RuleOperator::Lt)
    } else if has('!') && has('=') {
        Ok(RuleOperator::Neq)
    } else if has('=') {
        Ok(RuleOperator::Eq)
    } else {
        Err(RuleError::OperatorNotFound(rule.to_string()))
    }
}

/// Extract the operand(s) of a numeric rule
///
/// Tries the two-capture range pattern first, falling back to the single
/// extraction between the first `{` and the first `}`. Range captures
/// come back in textual order (greater bound first, since
/// [`btw_rule`](crate::compose::btw_rule) prints it first); regenerating
/// the rule re-sorts them.
///
/// # Errors
/// [`RuleError::MissingInput`] when the text carries no braced input.
pub fn parse_numeric_input_from_rule(rule: &str) -> Result<RuleInput, RuleError> {
    if let Some(captures) = BETWEEN.captures(rule) {
        return Ok(RuleInput::pair(&captures[1], &captures[2]));
    }
    parse_single_input(rule).map(RuleInput::Single)
}

/// Extract the operand of a text rule
///
/// # Errors
/// [`RuleError::MissingInput`] when the text carries no braced input.
pub fn parse_text_input_from_rule(rule: &str) -> Result<String, RuleError> {
    parse_single_input(rule)
}

fn parse_single_input(rule: &str) -> Result<String, RuleError> {
    let open = rule
        .find('{')
        .ok_or_else(|| RuleError::MissingInput(rule.to_string()))?;
    let close = rule
        .find('}')
        .filter(|close| *close > open)
        .ok_or_else(|| RuleError::MissingInput(rule.to_string()))?;
    Ok(rule[open + 1..close].to_string())
}

/// Whether a rule is the catch-all sentinel
///
/// Accepts both the bare sentinel and its `input like {.*}` spelling; a
/// part's default/incorrect response carries one of the two.
#[must_use]
pub fn is_catch_all_rule(rule: &str) -> bool {
    rule == CATCH_ALL || rule == match_rule(CATCH_ALL)
}

/// Whether a rule came from a text operator
#[must_use]
pub fn is_text_rule(rule: &str) -> bool {
    rule.contains("contains") || rule.contains("like")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{
        btw_rule, contains_rule, eq_rule, gte_rule, match_rule, nbtw_rule, neq_rule,
        not_contains_rule,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn operator_priority_over_constructed_rules() {
        assert_eq!(
            parse_operator_from_rule(&contains_rule("x")).unwrap(),
            RuleOperator::Contains
        );
        assert_eq!(
            parse_operator_from_rule(&not_contains_rule("x")).unwrap(),
            RuleOperator::NotContains
        );
        assert_eq!(
            parse_operator_from_rule(&match_rule("x")).unwrap(),
            RuleOperator::Regex
        );
        assert_eq!(
            parse_operator_from_rule(&nbtw_rule("1", "9")).unwrap(),
            RuleOperator::Nbtw
        );
        assert_eq!(
            parse_operator_from_rule(&btw_rule("1", "9")).unwrap(),
            RuleOperator::Btw
        );
        assert_eq!(
            parse_operator_from_rule(&gte_rule("5")).unwrap(),
            RuleOperator::Gte
        );
        assert_eq!(
            parse_operator_from_rule(&neq_rule("5")).unwrap(),
            RuleOperator::Neq
        );
        assert_eq!(
            parse_operator_from_rule(&eq_rule("5")).unwrap(),
            RuleOperator::Eq
        );
    }

    #[test]
    fn no_operator_is_an_error() {
        assert_eq!(
            parse_operator_from_rule("input"),
            Err(RuleError::OperatorNotFound("input".to_string()))
        );
    }

    #[test]
    fn range_input_captured_in_textual_order() {
        let input = parse_numeric_input_from_rule(&btw_rule("1", "17")).unwrap();
        // btw prints the greater bound first
        assert_eq!(input, RuleInput::pair("17", "1"));
    }

    #[test]
    fn single_input_between_first_braces() {
        assert_eq!(
            parse_numeric_input_from_rule(&gte_rule("42")).unwrap(),
            RuleInput::single("42")
        );
        assert_eq!(parse_text_input_from_rule(&match_rule("c1")).unwrap(), "c1");
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(parse_text_input_from_rule("input like nothing").is_err());
        assert!(parse_text_input_from_rule("} input {").is_err());
    }

    #[test]
    fn catch_all_identity() {
        assert!(is_catch_all_rule(CATCH_ALL));
        assert!(is_catch_all_rule(&match_rule(CATCH_ALL)));
        assert!(!is_catch_all_rule(&match_rule("c1")));
        assert!(!is_catch_all_rule(&eq_rule("5")));
    }

    #[test]
    fn text_rule_detection() {
        assert!(is_text_rule(&contains_rule("x")));
        assert!(is_text_rule(&match_rule("x")));
        assert!(!is_text_rule(&eq_rule("5")));
    }

    #[test]
    fn unvalidated_text_is_misparsed_not_rejected() {
        // contractual sharp edge: this never came from the grammar
        assert_eq!(
            parse_operator_from_rule("2 < 3 = maybe").unwrap(),
            RuleOperator::Lte
        );
    }
}
