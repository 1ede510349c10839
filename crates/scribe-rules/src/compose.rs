//! Rule construction
//!
//! Pure string builders for the grading-rule grammar. Builders are total:
//! they never fail, they only produce text. The exact text matters:
//! grading of already-authored activities depends on byte-for-byte output,
//! so none of the historical quirks here may be "corrected":
//!
//! - `and_rules`/`or_rules` fold pairwise with the *later* operand printed
//!   first: `and_rules([a, b])` is `b && (a)`.
//! - `lte`/`gte` are derived via OR with equality, not primitive.
//! - `btw_rule` sorts its numeric bounds and falls back to `0,0` when a
//!   bound does not parse as a number.

use crate::error::RuleError;
use crate::operator::RuleOperator;

/// The catch-all sentinel, matching any input
pub const CATCH_ALL: &str = ".*";

/// Wrap a rule in a negation
#[must_use]
pub fn invert_rule(rule: &str) -> String {
    format!("(!({rule}))")
}

fn and_two_rules(rule1: &str, rule2: &str) -> String {
    format!("{rule2} && ({rule1})")
}

/// Conjunction of rules, left fold, later operand printed first
///
/// An empty iterator yields the empty rule; callers always pass at least
/// one.
#[must_use]
pub fn and_rules<I>(rules: I) -> String
where
    I: IntoIterator<Item = String>,
{
    rules
        .into_iter()
        .reduce(|acc, next| and_two_rules(&acc, &next))
        .unwrap_or_default()
}

fn or_two_rules(rule1: &str, rule2: &str) -> String {
    format!("{rule2} || ({rule1})")
}

/// Disjunction of rules, left fold, later operand printed first
#[must_use]
pub fn or_rules<I>(rules: I) -> String
where
    I: IntoIterator<Item = String>,
{
    rules
        .into_iter()
        .reduce(|acc, next| or_two_rules(&acc, &next))
        .unwrap_or_default()
}

// text

/// `input like {…}`, the identity / regex match
#[must_use]
pub fn match_rule(input: &str) -> String {
    format!("input like {{{input}}}")
}

/// `input contains {…}`
#[must_use]
pub fn contains_rule(input: &str) -> String {
    format!("input contains {{{input}}}")
}

/// Negated containment
#[must_use]
pub fn not_contains_rule(input: &str) -> String {
    invert_rule(&contains_rule(input))
}

// numeric

/// `input = {…}`
#[must_use]
pub fn eq_rule(input: &str) -> String {
    format!("input = {{{input}}}")
}

/// Negated equality
#[must_use]
pub fn neq_rule(input: &str) -> String {
    invert_rule(&eq_rule(input))
}

/// `input < {…}`
#[must_use]
pub fn lt_rule(input: &str) -> String {
    format!("input < {{{input}}}")
}

/// Less-or-equal, derived as `lt OR eq`
#[must_use]
pub fn lte_rule(input: &str) -> String {
    or_rules([lt_rule(input), eq_rule(input)])
}

/// `input > {…}`
#[must_use]
pub fn gt_rule(input: &str) -> String {
    format!("input > {{{input}}}")
}

/// Greater-or-equal, derived as `gt OR eq`
#[must_use]
pub fn gte_rule(input: &str) -> String {
    or_rules([gt_rule(input), eq_rule(input)])
}

// range

fn make_btw_rule(lesser: &str, greater: &str) -> String {
    and_rules([
        or_rules([gt_rule(lesser), eq_rule(lesser)]),
        or_rules([lt_rule(greater), eq_rule(greater)]),
    ])
}

/// Between two bounds, inclusive
///
/// Bounds are sorted numerically so the lesser bound always anchors the
/// lower comparison; a bound that fails to parse as a number degrades the
/// whole rule to the `0,0` range.
#[must_use]
pub fn btw_rule(left: &str, right: &str) -> String {
    let (Ok(parsed_left), Ok(parsed_right)) = (left.parse::<f64>(), right.parse::<f64>()) else {
        return make_btw_rule("0", "0");
    };
    if parsed_left.is_nan() || parsed_right.is_nan() {
        return make_btw_rule("0", "0");
    }
    let (lesser, greater) = if parsed_left < parsed_right {
        (left, right)
    } else {
        (right, left)
    };
    make_btw_rule(lesser, greater)
}

/// Outside two bounds
#[must_use]
pub fn nbtw_rule(left: &str, right: &str) -> String {
    invert_rule(&btw_rule(left, right))
}

/// Operand(s) for [`make_rule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleInput {
    /// One operand (all text and single-bound numeric operators)
    Single(String),
    /// Two operands (range operators)
    Pair(String, String),
}

impl RuleInput {
    /// Single operand from anything string-like
    #[inline]
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    /// Operand pair from anything string-like
    #[inline]
    pub fn pair(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Pair(left.into(), right.into())
    }
}

/// Build rule text from an operator and its operand(s)
///
/// # Errors
/// [`RuleError::InputShape`] when a range operator is given a single
/// operand or vice versa.
pub fn make_rule(operator: RuleOperator, input: &RuleInput) -> Result<String, RuleError> {
    match (operator, input) {
        (RuleOperator::Gt, RuleInput::Single(v)) => Ok(gt_rule(v)),
        (RuleOperator::Gte, RuleInput::Single(v)) => Ok(gte_rule(v)),
        (RuleOperator::Lt, RuleInput::Single(v)) => Ok(lt_rule(v)),
        (RuleOperator::Lte, RuleInput::Single(v)) => Ok(lte_rule(v)),
        (RuleOperator::Eq, RuleInput::Single(v)) => Ok(eq_rule(v)),
        (RuleOperator::Neq, RuleInput::Single(v)) => Ok(neq_rule(v)),
        (RuleOperator::Contains, RuleInput::Single(v)) => Ok(contains_rule(v)),
        (RuleOperator::NotContains, RuleInput::Single(v)) => Ok(not_contains_rule(v)),
        (RuleOperator::Regex, RuleInput::Single(v)) => Ok(match_rule(v)),
        (RuleOperator::Btw, RuleInput::Pair(l, r)) => Ok(btw_rule(l, r)),
        (RuleOperator::Nbtw, RuleInput::Pair(l, r)) => Ok(nbtw_rule(l, r)),
        (op, RuleInput::Single(_)) => Err(RuleError::InputShape {
            operator: op,
            expected: "pair",
        }),
        (op, RuleInput::Pair(..)) => Err(RuleError::InputShape {
            operator: op,
            expected: "single",
        }),
    }
}

/// Conjunction of "match every id in `to_match`" and "match no id in
/// `not_to_match`"
///
/// This is how multi-select and ordering activities derive one rule from
/// the currently-correct choice ids; it must be regenerated, not
/// hand-edited, whenever the choice set changes.
#[must_use]
pub fn create_rule_for_ids<S: AsRef<str>>(to_match: &[S], not_to_match: &[S]) -> String {
    let rules = to_match
        .iter()
        .map(|id| match_rule(id.as_ref()))
        .chain(
            not_to_match
                .iter()
                .map(|id| invert_rule(&match_rule(id.as_ref()))),
        )
        .collect::<Vec<_>>();
    and_rules(rules)
}

/// [`create_rule_for_ids`] with the complement computed by set difference:
/// match every id in `to_match`, match none of `all` \ `to_match`
#[must_use]
pub fn match_list_rule<S: AsRef<str>>(all: &[S], to_match: &[S]) -> String {
    let matched: Vec<&str> = to_match.iter().map(AsRef::as_ref).collect();
    let complement: Vec<&str> = all
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| !matched.contains(id))
        .collect();
    create_rule_for_ids(&matched, &complement)
}

/// Match an ordered list of ids in exactly that order
#[must_use]
pub fn match_in_order_rule<S: AsRef<str>>(ordered: &[S]) -> String {
    let joined = ordered
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    match_rule(&joined)
}
