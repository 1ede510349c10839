//! Path expressions for addressing locations within a document
//!
//! A path expression is a string in a small, closed query grammar:
//!
//! ```text
//! path     := '$' segment*                        absolute
//! segment  := '.' ident                           child member
//!           | '..' ident                          every descendant member named ident
//!           | '[' integer ']'                     sequence index
//!           | '[?(@.' ident op literal ')]'       sequence filter
//! op       := '==' | '!='
//! literal  := '\'' text '\'' | bare token
//! ```
//!
//! The leading `$` is optional so that filter predicates (which are path
//! fragments like `[?(@.id!='h1')]`) parse with the same grammar. The
//! grammar is deliberately closed: it is parsed by an explicit interpreter,
//! not delegated to a query library, so its behavior is a testable contract.

use crate::error::PathError;
use serde_json::Value;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Comparison operator inside a sequence filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Field equals literal
    Eq,
    /// Field differs from literal (or is absent)
    Ne,
}

/// A sequence-filter predicate: `[?(@.field op literal)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Field name read from each element
    pub field: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Literal to compare against (quotes stripped)
    pub literal: String,
}

impl Predicate {
    /// Whether a sequence element satisfies this predicate
    ///
    /// Numbers compare numerically when both sides parse as numbers,
    /// everything else compares by string value. An element without the
    /// field never satisfies `==` and always satisfies `!=`.
    #[must_use]
    pub fn matches(&self, element: &Value) -> bool {
        let field = element.as_object().and_then(|m| m.get(&self.field));
        let equal = match field {
            None => return self.op == FilterOp::Ne,
            Some(v) => value_eq_literal(v, &self.literal),
        };
        match self.op {
            FilterOp::Eq => equal,
            FilterOp::Ne => !equal,
        }
    }
}

fn value_eq_literal(value: &Value, literal: &str) -> bool {
    if let (Some(n), Ok(lit)) = (value.as_f64(), literal.parse::<f64>()) {
        return (n - lit).abs() < f64::EPSILON;
    }
    match value {
        Value::String(s) => s == literal,
        Value::Bool(b) => b.to_string() == literal,
        Value::Null => literal == "null",
        other => other.to_string() == literal,
    }
}

/// One step of a path expression
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `.name`: member of a mapping
    Child(String),
    /// `..name`: every member named `name` in the subtree
    Descend(String),
    /// `[n]`: index into a sequence
    Index(usize),
    /// `[?(@.field op literal)]`: elements of a sequence satisfying a predicate
    Filter(Predicate),
}

/// A parsed path expression
///
/// Construct via [`PathExpr::parse`] or [`FromStr`]. Evaluation lives in
/// the engine; the expression itself is plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpr {
    segments: Vec<Segment>,
}

impl PathExpr {
    /// Parse an expression, absolute (`$…`) or relative (`[…` / `.…`)
    ///
    /// # Errors
    /// [`PathError::Syntax`] on any malformed input, [`PathError::Empty`]
    /// for the empty string.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::Empty);
        }
        let mut parser = Parser { src: input, pos: 0 };
        if parser.peek() == Some('$') {
            parser.bump();
        }
        let mut segments = Vec::new();
        while parser.pos < parser.src.len() {
            segments.push(parser.segment()?);
        }
        Ok(Self { segments })
    }

    /// The parsed steps, in order
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for PathExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.segments {
            match seg {
                Segment::Child(name) => write!(f, ".{name}")?,
                Segment::Descend(name) => write!(f, "..{name}")?,
                Segment::Index(i) => write!(f, "[{i}]")?,
                Segment::Filter(p) => {
                    let op = if p.op == FilterOp::Eq { "==" } else { "!=" };
                    write!(f, "[?(@.{}{}'{}')]", p.field, op, p.literal)?;
                }
            }
        }
        Ok(())
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: &str) -> Result<(), PathError> {
        if self.src[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            Ok(())
        } else {
            Err(self.err(format!("expected '{expected}'")))
        }
    }

    fn err(&self, message: impl Into<String>) -> PathError {
        PathError::syntax(self.src, self.pos, message)
    }

    fn segment(&mut self) -> Result<Segment, PathError> {
        match self.peek() {
            Some('.') => {
                self.bump();
                if self.peek() == Some('.') {
                    self.bump();
                    Ok(Segment::Descend(self.ident()?))
                } else {
                    Ok(Segment::Child(self.ident()?))
                }
            }
            Some('[') => {
                self.bump();
                if self.peek() == Some('?') {
                    self.predicate()
                } else {
                    self.index()
                }
            }
            Some(c) => Err(self.err(format!("unexpected character '{c}'"))),
            None => Err(self.err("unexpected end of expression")),
        }
    }

    fn ident(&mut self) -> Result<String, PathError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(self.err("expected a member name"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn index(&mut self) -> Result<Segment, PathError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.pos == start {
            return Err(self.err("expected index or filter"));
        }
        let n: usize = self.src[start..self.pos]
            .parse()
            .map_err(|_| self.err("index out of range"))?;
        self.eat("]")?;
        Ok(Segment::Index(n))
    }

    fn predicate(&mut self) -> Result<Segment, PathError> {
        self.eat("?(@.")?;
        let field = self.ident()?;
        let op = if self.src[self.pos..].starts_with("==") {
            self.pos += 2;
            FilterOp::Eq
        } else if self.src[self.pos..].starts_with("!=") {
            self.pos += 2;
            FilterOp::Ne
        } else {
            return Err(self.err("expected '==' or '!='"));
        };
        let literal = self.literal()?;
        self.eat(")]")?;
        Ok(Segment::Filter(Predicate { field, op, literal }))
    }

    fn literal(&mut self) -> Result<String, PathError> {
        if self.peek() == Some('\'') {
            self.bump();
            let start = self.pos;
            let end = self.src[start..]
                .find('\'')
                .ok_or_else(|| self.err("unterminated string literal"))?;
            self.pos = start + end + 1;
            Ok(self.src[start..start + end].to_string())
        } else {
            // bare token: a number or an unquoted id, up to the closing paren
            let start = self.pos;
            let end = self.src[start..]
                .find(')')
                .ok_or_else(|| self.err("unterminated predicate"))?;
            if end == 0 {
                return Err(self.err("expected a literal"));
            }
            self.pos = start + end;
            Ok(self.src[start..start + end].to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_child_and_descend() {
        let expr = PathExpr::parse("$.authoring..parts").unwrap();
        assert_eq!(
            expr.segments(),
            &[
                Segment::Child("authoring".into()),
                Segment::Descend("parts".into())
            ]
        );
    }

    #[test]
    fn parses_index() {
        let expr = PathExpr::parse("$.choices[2]").unwrap();
        assert_eq!(
            expr.segments(),
            &[Segment::Child("choices".into()), Segment::Index(2)]
        );
    }

    #[test]
    fn parses_quoted_predicate() {
        let expr = PathExpr::parse("$..parts[?(@.id=='p1')].hints").unwrap();
        assert_eq!(
            expr.segments(),
            &[
                Segment::Descend("parts".into()),
                Segment::Filter(Predicate {
                    field: "id".into(),
                    op: FilterOp::Eq,
                    literal: "p1".into()
                }),
                Segment::Child("hints".into()),
            ]
        );
    }

    #[test]
    fn parses_bare_predicate_literal() {
        // call sites emit both quoted and unquoted id literals
        let expr = PathExpr::parse("[?(@.id!=choice-2)]").unwrap();
        assert_eq!(
            expr.segments(),
            &[Segment::Filter(Predicate {
                field: "id".into(),
                op: FilterOp::Ne,
                literal: "choice-2".into()
            })]
        );
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(PathExpr::parse("").is_err());
        assert!(PathExpr::parse("$..").is_err());
        assert!(PathExpr::parse("$.choices[").is_err());
        assert!(PathExpr::parse("$[?(@.id~'x')]").is_err());
        assert!(PathExpr::parse("$[?(@.id=='x'").is_err());
        assert!(PathExpr::parse("$.choices[1x]").is_err());
    }

    #[test]
    fn display_round_trips() {
        for src in ["$..parts[?(@.id=='p1')].hints", "$.choices[0]", "$..responses"] {
            let expr = PathExpr::parse(src).unwrap();
            assert_eq!(PathExpr::parse(&expr.to_string()).unwrap(), expr);
        }
    }

    #[test]
    fn predicate_compares_numbers_numerically() {
        let pred = Predicate {
            field: "id".into(),
            op: FilterOp::Eq,
            literal: "3".into(),
        };
        assert!(pred.matches(&json!({ "id": 3 })));
        assert!(pred.matches(&json!({ "id": 3.0 })));
        assert!(!pred.matches(&json!({ "id": 4 })));
    }

    #[test]
    fn predicate_on_missing_field() {
        let eq = Predicate {
            field: "id".into(),
            op: FilterOp::Eq,
            literal: "x".into(),
        };
        let ne = Predicate {
            field: "id".into(),
            op: FilterOp::Ne,
            literal: "x".into(),
        };
        assert!(!eq.matches(&json!({ "other": "x" })));
        assert!(ne.matches(&json!({ "other": "x" })));
    }
}
