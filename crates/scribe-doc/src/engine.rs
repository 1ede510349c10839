//! Path evaluation and the four primitive document operations
//!
//! Evaluation happens in two phases: a path expression is first resolved
//! against the document into concrete addresses (chains of key/index
//! accessors), then the operation mutates the real nodes those addresses
//! reach. Mutation is always in place; `find` is the only operation that
//! copies.
//!
//! A path matching zero locations is never an error: mutating operations
//! become no-ops and `find` returns an empty sequence. Only a malformed
//! expression fails, and [`apply_all`] restores its entry snapshot when
//! that happens mid-batch.

use crate::error::PathError;
use crate::ops::Operation;
use crate::path::{PathExpr, Segment};
use serde_json::Value;

/// One concrete step from the document root toward a node
#[derive(Debug, Clone, PartialEq, Eq)]
enum Accessor {
    Key(String),
    Index(usize),
}

type Address = Vec<Accessor>;

fn node_at<'a>(doc: &'a Value, address: &[Accessor]) -> Option<&'a Value> {
    let mut current = doc;
    for accessor in address {
        current = match accessor {
            Accessor::Key(key) => current.as_object()?.get(key)?,
            Accessor::Index(i) => current.as_array()?.get(*i)?,
        };
    }
    Some(current)
}

fn node_at_mut<'a>(doc: &'a mut Value, address: &[Accessor]) -> Option<&'a mut Value> {
    let mut current = doc;
    for accessor in address {
        current = match accessor {
            Accessor::Key(key) => current.as_object_mut()?.get_mut(key)?,
            Accessor::Index(i) => current.as_array_mut()?.get_mut(*i)?,
        };
    }
    Some(current)
}

/// Resolve an expression to the addresses of every matched node,
/// in document traversal order.
fn resolve(doc: &Value, expr: &PathExpr) -> Vec<Address> {
    let mut frontier: Vec<Address> = vec![Vec::new()];
    for segment in expr.segments() {
        let mut next = Vec::new();
        for address in frontier {
            let Some(node) = node_at(doc, &address) else {
                continue;
            };
            match segment {
                Segment::Child(name) => {
                    if node.as_object().is_some_and(|m| m.contains_key(name)) {
                        let mut addr = address;
                        addr.push(Accessor::Key(name.clone()));
                        next.push(addr);
                    }
                }
                Segment::Descend(name) => descend(node, &address, name, &mut next),
                Segment::Index(i) => {
                    if node.as_array().is_some_and(|a| *i < a.len()) {
                        let mut addr = address;
                        addr.push(Accessor::Index(*i));
                        next.push(addr);
                    }
                }
                Segment::Filter(predicate) => {
                    if let Some(elements) = node.as_array() {
                        for (i, element) in elements.iter().enumerate() {
                            if predicate.matches(element) {
                                let mut addr = address.clone();
                                addr.push(Accessor::Index(i));
                                next.push(addr);
                            }
                        }
                    }
                }
            }
        }
        frontier = next;
    }
    frontier
}

fn descend(node: &Value, base: &Address, name: &str, out: &mut Vec<Address>) {
    match node {
        Value::Object(map) => {
            if map.contains_key(name) {
                let mut addr = base.clone();
                addr.push(Accessor::Key(name.to_string()));
                out.push(addr);
            }
            for (key, child) in map {
                let mut addr = base.clone();
                addr.push(Accessor::Key(key.clone()));
                descend(child, &addr, name, out);
            }
        }
        Value::Array(elements) => {
            for (i, child) in elements.iter().enumerate() {
                let mut addr = base.clone();
                addr.push(Accessor::Index(i));
                descend(child, &addr, name, out);
            }
        }
        _ => {}
    }
}

fn find_expr(doc: &Value, expr: &PathExpr) -> Vec<Value> {
    let mut matches = Vec::new();
    for address in resolve(doc, expr) {
        if let Some(node) = node_at(doc, &address) {
            match node {
                Value::Array(elements) => matches.extend(elements.iter().cloned()),
                other => matches.push(other.clone()),
            }
        }
    }
    matches
}

/// Evaluate `path` and return every matched value, flattened
///
/// A matched sequence contributes its elements; any other matched value
/// contributes itself. When the path selects several independent
/// collections (e.g. `$..hints` across all parts) the results are
/// concatenated in document traversal order.
///
/// # Errors
/// [`PathError`] if the expression is malformed.
pub fn find(doc: &Value, path: &str) -> Result<Vec<Value>, PathError> {
    let expr = PathExpr::parse(path)?;
    Ok(find_expr(doc, &expr))
}

/// Insert `item` into every sequence matched by `path`
///
/// `index` of `None`, a negative value, or a value beyond the current
/// length appends; otherwise the item lands at `index`, shifting later
/// elements. Matched values that are not sequences are ignored.
///
/// # Errors
/// [`PathError`] if the expression is malformed.
pub fn insert(
    doc: &mut Value,
    path: &str,
    item: &Value,
    index: Option<i64>,
) -> Result<(), PathError> {
    let expr = PathExpr::parse(path)?;
    for address in resolve(doc, &expr) {
        let Some(elements) = node_at_mut(doc, &address).and_then(Value::as_array_mut) else {
            continue;
        };
        let position = match index {
            Some(i) if i >= 0 => usize::try_from(i).unwrap_or(usize::MAX).min(elements.len()),
            _ => elements.len(),
        };
        elements.insert(position, item.clone());
    }
    Ok(())
}

/// Replace every value matched by `path` wholesale with `item`
///
/// This replaces the *container* the path selects, not a sub-field:
/// callers pick a path precise enough to select exactly the value they
/// intend to overwrite.
///
/// # Errors
/// [`PathError`] if the expression is malformed.
pub fn replace(doc: &mut Value, path: &str, item: &Value) -> Result<(), PathError> {
    let expr = PathExpr::parse(path)?;
    // deepest-first, so an ancestor replacement wins over one inside it
    for address in resolve(doc, &expr).into_iter().rev() {
        if let Some(node) = node_at_mut(doc, &address) {
            *node = item.clone();
        }
    }
    Ok(())
}

/// Re-evaluate `path` + `predicate` and assign the result at every
/// location matched by `path`
///
/// The predicate is a relative path fragment (e.g. `[?(@.id!='c1')]`), so
/// this is the "keep only items satisfying a predicate" primitive. The
/// combined expression is evaluated once, against the document as it
/// stands when the operation runs, and that one result is assigned to
/// every matched location.
///
/// # Errors
/// [`PathError`] if either expression is malformed.
pub fn filter(doc: &mut Value, path: &str, predicate: &str) -> Result<(), PathError> {
    let expr = PathExpr::parse(path)?;
    let combined = PathExpr::parse(&format!("{path}{predicate}"))?;
    let kept = find_expr(doc, &combined);
    for address in resolve(doc, &expr).into_iter().rev() {
        if let Some(node) = node_at_mut(doc, &address) {
            *node = Value::Array(kept.clone());
        }
    }
    Ok(())
}

/// Apply one operation, returning matches for `Find` and an empty
/// sequence for the mutating operations
///
/// # Errors
/// [`PathError`] if the operation's path is malformed. A failed apply
/// never mutates: paths are parsed before any mutation happens.
pub fn apply(doc: &mut Value, op: &Operation) -> Result<Vec<Value>, PathError> {
    match op {
        Operation::Find { path } => find(doc, path),
        Operation::Insert { path, item, index } => {
            insert(doc, path, item, *index)?;
            Ok(Vec::new())
        }
        Operation::Replace { path, item } => {
            replace(doc, path, item)?;
            Ok(Vec::new())
        }
        Operation::Filter { path, predicate } => {
            filter(doc, path, predicate)?;
            Ok(Vec::new())
        }
    }
}

/// Apply a batch of operations strictly in order
///
/// Later operations observe mutations from earlier ones. The document is
/// snapshotted on entry and restored on the first error, so a mid-batch
/// failure leaves it exactly as it was.
///
/// # Errors
/// The first [`PathError`] raised by an operation in the batch.
pub fn apply_all(doc: &mut Value, ops: &[Operation]) -> Result<(), PathError> {
    let snapshot = doc.clone();
    tracing::debug!(batch = ops.len(), "applying operation batch");
    for op in ops {
        if let Err(err) = apply(doc, op) {
            tracing::debug!(%err, path = op.path(), "operation failed, restoring snapshot");
            *doc = snapshot;
            return Err(err);
        }
    }
    Ok(())
}
