//! Hint ladders
//!
//! Hints within a part are order-significant: index 0 is the "orienting"
//! (deer-in-headlights) hint, the last index is the "bottom-out" hint
//! that gives the answer away, and every interior index is a repeatable
//! "cognitive" hint. Adding a cognitive hint therefore inserts *before*
//! the last index, so the bottom-out hint stays last.
//!
//! With fewer than two hints the ladder degenerates: no hints means the
//! positional accessors return nothing, a single hint is both the
//! orienting and the bottom-out hint.

use crate::error::ModelError;
use crate::list::List;
use scribe_doc::Undoable;
use serde_json::{json, Value};
use uuid::Uuid;

/// Path selecting every hint collection in the document
pub const HINTS_PATH: &str = "$..hints";

/// Path selecting one part's hint sequence
#[must_use]
pub fn by_part_path(part_id: &str) -> String {
    format!("$..parts[?(@.id=='{part_id}')].hints")
}

fn list(part_id: &str) -> List {
    List::labeled(by_part_path(part_id), "hint")
}

/// A fresh hint entity with one paragraph of content
#[must_use]
pub fn make_hint(text: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "content": [ { "type": "p", "children": [ { "text": text } ] } ]
    })
}

/// One part's hints, in ladder order
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn by_part(doc: &Value, part_id: &str) -> Result<Vec<Value>, ModelError> {
    list(part_id).get_all(doc)
}

/// The orienting hint (index 0), if any
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn deer_in_headlights(doc: &Value, part_id: &str) -> Result<Option<Value>, ModelError> {
    Ok(by_part(doc, part_id)?.into_iter().next())
}

/// The bottom-out hint (last index), if any
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn bottom_out(doc: &Value, part_id: &str) -> Result<Option<Value>, ModelError> {
    Ok(by_part(doc, part_id)?.into_iter().next_back())
}

/// The cognitive hints: everything strictly between the orienting and
/// bottom-out hints
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn cognitive(doc: &Value, part_id: &str) -> Result<Vec<Value>, ModelError> {
    let mut hints = by_part(doc, part_id)?;
    if hints.len() <= 2 {
        return Ok(Vec::new());
    }
    hints.truncate(hints.len() - 1);
    hints.remove(0);
    Ok(hints)
}

/// Append a hint at the end of the ladder
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn add_one(doc: &mut Value, part_id: &str, hint: Value) -> Result<(), ModelError> {
    list(part_id).add_one(doc, hint)
}

/// Insert a cognitive hint immediately before the bottom-out hint
///
/// On an empty ladder this appends.
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn add_cognitive(doc: &mut Value, part_id: &str, hint: Value) -> Result<(), ModelError> {
    let count = by_part(doc, part_id)?.len();
    let index = i64::try_from(count).unwrap_or(0) - 1;
    list(part_id).add_one_at(doc, hint, index)
}

/// Remove a hint by id, returning the inverse edit
///
/// Removing an interior hint does not disturb the relative order of the
/// rest.
///
/// # Errors
/// [`ModelError::EntityNotFound`] if the part has no such hint.
pub fn remove_one(doc: &mut Value, part_id: &str, id: &str) -> Result<Undoable, ModelError> {
    list(part_id).remove_one(doc, id)
}
