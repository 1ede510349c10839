//! Responses and their choice associations
//!
//! A response owns a grading rule, a numeric score, and rich-text
//! feedback. Exactly one response per part scores 1 (the correct
//! response) and one carries the catch-all rule (the incorrect/default
//! response), outside of mid-edit states; the loud accessors here treat
//! violations as data-integrity errors.
//!
//! Which choices make a targeted response correct is modeled as small
//! ordered associations `[[choice ids…], response id]` under
//! `authoring.targeted`, not by embedding choice ids in the response.

use crate::error::ModelError;
use crate::list::{entity_id, List};
use scribe_doc::Undoable;
use scribe_rules::{is_catch_all_rule, match_rule, CATCH_ALL};
use serde_json::{json, Value};
use uuid::Uuid;

/// Path selecting every response collection in the document
pub const RESPONSES_PATH: &str = "$..responses";

/// Path selecting one part's response sequence
#[must_use]
pub fn by_part_path(part_id: &str) -> String {
    format!("$..parts[?(@.id=='{part_id}')].responses")
}

fn list(part_id: &str) -> List {
    List::labeled(by_part_path(part_id), "response")
}

/// A fresh response entity
#[must_use]
pub fn make_response(rule: &str, score: f64, feedback: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "rule": rule,
        "score": score,
        "feedback": {
            "id": Uuid::new_v4().to_string(),
            "content": [ { "type": "p", "children": [ { "text": feedback } ] } ]
        }
    })
}

/// The default/incorrect response: catch-all rule, score 0
#[must_use]
pub fn catch_all(feedback: &str) -> Value {
    make_response(&match_rule(CATCH_ALL), 0.0, feedback)
}

/// Every response in the document, across all parts
///
/// # Errors
/// [`ModelError::Path`] on a malformed path (not expected here).
pub fn get_all(doc: &Value) -> Result<Vec<Value>, ModelError> {
    Ok(scribe_doc::find(doc, RESPONSES_PATH)?)
}

/// One part's responses, in document order
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn by_part(doc: &Value, part_id: &str) -> Result<Vec<Value>, ModelError> {
    list(part_id).get_all(doc)
}

/// The first response satisfying a predicate, across all parts
///
/// # Errors
/// [`ModelError::NoMatchingResponse`] when nothing matches; this is a
/// data-integrity error, not a normal "not found".
pub fn get_response_by(
    doc: &Value,
    predicate: impl Fn(&Value) -> bool,
) -> Result<Value, ModelError> {
    get_all(doc)?
        .into_iter()
        .find(|r| predicate(r))
        .ok_or(ModelError::NoMatchingResponse)
}

/// The part's correct response (`score == 1`)
///
/// # Errors
/// [`ModelError::MissingCorrectResponse`] when the part has none.
pub fn get_correct_response(doc: &Value, part_id: &str) -> Result<Value, ModelError> {
    by_part(doc, part_id)?
        .into_iter()
        .find(|r| r.get("score").and_then(Value::as_f64) == Some(1.0))
        .ok_or_else(|| ModelError::MissingCorrectResponse(part_id.to_string()))
}

/// The part's incorrect/default response (carries the catch-all rule)
///
/// # Errors
/// [`ModelError::MissingCatchAllResponse`] when the part has none.
pub fn get_incorrect_response(doc: &Value, part_id: &str) -> Result<Value, ModelError> {
    by_part(doc, part_id)?
        .into_iter()
        .find(|r| r.get("rule").and_then(Value::as_str).is_some_and(is_catch_all_rule))
        .ok_or_else(|| ModelError::MissingCatchAllResponse(part_id.to_string()))
}

/// Append a response to a part
///
/// # Errors
/// [`ModelError::Path`] if the part id breaks the path template.
pub fn add_one(doc: &mut Value, part_id: &str, response: Value) -> Result<(), ModelError> {
    list(part_id).add_one(doc, response)
}

/// Remove a response by id, returning the inverse edit
///
/// # Errors
/// [`ModelError::EntityNotFound`] if the part has no such response.
pub fn remove_one(doc: &mut Value, part_id: &str, id: &str) -> Result<Undoable, ModelError> {
    list(part_id).remove_one(doc, id)
}

// Choice associations

/// The choice ids of an association pair
#[must_use]
pub fn choice_ids_of(assoc: &Value) -> Vec<String> {
    assoc
        .get(0)
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(value_as_id).collect())
        .unwrap_or_default()
}

/// The response id of an association pair
#[must_use]
pub fn response_id_of(assoc: &Value) -> Option<String> {
    assoc.get(1).and_then(value_as_id)
}

fn value_as_id(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A targeted response together with the choice ids that trigger it
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMapping {
    /// The targeted response entity
    pub response: Value,
    /// Choice ids whose selection this response addresses
    pub choice_ids: Vec<String>,
}

/// Every targeted association resolved to its response
///
/// # Errors
/// [`ModelError::NoMatchingResponse`] when an association references a
/// response id that no longer exists.
pub fn targeted_mappings(doc: &Value) -> Result<Vec<ResponseMapping>, ModelError> {
    let assocs = doc
        .pointer("/authoring/targeted")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    assocs
        .iter()
        .map(|assoc| {
            let response_id = response_id_of(assoc);
            let response = get_response_by(doc, |r| entity_id(r) == response_id)?;
            Ok(ResponseMapping {
                response,
                choice_ids: choice_ids_of(assoc),
            })
        })
        .collect()
}
