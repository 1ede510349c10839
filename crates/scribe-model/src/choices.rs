//! Choices
//!
//! Selectable options presented to the student. Correctness is not stored
//! on the choice: the `authoring.correct` association pairs the correct
//! choice ids with the correct response, so toggling correctness never
//! mutates the choice itself.

use crate::error::ModelError;
use crate::list::List;
use crate::responses::choice_ids_of;
use scribe_doc::Undoable;
use serde_json::{json, Value};
use uuid::Uuid;

/// Path selecting the activity's choice sequence
pub const CHOICES_PATH: &str = "$..choices";

/// The choice list
#[must_use]
pub fn list() -> List {
    List::labeled(CHOICES_PATH, "choice")
}

/// A fresh choice entity with one paragraph of content
#[must_use]
pub fn make_choice(text: &str) -> Value {
    json!({
        "id": Uuid::new_v4().to_string(),
        "content": [ { "type": "p", "children": [ { "text": text } ] } ]
    })
}

/// All choices, in presentation order
///
/// # Errors
/// [`ModelError::Path`] on a malformed path (not expected here).
pub fn get_all(doc: &Value) -> Result<Vec<Value>, ModelError> {
    list().get_all(doc)
}

/// The choice with the given id
///
/// # Errors
/// [`ModelError::EntityNotFound`] if absent.
pub fn get_one(doc: &Value, id: &str) -> Result<Value, ModelError> {
    list().get_one(doc, id)
}

/// Append a choice
///
/// # Errors
/// [`ModelError::Path`] on a malformed path (not expected here).
pub fn add_one(doc: &mut Value, choice: Value) -> Result<(), ModelError> {
    list().add_one(doc, choice)
}

/// Remove a choice by id, returning the inverse edit
///
/// Callers must also regenerate any rules referencing the id so that
/// correctness tracks the current choice set.
///
/// # Errors
/// [`ModelError::EntityNotFound`] if absent.
pub fn remove_one(doc: &mut Value, id: &str) -> Result<Undoable, ModelError> {
    list().remove_one(doc, id)
}

/// Replace the whole choice sequence (reordering)
///
/// # Errors
/// [`ModelError::Path`] on a malformed path (not expected here).
pub fn set_all(doc: &mut Value, choices: Vec<Value>) -> Result<(), ModelError> {
    list().set_all(doc, choices)
}

/// The ids paired with the correct response in `authoring.correct`
#[must_use]
pub fn correct_choice_ids(doc: &Value) -> Vec<String> {
    doc.pointer("/authoring/correct")
        .map(choice_ids_of)
        .unwrap_or_default()
}

/// Whether a choice id is part of the correct association
#[must_use]
pub fn is_correct_choice(doc: &Value, id: &str) -> bool {
    correct_choice_ids(doc).iter().any(|c| c == id)
}
