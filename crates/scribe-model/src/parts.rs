//! Part lookup
//!
//! A part is a scored sub-unit of an activity, owning its own responses
//! and hints. Parts live under `authoring.parts`.

use crate::error::ModelError;
use serde_json::Value;

/// Path selecting every part of the activity
pub const PARTS_PATH: &str = "$..parts";

/// Path selecting the single part with the given id
#[must_use]
pub fn part_by_id_path(part_id: &str) -> String {
    format!("$..parts[?(@.id=='{part_id}')]")
}

/// The part with the given id
///
/// # Errors
/// [`ModelError::EntityNotFound`] if the document has no such part.
pub fn get_part_by_id(doc: &Value, part_id: &str) -> Result<Value, ModelError> {
    scribe_doc::find(doc, &part_by_id_path(part_id))?
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::not_found("part", part_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_part_across_nesting() {
        let doc = json!({
            "authoring": { "parts": [ { "id": "p1", "hints": [] }, { "id": "p2", "hints": [] } ] }
        });
        assert_eq!(get_part_by_id(&doc, "p2").unwrap()["id"], "p2");
    }

    #[test]
    fn missing_part_is_a_data_integrity_error() {
        let doc = json!({ "authoring": { "parts": [] } });
        assert!(get_part_by_id(&doc, "p1").is_err());
    }
}
