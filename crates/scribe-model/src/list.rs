//! Generic ordered collections addressed by a path template
//!
//! A [`List`] wraps a path expression that selects one ordered collection
//! of entities (mappings carrying an `id` field) and layers id-based
//! get/add/remove semantics over the path engine. Destructive edits return
//! the [`Undoable`] that reverses them.
//!
//! Paths should select a single collection; a template matching several
//! collections at once makes removal indexes meaningless (the engine's
//! filter primitive assigns one combined result everywhere it matches).

use crate::error::ModelError;
use scribe_doc::{make_undoable, Operation, Undoable};
use serde_json::Value;

/// An ordered entity collection at a path
#[derive(Debug, Clone)]
pub struct List {
    path: String,
    noun: &'static str,
}

/// The entity's `id` field, as a comparable string
#[must_use]
pub fn entity_id(entity: &Value) -> Option<String> {
    match entity.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

impl List {
    /// A list of generic items
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self::labeled(path, "item")
    }

    /// A list whose undo labels name the entity kind
    #[inline]
    #[must_use]
    pub fn labeled(path: impl Into<String>, noun: &'static str) -> Self {
        Self {
            path: path.into(),
            noun,
        }
    }

    /// The path template this list addresses
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All entities, in document order
    ///
    /// # Errors
    /// [`ModelError::Path`] if the template is malformed.
    pub fn get_all(&self, doc: &Value) -> Result<Vec<Value>, ModelError> {
        Ok(scribe_doc::find(doc, &self.path)?)
    }

    /// The entity with the given id
    ///
    /// # Errors
    /// [`ModelError::EntityNotFound`] if absent; callers guarantee
    /// existence before calling.
    pub fn get_one(&self, doc: &Value, id: &str) -> Result<Value, ModelError> {
        self.get_all(doc)?
            .into_iter()
            .find(|e| entity_id(e).as_deref() == Some(id))
            .ok_or_else(|| ModelError::not_found(self.noun, id))
    }

    /// Append an entity
    ///
    /// # Errors
    /// [`ModelError::Path`] if the template is malformed.
    pub fn add_one(&self, doc: &mut Value, entity: Value) -> Result<(), ModelError> {
        scribe_doc::insert(doc, &self.path, &entity, None)?;
        Ok(())
    }

    /// Insert an entity at an index (out of range appends)
    ///
    /// # Errors
    /// [`ModelError::Path`] if the template is malformed.
    pub fn add_one_at(&self, doc: &mut Value, entity: Value, index: i64) -> Result<(), ModelError> {
        scribe_doc::insert(doc, &self.path, &entity, Some(index))?;
        Ok(())
    }

    /// Replace the whole collection (reordering)
    ///
    /// # Errors
    /// [`ModelError::Path`] if the template is malformed.
    pub fn set_all(&self, doc: &mut Value, items: Vec<Value>) -> Result<(), ModelError> {
        scribe_doc::replace(doc, &self.path, &Value::Array(items))?;
        Ok(())
    }

    /// Remove the entity with the given id, returning the inverse edit
    ///
    /// The entity and its pre-removal index are captured before the
    /// removal, so replaying the returned [`Undoable`] restores the
    /// collection in its original order.
    ///
    /// # Errors
    /// [`ModelError::EntityNotFound`] if absent.
    pub fn remove_one(&self, doc: &mut Value, id: &str) -> Result<Undoable, ModelError> {
        let all = self.get_all(doc)?;
        let index = all
            .iter()
            .position(|e| entity_id(e).as_deref() == Some(id))
            .ok_or_else(|| ModelError::not_found(self.noun, id))?;
        // deep copy before the original is detached
        let entity = all[index].clone();

        scribe_doc::filter(doc, &self.path, &format!("[?(@.id!='{id}')]"))?;
        tracing::debug!(noun = self.noun, id, index, "removed entity");

        Ok(make_undoable(
            format!("Removed a {}", self.noun),
            vec![Operation::insert_at(
                self.path.clone(),
                entity,
                i64::try_from(index).unwrap_or(i64::MAX),
            )],
        ))
    }
}
