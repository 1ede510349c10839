//! Operation and undo-descriptor values
//!
//! Every edit to a document is expressed as a small tagged [`Operation`]
//! value rather than a hand-written tree walk. Operations carry their path
//! as a string and are parsed when applied, so constructing one never
//! fails; a malformed path surfaces from [`apply`](crate::engine::apply).
//!
//! Destructive edits synthesize their own inverse at the moment of the
//! edit: an [`Undoable`] is a label plus the operations that reverse it.
//! It is an explicit value (serializable, replayable), not a closure over
//! captured state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single path-addressed operation against a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Return every value matched by `path`, flattened
    Find {
        /// Path expression selecting the values
        path: String,
    },
    /// Insert `item` into every sequence matched by `path`
    Insert {
        /// Path expression selecting target sequences
        path: String,
        /// Value to insert (deep copy, owned by the operation)
        item: Value,
        /// Position; `None` or out of range appends
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<i64>,
    },
    /// Replace every value matched by `path` wholesale with `item`
    Replace {
        /// Path expression selecting the values to replace
        path: String,
        /// Replacement value
        item: Value,
    },
    /// Re-evaluate `path` + `predicate` and assign the result at `path`
    ///
    /// This is the "keep only items satisfying a predicate" primitive:
    /// the predicate is itself a path fragment such as `[?(@.id!='c1')]`.
    Filter {
        /// Path expression selecting the sequences to overwrite
        path: String,
        /// Relative path fragment encoding the predicate
        predicate: String,
    },
}

impl Operation {
    /// A find operation
    #[inline]
    #[must_use]
    pub fn find(path: impl Into<String>) -> Self {
        Self::Find { path: path.into() }
    }

    /// An insert that appends
    #[inline]
    #[must_use]
    pub fn insert(path: impl Into<String>, item: Value) -> Self {
        Self::Insert {
            path: path.into(),
            item,
            index: None,
        }
    }

    /// An insert at a specific position (out of range appends)
    #[inline]
    #[must_use]
    pub fn insert_at(path: impl Into<String>, item: Value, index: i64) -> Self {
        Self::Insert {
            path: path.into(),
            item,
            index: Some(index),
        }
    }

    /// A wholesale replacement
    #[inline]
    #[must_use]
    pub fn replace(path: impl Into<String>, item: Value) -> Self {
        Self::Replace {
            path: path.into(),
            item,
        }
    }

    /// A filter assignment
    #[inline]
    #[must_use]
    pub fn filter(path: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self::Filter {
            path: path.into(),
            predicate: predicate.into(),
        }
    }

    /// The operation's path expression, unparsed
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Find { path }
            | Self::Insert { path, .. }
            | Self::Replace { path, .. }
            | Self::Filter { path, .. } => path,
        }
    }
}

/// A reversible edit: a human-readable label plus the inverse operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Undoable {
    /// Label shown in undo UI, e.g. `"Removed a hint"`
    pub label: String,
    /// Operations that reverse the edit, applied in order
    pub operations: Vec<Operation>,
}

/// Build an [`Undoable`] from a label and its inverse operations
#[inline]
#[must_use]
pub fn make_undoable(label: impl Into<String>, operations: Vec<Operation>) -> Undoable {
    Undoable {
        label: label.into(),
        operations,
    }
}
