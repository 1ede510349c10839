//! Scribe Document Engine
//!
//! Path-addressed mutation for authored-activity documents.
//!
//! # Overview
//!
//! An authored activity is a deeply nested, loosely-typed tree of mappings
//! and sequences (`serde_json::Value`). Instead of hand-written tree
//! walks, edits are expressed as declarative [`Operation`] values over
//! [`PathExpr`] queries:
//!
//! - **Find**: collect every value a path matches, flattened
//! - **Insert**: add an item to every matched sequence, with index clamping
//! - **Replace**: overwrite every matched value wholesale
//! - **Filter**: re-evaluate a predicate sub-path and assign the result
//!
//! Batches run through [`apply_all`], which snapshots the document on
//! entry and rolls back on the first error. Destructive edits synthesize
//! an [`Undoable`] (a label plus explicit inverse operations), so undo
//! needs no global command log.
//!
//! # Example
//!
//! ```
//! use scribe_doc::{apply_all, find, Operation};
//! use serde_json::json;
//!
//! let mut doc = json!({ "choices": [ { "id": "c1" }, { "id": "c2" } ] });
//! apply_all(&mut doc, &[
//!     Operation::insert("$.choices", json!({ "id": "c3" })),
//!     Operation::filter("$.choices", "[?(@.id!='c1')]"),
//! ]).unwrap();
//!
//! let ids = find(&doc, "$.choices").unwrap();
//! assert_eq!(ids.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod engine;
pub mod error;
pub mod ops;
pub mod path;

// Re-exports
pub use engine::{apply, apply_all, filter, find, insert, replace};
pub use error::PathError;
pub use ops::{make_undoable, Operation, Undoable};
pub use path::{FilterOp, PathExpr, Predicate, Segment};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for document operations
    pub use crate::{apply, apply_all, find, make_undoable, Operation, PathError, Undoable};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
