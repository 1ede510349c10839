//! Scribe Activity Model
//!
//! Typed convenience layer over the path engine for the entities an
//! authored activity is built from.
//!
//! # Overview
//!
//! - [`List`]: generic ordered collection addressed by a path template,
//!   with id-based get/add/remove and undo-descriptor generation
//! - [`hints`]: the order-significant hint ladder per part
//! - [`responses`]: scored responses, loud correct/incorrect accessors,
//!   targeted choice associations
//! - [`choices`]: the activity's choice sequence and the correct-ids
//!   association
//! - [`parts`]: part lookup
//!
//! Everything here is built on [`scribe_doc`] operations rather than
//! hand-written tree walks, and destructive edits return the [`scribe_doc::Undoable`]
//! that reverses them. The layer is pure with respect to I/O: callers
//! decide when to apply results and when to record an undo.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod choices;
pub mod error;
pub mod hints;
pub mod list;
pub mod parts;
pub mod responses;

// Re-exports
pub use error::ModelError;
pub use list::{entity_id, List};
pub use parts::get_part_by_id;
pub use responses::{make_response, ResponseMapping};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for model operations
    pub use crate::{entity_id, get_part_by_id, List, ModelError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
