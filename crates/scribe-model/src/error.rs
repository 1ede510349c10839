//! Error types for the document overlay
//!
//! Entity-not-found conditions here are data-integrity errors, not
//! recoverable "not found" results: callers are responsible for ensuring
//! the entity exists before asking for it, so absence means the document
//! violated an invariant.

use scribe_doc::PathError;

/// Errors raised by the ordered-collection overlay
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Entity missing from its collection
    #[error("{noun} not found: '{id}'")]
    EntityNotFound {
        /// What kind of entity ("hint", "choice", "response", "part")
        noun: String,
        /// The id that was looked up
        id: String,
    },

    /// No response with `score == 1` in the part
    #[error("could not find correct response for part '{0}'")]
    MissingCorrectResponse(String),

    /// No response carrying the catch-all rule in the part
    #[error("could not find catch-all response for part '{0}'")]
    MissingCatchAllResponse(String),

    /// No response satisfied the caller's predicate
    #[error("no response matched the given predicate")]
    NoMatchingResponse,

    /// Underlying path engine failure
    #[error(transparent)]
    Path(#[from] PathError),
}

impl ModelError {
    /// Entity-not-found for a noun/id pair
    pub(crate) fn not_found(noun: impl Into<String>, id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            noun: noun.into(),
            id: id.into(),
        }
    }
}
