//! Error types for the document engine

/// Errors raised while parsing or applying path expressions
///
/// A path that matches zero locations is *not* an error: mutating
/// operations become no-ops and `find` returns an empty sequence. Only a
/// syntactically invalid expression is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Malformed path expression
    #[error("syntax error at byte {pos} of '{path}': {message}")]
    Syntax {
        /// The offending expression
        path: String,
        /// Byte offset of the failure
        pos: usize,
        /// What the parser expected
        message: String,
    },

    /// Empty path expression
    #[error("empty path expression")]
    Empty,
}

impl PathError {
    /// Create a syntax error for an expression
    pub(crate) fn syntax(path: impl Into<String>, pos: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            pos,
            message: message.into(),
        }
    }
}
