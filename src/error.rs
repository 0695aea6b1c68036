//! Error types for styling, serialization and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = DotError> = std::result::Result<T, E>;

/// Errors that can occur while populating, saving or rendering a [`StyleStore`].
///
/// Failures of the external rendering process are deliberately absent: the
/// renderer only guarantees that the command line was issued.
///
/// [`StyleStore`]: crate::StyleStore
#[derive(Debug, Error)]
pub enum DotError {
    /// An edge was styled before its head node was declared.
    #[error("invalid edge {head} -> {tail}: head node {head} was never declared")]
    UndeclaredNode { head: String, tail: String },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration or store document could not be decoded.
    #[error("Malformed JSON document: {0}")]
    Config(#[from] serde_json::Error),

    /// A graph kind other than `digraph`/`graph` was requested.
    #[error("Unknown graph kind: {0} (expected 'digraph' or 'graph')")]
    InvalidGraphKind(String),

    /// A rendering engine other than `dot`/`neato` was requested.
    #[error("Unknown rendering engine: {0} (expected 'dot' or 'neato')")]
    UnknownEngine(String),
}

impl DotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DotError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error reports an undeclared edge head.
    pub fn is_undeclared_node(&self) -> bool {
        matches!(self, DotError::UndeclaredNode { .. })
    }

    /// Check if this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, DotError::Io { .. })
    }
}
