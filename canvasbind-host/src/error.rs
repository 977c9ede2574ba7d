//! Error types for host calls and the plugin session.

use canvasbind_types::{CollectionId, NodeId};
use thiserror::Error;

/// Result type for host calls.
pub type HostResult<T> = Result<T, HostError>;

/// Errors reported by a [`CanvasHost`](crate::CanvasHost).
#[derive(Debug, Error)]
pub enum HostError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("collection not found: {0}")]
    CollectionNotFound(CollectionId),

    #[error("host call '{operation}' failed: {message}")]
    CallFailed {
        operation: &'static str,
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while the user picks a collection, item or column.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("unknown collection: {0}")]
    UnknownCollection(CollectionId),

    #[error("no item with slug '{0}'")]
    UnknownSlug(String),

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column index {index} out of range ({len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("no collection selected")]
    NoCollection,

    #[error("no item selected")]
    NoItem,
}
