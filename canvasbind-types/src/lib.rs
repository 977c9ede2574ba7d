//! Core type definitions for canvasbind.
//!
//! This crate defines the small, host-agnostic types every other crate
//! depends on:
//! - String identifiers for canvas nodes, collections, fields and items
//! - Color values as the host reports them (plain CSS string or a named
//!   light/dark color style)
//!
//! Collection schemas, record values and canvas node snapshots live in
//! `canvasbind-model` and `canvasbind-host`.

mod color;
mod ids;

pub use color::{ColorStyle, ColorValue};
pub use ids::{CollectionId, FieldId, ItemId, NodeId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty {0} identifier")]
    EmptyId(&'static str),
}
