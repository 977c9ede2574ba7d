//! Collection data model for canvasbind.
//!
//! Defines the types that describe CMS collections as the host reports them:
//! - [`Collection`]: id and display name of a collection
//! - [`Field`] / [`FieldKind`]: a typed column definition
//! - [`CollectionItem`] / [`FieldValue`]: one record and its typed cells
//! - [`project`]: flattens items into display rows (`"Slug"` header first)
//!
//! All types deserialize from the host's camelCase JSON.

mod collection;
mod item;
mod projection;
mod schema;

pub use collection::Collection;
pub use item::{Asset, CollectionItem, FieldValue};
pub use projection::{header, project, project_item, supported_fields, Columns, ProjectedItem, Rows, SLUG_HEADER};
pub use schema::{Field, FieldKind};
