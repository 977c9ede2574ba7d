//! Flattens collection items into rows of display strings.
//!
//! Row 0 is the header: [`SLUG_HEADER`] followed by the names of the
//! supported fields in schema order. Every following row is one item: its
//! slug, then one cell per supported field in header order, so every row
//! has the header's length.

use crate::{CollectionItem, Field};

/// A single row of display cells.
pub type Columns = Vec<String>;

/// Header row followed by one row per item.
pub type Rows = Vec<Columns>;

/// Name of the leading column holding each item's slug.
pub const SLUG_HEADER: &str = "Slug";

/// Fields that can be projected, in schema order.
pub fn supported_fields(fields: &[Field]) -> Vec<&Field> {
    fields.iter().filter(|f| f.is_supported()).collect()
}

/// Header row for `fields`: `"Slug"` then every supported field name.
pub fn header(fields: &[Field]) -> Columns {
    let supported = supported_fields(fields);
    header_of(&supported)
}

fn header_of(supported: &[&Field]) -> Columns {
    let mut columns = Vec::with_capacity(supported.len() + 1);
    columns.push(SLUG_HEADER.to_owned());
    columns.extend(supported.iter().map(|f| f.name.clone()));
    columns
}

fn row_of(supported: &[&Field], item: &CollectionItem) -> Columns {
    let mut columns = Vec::with_capacity(supported.len() + 1);
    columns.push(item.slug.clone());
    columns.extend(
        supported
            .iter()
            .map(|f| item.value(&f.id).map(|v| v.to_cell()).unwrap_or_default()),
    );
    columns
}

/// Projects `items` into a header row plus one row per item.
pub fn project(fields: &[Field], items: &[CollectionItem]) -> Rows {
    let supported = supported_fields(fields);

    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(header_of(&supported));
    rows.extend(items.iter().map(|item| row_of(&supported, item)));
    rows
}

/// Projects a single item into its header and value rows.
pub fn project_item(fields: &[Field], item: &CollectionItem) -> ProjectedItem {
    let supported = supported_fields(fields);
    ProjectedItem {
        slug: item.slug.clone(),
        columns: header_of(&supported),
        values: row_of(&supported, item),
    }
}

/// Header and values of one projected item, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedItem {
    pub slug: String,
    pub columns: Columns,
    pub values: Columns,
}

impl ProjectedItem {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column name and cell value at `index`.
    pub fn cell(&self, index: usize) -> Option<(&str, &str)> {
        Some((self.columns.get(index)?.as_str(), self.values.get(index)?.as_str()))
    }

    /// Index of the first column named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
