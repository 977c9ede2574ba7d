use crate::FieldKind;
use canvasbind_types::{ColorValue, FieldId, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub id: ItemId,
    pub slug: String,
    #[serde(default)]
    pub field_data: HashMap<FieldId, FieldValue>,
}

impl CollectionItem {
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            slug: slug.into(),
            field_data: HashMap::new(),
        }
    }

    /// Sets the value of one field, returning the item for chaining.
    #[must_use]
    pub fn with_value(mut self, field_id: impl Into<String>, value: FieldValue) -> Self {
        self.field_data.insert(FieldId::new(field_id), value);
        self
    }

    /// Value stored for `field_id`, if the item carries one.
    pub fn value(&self, field_id: &FieldId) -> Option<&FieldValue> {
        self.field_data.get(field_id)
    }
}

/// A file or image reference stored in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Asset {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
        }
    }
}

/// A typed cell value, tagged with its field type.
///
/// JSON form: `{"type": "string", "value": "Hello"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Image(Option<Asset>),
    File(Option<Asset>),
    CollectionReference(Option<String>),
    FormattedText(Option<String>),
    /// Ids of the referenced items, in order.
    MultiCollectionReference(Vec<String>),
    /// Id of the selected enum case.
    Enum(String),
    Color(Option<ColorValue>),
    String(Option<String>),
    Boolean(Option<bool>),
    /// ISO 8601 date string.
    Date(Option<String>),
    Link(Option<String>),
    Number(Option<f64>),
}

impl FieldValue {
    /// The field type this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Image(_) => FieldKind::Image,
            Self::File(_) => FieldKind::File,
            Self::CollectionReference(_) => FieldKind::CollectionReference,
            Self::FormattedText(_) => FieldKind::FormattedText,
            Self::MultiCollectionReference(_) => FieldKind::MultiCollectionReference,
            Self::Enum(_) => FieldKind::Enum,
            Self::Color(_) => FieldKind::Color,
            Self::String(_) => FieldKind::String,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Date(_) => FieldKind::Date,
            Self::Link(_) => FieldKind::Link,
            Self::Number(_) => FieldKind::Number,
        }
    }

    /// Renders the value as a display cell. Absent values render as `""`.
    pub fn to_cell(&self) -> String {
        match self {
            Self::Image(asset) | Self::File(asset) => {
                asset.as_ref().map(|a| a.url.clone()).unwrap_or_default()
            }
            Self::MultiCollectionReference(ids) => ids.join(","),
            Self::Enum(case) => case.clone(),
            Self::Color(color) => color
                .as_ref()
                .map(|c| c.light().to_owned())
                .unwrap_or_default(),
            Self::CollectionReference(v)
            | Self::FormattedText(v)
            | Self::String(v)
            | Self::Date(v)
            | Self::Link(v) => v.clone().unwrap_or_default(),
            Self::Boolean(v) => v.map(|b| b.to_string()).unwrap_or_default(),
            Self::Number(v) => v.map(format_number).unwrap_or_default(),
        }
    }
}

// Matches JS number-to-string: f64's Display gives the shortest round-trip
// digits in plain decimal, and JS switches to exponent form outside
// [1e-6, 1e21), writing `+` on positive exponents.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_owned()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
