use canvasbind_types::FieldId;
use serde::{Deserialize, Serialize};

/// A typed column definition within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

impl Field {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: FieldId::new(id),
            name: name.into(),
            kind,
        }
    }

    /// Whether this field can be projected into a row cell.
    pub fn is_supported(&self) -> bool {
        self.kind.is_supported()
    }
}

/// The closed set of field types the host can report.
///
/// Unknown type tags fail deserialization instead of mapping to a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Image,
    File,
    CollectionReference,
    FormattedText,
    MultiCollectionReference,
    Enum,
    Color,
    String,
    Boolean,
    Date,
    Link,
    Number,
    /// Visual separator in the CMS editor; carries no data.
    Divider,
    /// A field type the host cannot expose to plugins.
    Unsupported,
}

impl FieldKind {
    /// Whether values of this kind can be projected into a row cell.
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Image
            | Self::File
            | Self::CollectionReference
            | Self::FormattedText
            | Self::MultiCollectionReference
            | Self::Enum
            | Self::Color
            | Self::String
            | Self::Boolean
            | Self::Date
            | Self::Link
            | Self::Number => true,
            Self::Divider | Self::Unsupported => false,
        }
    }
}
