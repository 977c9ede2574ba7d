//! Identifier types handed out by the host.
//!
//! The host owns all identifiers and treats them as opaque strings, so each
//! one is a transparent newtype over `String`. Empty identifiers are rejected
//! on parse.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a host-provided identifier without validation.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parses an identifier, rejecting the empty string.
            pub fn parse(s: &str) -> crate::Result<Self> {
                if s.is_empty() {
                    return Err(crate::Error::EmptyId($label));
                }
                Ok(Self(s.to_owned()))
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a node on the design canvas.
    NodeId,
    "node"
);

string_id!(
    /// Identifier of a CMS collection.
    CollectionId,
    "collection"
);

string_id!(
    /// Identifier of a field (column) within a collection schema.
    FieldId,
    "field"
);

string_id!(
    /// Identifier of a single collection item.
    ItemId,
    "item"
);

impl NodeId {
    /// Mints a fresh random node ID for nodes loaded without one.
    /// Real hosts assign their own.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
