use canvasbind_types::CollectionId;
use serde::{Deserialize, Serialize};

/// A CMS collection exposed by the host.
///
/// Only identity lives here; schema and items are fetched separately through
/// the host because they can be large and change independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CollectionId::new(id),
            name: name.into(),
        }
    }
}
