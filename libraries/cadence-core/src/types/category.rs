/// Browse category type
use serde::{Deserialize, Serialize};

/// Genre tile shown on the home and search screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Gradient style token for the tile
    pub color: String,
}

impl Category {
    /// Create a category
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}
