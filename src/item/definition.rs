use serde::{Serialize, Deserialize};

/// A single item that can occupy an inventory slot
///
/// Items are plain values: once built they are never mutated, and the
/// slot holding one owns it outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name shown in UI
    name: String,

    /// Unique identifier (used for catalog lookups)
    id: String,

    /// Path to the item icon, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_path: Option<String>,
}

impl Item {
    /// Creates a new item without an icon
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            id: id.into(),
            icon_path: None,
        }
    }

    /// Creates a new item that renders with the given icon
    pub fn with_icon(
        name: impl Into<String>,
        id: impl Into<String>,
        icon_path: impl Into<String>,
    ) -> Self {
        Item {
            name: name.into(),
            id: id.into(),
            icon_path: Some(icon_path.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_deref()
    }

    /// Short label drawn in place of a missing icon (first three characters)
    pub fn abbreviation(&self) -> String {
        self.name.chars().take(3).collect()
    }
}
