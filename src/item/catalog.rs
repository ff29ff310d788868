use std::collections::HashMap;

use log::warn;

use super::definition::Item;
use crate::inventory::InventoryError;

/// Registry of every item the game knows about
///
/// Starting placements refer to items by id; the catalog resolves those
/// ids to the actual `Item` values that get cloned into slots.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Item>,
}

impl ItemCatalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        ItemCatalog {
            items: HashMap::new(),
        }
    }

    /// Creates a catalog holding the built-in starter items
    ///
    /// A starter item that fails to register is logged and left out.
    pub fn starter() -> Self {
        let mut catalog = Self::new();
        for item in Self::starter_items() {
            if let Err(e) = catalog.register(item) {
                warn!("Skipping starter item: {}", e);
            }
        }
        catalog
    }

    /// Builds a catalog from a list of items, rejecting duplicate ids
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, InventoryError> {
        let mut catalog = Self::new();
        for item in items {
            catalog.register(item)?;
        }
        Ok(catalog)
    }

    /// Registers a new item
    ///
    /// Returns error if an item with this ID already exists.
    pub fn register(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.items.contains_key(item.id()) {
            return Err(InventoryError::DuplicateItem(item.id().to_string()));
        }

        self.items.insert(item.id().to_string(), item);
        Ok(())
    }

    /// Gets an item by ID
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all registered items in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// The five sample items the prototype ships with
    pub fn starter_items() -> Vec<Item> {
        vec![
            Item::new("Sword", "sword_001"),
            Item::new("Shield", "shield_001"),
            Item::new("Potion", "potion_001"),
            Item::new("Key", "key_001"),
            Item::new("Scroll", "scroll_001"),
        ]
    }
}
