use log::{debug, warn};
use serde::{Serialize, Deserialize};

use super::error::InventoryError;
use super::inventory::{Coordinate, Inventory};
use crate::item::ItemCatalog;

/// Where a catalog item goes when the game starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingItem {
    pub item_id: String,
    pub row: usize,
    pub col: usize,
}

impl StartingItem {
    pub fn new(item_id: impl Into<String>, row: usize, col: usize) -> Self {
        StartingItem {
            item_id: item_id.into(),
            row,
            col,
        }
    }

    /// Sword, Shield and Potion across the top row, Key and Scroll below
    pub fn defaults() -> Vec<StartingItem> {
        vec![
            StartingItem::new("sword_001", 0, 0),
            StartingItem::new("shield_001", 0, 1),
            StartingItem::new("potion_001", 0, 2),
            StartingItem::new("key_001", 1, 0),
            StartingItem::new("scroll_001", 1, 1),
        ]
    }
}

/// Places catalog items into the inventory
///
/// Unknown ids and rejected placements are logged and skipped. Returns the
/// number of items actually placed.
pub fn seed_inventory(
    inventory: &mut Inventory,
    catalog: &ItemCatalog,
    placements: &[StartingItem],
) -> usize {
    let mut placed = 0;

    for placement in placements {
        let result = catalog
            .get(&placement.item_id)
            .ok_or_else(|| InventoryError::UnknownItem(placement.item_id.clone()))
            .and_then(|item| {
                inventory.try_add_item(item.clone(), Coordinate::new(placement.row, placement.col))
            });

        match result {
            Ok(()) => {
                debug!("Seeded {} at {}", placement.item_id, Coordinate::new(placement.row, placement.col));
                placed += 1;
            }
            Err(e) => warn!("Skipping starting item {}: {}", placement.item_id, e),
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults() {
        let mut inventory = Inventory::new(5, 3);
        let placed = seed_inventory(&mut inventory, &ItemCatalog::starter(), &StartingItem::defaults());

        assert_eq!(placed, 5);
        assert_eq!(inventory.get_item_count(), 5);
        assert_eq!(inventory.get_item(0, 0).map(|i| i.name()), Some("Sword"));
        assert_eq!(inventory.get_item(1, 1).map(|i| i.name()), Some("Scroll"));
        assert_eq!(inventory.get_item(2, 0), None);
    }

    #[test]
    fn test_seed_skips_bad_placements() {
        let mut inventory = Inventory::new(5, 3);
        let placements = vec![
            StartingItem::new("sword_001", 0, 0),
            StartingItem::new("shield_001", 0, 0),  // occupied
            StartingItem::new("potion_001", 7, 0),  // out of bounds
            StartingItem::new("bow_001", 1, 1),     // not in catalog
            StartingItem::new("key_001", 2, 4),
        ];

        let placed = seed_inventory(&mut inventory, &ItemCatalog::starter(), &placements);

        assert_eq!(placed, 2);
        assert_eq!(inventory.get_item(0, 0).map(|i| i.id()), Some("sword_001"));
        assert_eq!(inventory.get_item(2, 4).map(|i| i.id()), Some("key_001"));
        assert_eq!(inventory.get_item(1, 1), None);
    }
}
