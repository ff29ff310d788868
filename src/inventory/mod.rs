// Inventory module
//
// This module provides the grid inventory for Voidfallen, including:
// - Slot storage addressed by (row, col) with a selection cursor
// - Error type for rejected placements and catalog lookups
// - Seeding of starting items from the catalog

pub mod error;
pub mod inventory;
pub mod seed;

// Re-export main types
pub use error::InventoryError;
pub use inventory::{Coordinate, Inventory};
pub use seed::{seed_inventory, StartingItem};
