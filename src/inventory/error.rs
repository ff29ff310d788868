use std::fmt;

use super::inventory::Coordinate;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Coordinate lies outside the grid
    OutOfBounds(Coordinate),

    /// Grid has more slots than an inventory may hold
    GridTooLarge { width: usize, height: usize },

    /// Slot already holds an item (no overwrite)
    SlotOccupied(Coordinate),

    /// Item ID doesn't exist in the catalog
    UnknownItem(String),

    /// Item ID registered twice
    DuplicateItem(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryError::OutOfBounds(coord) => {
                write!(f, "Slot {} is out of bounds", coord)
            }
            InventoryError::GridTooLarge { width, height } => {
                write!(f, "Grid {}x{} has too many slots", width, height)
            }
            InventoryError::SlotOccupied(coord) => {
                write!(f, "Slot {} is occupied", coord)
            }
            InventoryError::UnknownItem(id) => {
                write!(f, "Unknown item ID: {}", id)
            }
            InventoryError::DuplicateItem(id) => {
                write!(f, "Item '{}' already registered", id)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<InventoryError> for String {
    fn from(error: InventoryError) -> Self {
        error.to_string()
    }
}
