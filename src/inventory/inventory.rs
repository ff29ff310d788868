use std::fmt;

use crate::item::Item;
use super::error::InventoryError;
use serde::{Serialize, Deserialize};

/// A grid cell address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid inventory with a selection cursor
///
/// Slots are stored row-major in a flat vector (`row * width + col`), so
/// every lookup is a bounds check plus one index. Out-of-bounds requests
/// never touch the storage.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Slots that can hold an item (None = empty)
    slots: Vec<Option<Item>>,

    /// Number of columns
    width: usize,

    /// Number of rows
    height: usize,

    /// Currently highlighted slot (may be empty)
    selected: Option<Coordinate>,
}

impl Inventory {
    /// Largest number of slots a grid may have
    pub const MAX_SLOTS: usize = 65_536;

    /// Creates a new empty `width` x `height` inventory
    ///
    /// # Panics
    ///
    /// Panics if `width * height` exceeds [`Inventory::MAX_SLOTS`]. Use
    /// [`Inventory::try_new`] for dimensions that come from outside.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(inventory) => inventory,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a new empty inventory, rejecting grids above `MAX_SLOTS`
    pub fn try_new(width: usize, height: usize) -> Result<Self, InventoryError> {
        let capacity = width
            .checked_mul(height)
            .filter(|&slots| slots <= Self::MAX_SLOTS)
            .ok_or(InventoryError::GridTooLarge { width, height })?;

        Ok(Inventory {
            slots: vec![None; capacity],
            width,
            height,
            selected: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the coordinate lies inside the grid
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.width + coord.col)
        } else {
            None
        }
    }

    fn coordinate_of(&self, index: usize) -> Coordinate {
        Coordinate::new(index / self.width, index % self.width)
    }

    /// Places an item in an empty in-bounds slot
    ///
    /// Never overwrites: an occupied slot leaves the existing item in place.
    pub fn try_add_item(&mut self, item: Item, coord: Coordinate) -> Result<(), InventoryError> {
        let index = self.index_of(coord)
            .ok_or(InventoryError::OutOfBounds(coord))?;

        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(InventoryError::SlotOccupied(coord));
        }

        *slot = Some(item);
        Ok(())
    }

    /// Adds an item at `(row, col)`, returning false if it was a no-op
    pub fn add_item(&mut self, item: Item, row: usize, col: usize) -> bool {
        self.try_add_item(item, Coordinate::new(row, col)).is_ok()
    }

    /// Removes and returns the item at `(row, col)`
    ///
    /// Empty and out-of-bounds slots both yield `None`.
    pub fn remove_item(&mut self, row: usize, col: usize) -> Option<Item> {
        let index = self.index_of(Coordinate::new(row, col))?;
        self.slots[index].take()
    }

    /// Looks up the item at `(row, col)`
    pub fn get_item(&self, row: usize, col: usize) -> Option<&Item> {
        let index = self.index_of(Coordinate::new(row, col))?;
        self.slots[index].as_ref()
    }

    /// Moves the selection cursor; empty slots are valid targets
    pub fn select_slot(&mut self, row: usize, col: usize) -> bool {
        let coord = Coordinate::new(row, col);
        if !self.contains(coord) {
            return false;
        }

        self.selected = Some(coord);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_slot(&self) -> Option<Coordinate> {
        self.selected
    }

    /// Item under the selection cursor, if the selected slot is occupied
    pub fn selected_item(&self) -> Option<&Item> {
        let coord = self.selected?;
        self.get_item(coord.row, coord.col)
    }

    /// Returns every occupied slot with its coordinate
    ///
    /// Row-major order falls out of the storage layout; callers should not
    /// depend on it.
    pub fn get_all_items(&self) -> Vec<(Coordinate, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|item| (self.coordinate_of(index), item))
            })
            .collect()
    }

    /// Number of occupied slots
    pub fn get_item_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn get_max_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Returns true if all slots are occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }
}
