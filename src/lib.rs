//! Voidfallen: a grid inventory prototype.
//!
//! - `item`: item values and the catalog they are registered in
//! - `inventory`: slot storage, selection cursor and starting items
//! - `gui`: the inventory screen, its layout and the views that draw it
//! - `input_system`: raw input to game actions
//! - `game`: bootstrap and per-frame state
//! - `config`: JSON configuration with defaults for every field

pub mod config;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod inventory;
pub mod item;
pub mod text;

pub use config::GameConfig;
pub use game::Game;
pub use inventory::{Coordinate, Inventory, InventoryError};
pub use item::{Item, ItemCatalog};
