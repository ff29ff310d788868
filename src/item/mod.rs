// Item module
//
// This module provides the item types for Voidfallen:
// - Item values held in inventory slots
// - Item catalog that resolves ids to items at startup

pub mod catalog;
pub mod definition;

pub use catalog::ItemCatalog;
pub use definition::Item;
