//! Screen-Space GUI System
//!
//! The inventory screen and everything it needs to reach the display.
//!
//! # Architecture
//!
//! - [`InventoryUI`] reads the inventory and produces a list of
//!   [`DrawCommand`]s, and maps clicks back to slots through the
//!   precomputed [`SlotGrid`].
//! - [`InventoryView`] implementations put a draw list on screen. The SDL2
//!   view (`sdl` feature) is the real one; tests record frames instead.
//!
//! # Example Usage
//!
//! ```ignore
//! let ui = InventoryUI::new(layout, style, 5, 3, 720);
//!
//! // Input
//! ui.handle_mouse_click(mouse_x, mouse_y, &mut inventory);
//!
//! // Render
//! ui.render(&inventory, &mut view)?;
//! ```

pub mod inventory_ui;
pub mod layout;
pub mod style;
pub mod view;

#[cfg(feature = "sdl")]
pub mod sdl_view;

pub use inventory_ui::InventoryUI;
pub use layout::{InventoryLayout, SlotGrid, SlotRect};
pub use style::{InventoryStyle, Rgb};
pub use view::{DrawCommand, InventoryView, TextSize};

#[cfg(feature = "sdl")]
pub use sdl_view::SdlInventoryView;
