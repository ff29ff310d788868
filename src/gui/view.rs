//! Engine-neutral draw list consumed by inventory views.

use crate::inventory::Coordinate;

use super::layout::SlotRect;
use super::style::Rgb;

/// Font size for screen text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Large,
}

impl TextSize {
    /// Bitmap font scale factor
    pub fn scale(self) -> u32 {
        match self {
            TextSize::Small => 2,
            TextSize::Large => 3,
        }
    }
}

/// One drawing step of an inventory frame
///
/// Commands are ordered back to front.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Cover the whole screen (background image if the view has one)
    Background { color: Rgb },

    /// An empty slot frame; `selected` slots may use the selection image
    Slot {
        coord: Coordinate,
        rect: SlotRect,
        selected: bool,
        fill: Option<Rgb>,
        border: Rgb,
        border_width: u32,
    },

    /// An item in a slot: icon if the view could load it, label otherwise
    Item {
        coord: Coordinate,
        icon_rect: SlotRect,
        icon_path: Option<String>,
        label: String,
        label_color: Rgb,
    },

    /// Screen text anchored at its top-left corner
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Rgb,
        size: TextSize,
    },
}

/// Something that can put a draw list on screen
pub trait InventoryView {
    fn render(&mut self, commands: &[DrawCommand]) -> Result<(), String>;
}
