//! Colors and stroke widths for the inventory screen.

use serde::{Serialize, Deserialize};

/// An opaque RGB color, written as `[r, g, b]` in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[cfg(feature = "sdl")]
impl From<Rgb> for sdl2::pixels::Color {
    fn from(color: Rgb) -> Self {
        sdl2::pixels::Color::RGB(color.0, color.1, color.2)
    }
}

/// Represents the visual style of the inventory screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryStyle {
    /// Screen fill when no background image is available
    pub background_color: Rgb,
    pub slot_color: Rgb,
    pub border_color: Rgb,
    pub border_width: u32,
    /// Selection outline when no selection image is available
    pub selected_border_color: Rgb,
    pub selected_border_width: u32,
    pub label_color: Rgb,
    pub title_color: Rgb,
    pub count_color: Rgb,
    pub selected_info_color: Rgb,
}

impl Default for InventoryStyle {
    fn default() -> Self {
        InventoryStyle {
            background_color: Rgb(30, 30, 30),
            slot_color: Rgb(50, 50, 50),
            border_color: Rgb(100, 100, 100),
            border_width: 2,
            selected_border_color: Rgb(255, 200, 0),
            selected_border_width: 3,
            label_color: Rgb(200, 200, 200),
            title_color: Rgb::WHITE,
            count_color: Rgb(200, 200, 200),
            selected_info_color: Rgb(100, 200, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_style_keeps_defaults() {
        let style: InventoryStyle =
            serde_json::from_str(r#"{"slot_color":[10,20,30]}"#).unwrap();

        assert_eq!(style.slot_color, Rgb(10, 20, 30));
        assert_eq!(style.border_color, InventoryStyle::default().border_color);
        assert_eq!(style.selected_border_width, 3);
    }
}
