//! Inventory Screen
//!
//! Turns the inventory into a draw list each frame and maps mouse clicks
//! back to slots. Nothing here touches the rendering engine; an
//! [`InventoryView`] does the actual drawing.

use log::debug;

use crate::inventory::{Coordinate, Inventory};

use super::layout::{InventoryLayout, SlotGrid};
use super::style::InventoryStyle;
use super::view::{DrawCommand, InventoryView, TextSize};

/// Presents an inventory grid and routes clicks into it.
pub struct InventoryUI {
    layout: InventoryLayout,
    style: InventoryStyle,
    grid: SlotGrid,
    screen_height: u32,
}

impl InventoryUI {
    /// Creates a screen for a `grid_width` x `grid_height` inventory.
    pub fn new(
        layout: InventoryLayout,
        style: InventoryStyle,
        grid_width: usize,
        grid_height: usize,
        screen_height: u32,
    ) -> Self {
        let grid = SlotGrid::new(&layout, grid_width, grid_height);
        InventoryUI {
            layout,
            style,
            grid,
            screen_height,
        }
    }

    /// Builds the draw list for the current inventory state.
    pub fn draw(&self, inventory: &Inventory) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Background {
            color: self.style.background_color,
        }];

        self.draw_grid(inventory, &mut commands);
        self.draw_items(inventory, &mut commands);
        self.draw_title(inventory, &mut commands);

        commands
    }

    /// Draws the frame and hands it to a view.
    pub fn render(&self, inventory: &Inventory, view: &mut dyn InventoryView) -> Result<(), String> {
        view.render(&self.draw(inventory))
    }

    fn draw_grid(&self, inventory: &Inventory, commands: &mut Vec<DrawCommand>) {
        let selected = inventory.selected_slot();

        for &(coord, rect) in self.grid.iter() {
            let command = if selected == Some(coord) {
                DrawCommand::Slot {
                    coord,
                    rect,
                    selected: true,
                    fill: None,
                    border: self.style.selected_border_color,
                    border_width: self.style.selected_border_width,
                }
            } else {
                DrawCommand::Slot {
                    coord,
                    rect,
                    selected: false,
                    fill: Some(self.style.slot_color),
                    border: self.style.border_color,
                    border_width: self.style.border_width,
                }
            };
            commands.push(command);
        }
    }

    fn draw_items(&self, inventory: &Inventory, commands: &mut Vec<DrawCommand>) {
        for (coord, item) in inventory.get_all_items() {
            commands.push(DrawCommand::Item {
                coord,
                icon_rect: self.layout.icon_rect(coord),
                icon_path: item.icon_path().map(str::to_string),
                label: item.abbreviation(),
                label_color: self.style.label_color,
            });
        }
    }

    fn draw_title(&self, inventory: &Inventory, commands: &mut Vec<DrawCommand>) {
        let x = self.layout.origin_x;

        commands.push(DrawCommand::Text {
            text: "INVENTORY".to_string(),
            x,
            y: self.layout.title_y,
            color: self.style.title_color,
            size: TextSize::Large,
        });

        commands.push(DrawCommand::Text {
            text: format!("Items: {}/{}", inventory.get_item_count(), inventory.get_max_slots()),
            x,
            y: self.layout.count_y,
            color: self.style.count_color,
            size: TextSize::Small,
        });

        if let Some(item) = inventory.selected_item() {
            commands.push(DrawCommand::Text {
                text: format!("Selected: {}", item.name()),
                x,
                y: self.screen_height as i32 - self.layout.selected_info_margin,
                color: self.style.selected_info_color,
                size: TextSize::Small,
            });
        }
    }

    /// Returns the slot at a given mouse position, or None if not over a slot
    pub fn get_slot_at_mouse_pos(&self, mouse_x: i32, mouse_y: i32) -> Option<Coordinate> {
        self.grid.hit_test(mouse_x, mouse_y)
    }

    /// Selects the slot under the mouse; clicks outside the grid do nothing.
    pub fn handle_mouse_click(
        &self,
        mouse_x: i32,
        mouse_y: i32,
        inventory: &mut Inventory,
    ) -> Option<Coordinate> {
        let coord = self.get_slot_at_mouse_pos(mouse_x, mouse_y)?;

        if inventory.select_slot(coord.row, coord.col) {
            debug!("Selected slot {}", coord);
            Some(coord)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::style::Rgb;
    use crate::item::Item;

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<Vec<DrawCommand>>,
    }

    impl InventoryView for RecordingView {
        fn render(&mut self, commands: &[DrawCommand]) -> Result<(), String> {
            self.frames.push(commands.to_vec());
            Ok(())
        }
    }

    fn screen() -> InventoryUI {
        InventoryUI::new(InventoryLayout::default(), InventoryStyle::default(), 5, 3, 720)
    }

    fn texts(commands: &[DrawCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_inventory_frame() {
        let inventory = Inventory::new(5, 3);
        let commands = screen().draw(&inventory);

        assert_eq!(commands[0], DrawCommand::Background { color: Rgb(30, 30, 30) });

        let slots = commands.iter().filter(|c| matches!(c, DrawCommand::Slot { .. })).count();
        assert_eq!(slots, 15);
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Item { .. })));

        assert_eq!(texts(&commands), vec!["INVENTORY", "Items: 0/15"]);
    }

    #[test]
    fn test_selected_slot_is_highlighted() {
        let mut inventory = Inventory::new(5, 3);
        inventory.select_slot(1, 3);

        let commands = screen().draw(&inventory);
        let selected: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Slot { coord, selected: true, border, border_width, fill, .. } => {
                    Some((*coord, *border, *border_width, *fill))
                }
                _ => None,
            })
            .collect();

        assert_eq!(selected, vec![(Coordinate::new(1, 3), Rgb(255, 200, 0), 3, None)]);

        // Empty selection shows no "Selected:" line
        assert_eq!(texts(&commands).len(), 2);
    }

    #[test]
    fn test_items_and_selected_info() {
        let mut inventory = Inventory::new(5, 3);
        inventory.add_item(Item::new("Sword", "sword_001"), 0, 0);
        inventory.add_item(Item::with_icon("Potion", "potion_001", "assets/items/potion.png"), 1, 2);
        inventory.select_slot(0, 0);

        let commands = screen().draw(&inventory);

        assert!(commands.contains(&DrawCommand::Item {
            coord: Coordinate::new(0, 0),
            icon_rect: InventoryLayout::default().icon_rect(Coordinate::new(0, 0)),
            icon_path: None,
            label: "Swo".to_string(),
            label_color: Rgb(200, 200, 200),
        }));
        assert!(commands.iter().any(|c| matches!(
            c,
            DrawCommand::Item { icon_path: Some(path), label, .. }
                if path == "assets/items/potion.png" && label == "Pot"
        )));

        assert!(commands.contains(&DrawCommand::Text {
            text: "Selected: Sword".to_string(),
            x: 100,
            y: 670,
            color: Rgb(100, 200, 255),
            size: TextSize::Small,
        }));
        assert!(texts(&commands).contains(&"Items: 2/15".to_string()));
    }

    #[test]
    fn test_items_draw_after_slots() {
        let mut inventory = Inventory::new(5, 3);
        inventory.add_item(Item::new("Key", "key_001"), 2, 4);

        let commands = screen().draw(&inventory);
        let last_slot = commands.iter().rposition(|c| matches!(c, DrawCommand::Slot { .. })).unwrap();
        let first_item = commands.iter().position(|c| matches!(c, DrawCommand::Item { .. })).unwrap();
        assert!(first_item > last_slot);
    }

    #[test]
    fn test_click_selects_slot() {
        let ui = screen();
        let mut inventory = Inventory::new(5, 3);

        assert_eq!(ui.handle_mouse_click(340, 240, &mut inventory), Some(Coordinate::new(1, 2)));
        assert_eq!(inventory.selected_slot(), Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_click_outside_grid_keeps_selection() {
        let ui = screen();
        let mut inventory = Inventory::new(5, 3);
        inventory.select_slot(0, 0);

        assert_eq!(ui.handle_mouse_click(10, 10, &mut inventory), None);
        assert_eq!(ui.handle_mouse_click(185, 120, &mut inventory), None);
        assert_eq!(inventory.selected_slot(), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_render_hands_frame_to_view() {
        let ui = screen();
        let mut inventory = Inventory::new(5, 3);
        let mut view = RecordingView::default();

        ui.render(&inventory, &mut view).unwrap();
        inventory.add_item(Item::new("Scroll", "scroll_001"), 0, 0);
        ui.render(&inventory, &mut view).unwrap();

        assert_eq!(view.frames.len(), 2);
        assert_eq!(view.frames[1], ui.draw(&inventory));
        assert_ne!(view.frames[0], view.frames[1]);
    }
}
