//! Game state and bootstrap
//!
//! `Game` owns the inventory and the screen that presents it. The SDL2
//! front end feeds it actions and renders `frame()`; tests drive it the
//! same way without a window.

use log::{info, warn};

use crate::config::{ConfigError, GameConfig};
use crate::gui::{DrawCommand, InventoryUI, InventoryView};
use crate::input_system::GameAction;
use crate::inventory::{seed_inventory, Inventory};

pub struct Game {
    inventory: Inventory,
    inventory_ui: InventoryUI,
    running: bool,
}

impl Game {
    /// Builds the inventory, seeds the starting items and sets the cursor
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut inventory = Inventory::try_new(config.inventory.grid_width, config.inventory.grid_height)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let catalog = config.catalog()?;
        let placed = seed_inventory(&mut inventory, &catalog, &config.starting_items);
        info!(
            "Inventory {}x{} seeded with {} item(s)",
            inventory.width(),
            inventory.height(),
            placed
        );

        if let Some((row, col)) = config.inventory.initial_selection {
            if !inventory.select_slot(row, col) {
                warn!("Initial selection ({}, {}) is outside the grid", row, col);
            }
        }

        let inventory_ui = InventoryUI::new(
            config.layout.clone(),
            config.style.clone(),
            inventory.width(),
            inventory.height(),
            config.window.height,
        );

        Ok(Game {
            inventory,
            inventory_ui,
            running: true,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_action(&mut self, action: GameAction) {
        match action {
            GameAction::Quit => {
                info!("Quit requested");
                self.running = false;
            }
            GameAction::SelectAt(x, y) => {
                self.inventory_ui.handle_mouse_click(x, y, &mut self.inventory);
            }
        }
    }

    pub fn handle_actions(&mut self, actions: impl IntoIterator<Item = GameAction>) {
        for action in actions {
            self.handle_action(action);
        }
    }

    /// Draw list for the current state
    pub fn frame(&self) -> Vec<DrawCommand> {
        self.inventory_ui.draw(&self.inventory)
    }

    pub fn render(&self, view: &mut dyn InventoryView) -> Result<(), String> {
        self.inventory_ui.render(&self.inventory, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::TextSize;
    use crate::inventory::Coordinate;

    fn selected_text(frame: &[DrawCommand]) -> Option<String> {
        frame.iter().find_map(|c| match c {
            DrawCommand::Text { text, size: TextSize::Small, .. } if text.starts_with("Selected:") => {
                Some(text.clone())
            }
            _ => None,
        })
    }

    #[test]
    fn test_default_bootstrap() {
        let game = Game::new(&GameConfig::default()).unwrap();
        let inventory = game.inventory();

        assert!(game.is_running());
        assert_eq!(inventory.get_item_count(), 5);
        assert_eq!(inventory.get_max_slots(), 15);
        assert_eq!(inventory.selected_slot(), Some(Coordinate::new(0, 0)));
        assert_eq!(inventory.selected_item().map(|i| i.name()), Some("Sword"));
        assert_eq!(selected_text(&game.frame()), Some("Selected: Sword".to_string()));
    }

    #[test]
    fn test_click_changes_selection() {
        let mut game = Game::new(&GameConfig::default()).unwrap();

        // Centre of slot (1, 1) holds the Scroll
        game.handle_action(GameAction::SelectAt(240, 240));
        assert_eq!(game.inventory().selected_slot(), Some(Coordinate::new(1, 1)));
        assert_eq!(selected_text(&game.frame()), Some("Selected: Scroll".to_string()));

        // Empty slot (2, 4) clears the selected-item line
        game.handle_action(GameAction::SelectAt(540, 340));
        assert_eq!(game.inventory().selected_slot(), Some(Coordinate::new(2, 4)));
        assert_eq!(selected_text(&game.frame()), None);

        // Miss leaves everything as is
        game.handle_action(GameAction::SelectAt(5, 5));
        assert_eq!(game.inventory().selected_slot(), Some(Coordinate::new(2, 4)));
    }

    #[test]
    fn test_quit_stops_game() {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        game.handle_actions([GameAction::SelectAt(140, 140), GameAction::Quit]);
        assert!(!game.is_running());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.inventory.grid_width = 0;
        assert!(Game::new(&config).is_err());
    }

    #[test]
    fn test_out_of_range_config_is_error_not_panic() {
        let mut config = GameConfig::default();
        config.inventory.grid_width = 1 << 32;
        config.inventory.grid_height = 1 << 32;
        config.inventory.initial_selection = None;
        config.starting_items.clear();
        assert!(matches!(Game::new(&config), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.layout.slot_width = 600_000_000;
        assert!(matches!(Game::new(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_no_initial_selection() {
        let mut config = GameConfig::default();
        config.inventory.initial_selection = None;
        config.starting_items.clear();

        let game = Game::new(&config).unwrap();
        assert!(game.inventory().is_empty());
        assert_eq!(game.inventory().selected_slot(), None);
    }
}
