//! Game configuration
//!
//! Everything tunable lives in one JSON file (`assets/config/game.json` by
//! default). Every field has a default, so a partial file only overrides
//! what it names and a missing file runs the stock prototype.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Serialize, Deserialize};

use crate::gui::{InventoryLayout, InventoryStyle};
use crate::inventory::{Inventory, StartingItem};
use crate::item::{Item, ItemCatalog};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

/// Errors that can occur while loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    /// File couldn't be read
    Io(std::io::Error),

    /// File isn't valid JSON for `GameConfig`
    Parse(serde_json::Error),

    /// Parsed fine but the values make no sense
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Voidfallen".to_string(),
            width: 1280,
            height: 720,
            fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Slot selected at startup, as `[row, col]`
    pub initial_selection: Option<(usize, usize)>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            grid_width: 5,
            grid_height: 3,
            initial_selection: Some((0, 0)),
        }
    }
}

/// Optional images; anything missing falls back to primitive drawing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: Option<String>,
    pub selection: Option<String>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            background: Some("assets/gui/inventory_background.png".to_string()),
            selection: Some("assets/gui/selected_item.png".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub inventory: InventoryConfig,
    pub layout: InventoryLayout,
    pub style: InventoryStyle,
    pub assets: AssetPaths,
    pub items: Vec<Item>,
    pub starting_items: Vec<StartingItem>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            inventory: InventoryConfig::default(),
            layout: InventoryLayout::default(),
            style: InventoryStyle::default(),
            assets: AssetPaths::default(),
            items: ItemCatalog::starter_items(),
            starting_items: StartingItem::defaults(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the config, running with defaults if the file doesn't exist
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Builds the item catalog from `items`
    pub fn catalog(&self) -> Result<ItemCatalog, ConfigError> {
        ItemCatalog::from_items(self.items.iter().cloned())
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory.grid_width == 0 || self.inventory.grid_height == 0 {
            return Err(ConfigError::Invalid("grid dimensions must be non-zero".to_string()));
        }
        if self.layout.slot_width == 0 || self.layout.slot_height == 0 {
            return Err(ConfigError::Invalid("slot size must be non-zero".to_string()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".to_string()));
        }
        if self.window.fps == 0 {
            return Err(ConfigError::Invalid("fps must be non-zero".to_string()));
        }
        let slots = self.inventory.grid_width.checked_mul(self.inventory.grid_height);
        if slots.is_none_or(|slots| slots > Inventory::MAX_SLOTS) {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} exceeds {} slots",
                self.inventory.grid_width,
                self.inventory.grid_height,
                Inventory::MAX_SLOTS
            )));
        }
        if self.layout.grid_extent(self.inventory.grid_width, self.inventory.grid_height).is_none() {
            return Err(ConfigError::Invalid(
                "layout places slots or icons outside screen coordinates".to_string(),
            ));
        }
        let info_y = i64::from(self.window.height) - i64::from(self.layout.selected_info_margin);
        if i32::try_from(self.window.width).is_err()
            || i32::try_from(self.window.height).is_err()
            || i32::try_from(info_y).is_err()
        {
            return Err(ConfigError::Invalid("window size out of range".to_string()));
        }
        if let Some((row, col)) = self.inventory.initial_selection {
            if row >= self.inventory.grid_height || col >= self.inventory.grid_width {
                return Err(ConfigError::Invalid(format!(
                    "initial selection ({}, {}) is outside the grid",
                    row, col
                )));
            }
        }

        self.catalog().map(|_| ())
    }
}
