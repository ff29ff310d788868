//! SDL2 rendering of the inventory draw list.

use std::collections::HashMap;

use log::warn;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::config::AssetPaths;
use crate::item::Item;
use crate::text::{centered_origin, draw_simple_text};

use super::layout::SlotRect;
use super::view::{DrawCommand, InventoryView, TextSize};

/// Loads a texture, logging and returning None when the file is unusable
fn load_optional<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("Could not load {}: {}", path, e);
            None
        }
    }
}

/// Draws inventory frames onto an SDL2 window.
///
/// Missing images are not fatal: the background falls back to a flat fill,
/// the selection image to an outline and item icons to text labels.
pub struct SdlInventoryView<'a> {
    canvas: Canvas<Window>,
    background: Option<Texture<'a>>,
    selection: Option<Texture<'a>>,
    icons: HashMap<String, Texture<'a>>,
}

impl<'a> SdlInventoryView<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        assets: &AssetPaths,
        items: &[Item],
    ) -> Self {
        let background = assets
            .background
            .as_deref()
            .and_then(|path| load_optional(texture_creator, path));
        let selection = assets
            .selection
            .as_deref()
            .and_then(|path| load_optional(texture_creator, path));

        let mut icons = HashMap::new();
        for item in items {
            if let Some(path) = item.icon_path() {
                if icons.contains_key(path) {
                    continue;
                }
                if let Some(texture) = load_optional(texture_creator, path) {
                    icons.insert(path.to_string(), texture);
                }
            }
        }

        SdlInventoryView {
            canvas,
            background,
            selection,
            icons,
        }
    }

    /// Outline `width` pixels thick, drawn inwards
    fn draw_border(&mut self, rect: SlotRect, color: Color, width: u32) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        for ring in rect.border_rings(width) {
            self.canvas.draw_rect(Rect::from(ring))?;
        }
        Ok(())
    }

    fn draw_command(&mut self, command: &DrawCommand) -> Result<(), String> {
        match command {
            DrawCommand::Background { color } => {
                if let Some(texture) = &self.background {
                    self.canvas.copy(texture, None, None)?;
                } else {
                    self.canvas.set_draw_color(Color::from(*color));
                    self.canvas.clear();
                }
            }
            DrawCommand::Slot { rect, selected, fill, border, border_width, .. } => {
                if *selected {
                    if let Some(texture) = &self.selection {
                        return self.canvas.copy(texture, None, Rect::from(*rect));
                    }
                }
                if let Some(fill) = fill {
                    self.canvas.set_draw_color(Color::from(*fill));
                    self.canvas.fill_rect(Rect::from(*rect))?;
                }
                self.draw_border(*rect, Color::from(*border), *border_width)?;
            }
            DrawCommand::Item { icon_rect, icon_path, label, label_color, .. } => {
                let icon = icon_path.as_ref().and_then(|path| self.icons.get(path));
                if let Some(texture) = icon {
                    self.canvas.copy(texture, None, Rect::from(*icon_rect))?;
                } else {
                    let scale = TextSize::Small.scale();
                    let (cx, cy) = icon_rect.center();
                    let (x, y) = centered_origin(label, scale, cx, cy);
                    draw_simple_text(&mut self.canvas, label, x, y, Color::from(*label_color), scale)?;
                }
            }
            DrawCommand::Text { text, x, y, color, size } => {
                draw_simple_text(&mut self.canvas, text, *x, *y, Color::from(*color), size.scale())?;
            }
        }
        Ok(())
    }
}

impl InventoryView for SdlInventoryView<'_> {
    fn render(&mut self, commands: &[DrawCommand]) -> Result<(), String> {
        for command in commands {
            self.draw_command(command)?;
        }
        self.canvas.present();
        Ok(())
    }
}
