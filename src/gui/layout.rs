//! Slot geometry and click hit-testing.
//!
//! Slot `(row, col)` sits at `origin + (col, row) * (slot size + padding)`.
//! The rectangles are computed once per screen and clicks are resolved by
//! scanning them in row-major order.

use serde::{Serialize, Deserialize};

use crate::inventory::Coordinate;

/// Pixel layout of the inventory screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryLayout {
    pub slot_width: u32,
    pub slot_height: u32,
    /// Gap between neighbouring slots
    pub padding: u32,
    /// Top-left corner of slot (0, 0)
    pub origin_x: i32,
    pub origin_y: i32,
    /// Icons are scaled to a square of this size
    pub icon_size: u32,
    pub title_y: i32,
    pub count_y: i32,
    /// Distance of the "Selected:" line from the bottom of the screen
    pub selected_info_margin: i32,
}

impl Default for InventoryLayout {
    fn default() -> Self {
        InventoryLayout {
            slot_width: 80,
            slot_height: 80,
            padding: 20,
            origin_x: 100,
            origin_y: 100,
            icon_size: 60,
            title_y: 40,
            count_y: 70,
            selected_info_margin: 50,
        }
    }
}

impl InventoryLayout {
    /// Bottom-right corner (exclusive) of a `width` x `height` grid
    ///
    /// Returns None if any slot edge, or the icon square, would fall outside
    /// `i32` screen space. Layouts that pass can use the unchecked pixel
    /// math below for every in-bounds coordinate.
    pub fn grid_extent(&self, width: usize, height: usize) -> Option<(i32, i32)> {
        let edge = |origin: i32, count: usize, size: u32| -> Option<i32> {
            let count = i64::try_from(count).ok()?;
            let step = i64::from(size) + i64::from(self.padding);
            let last = count.checked_sub(1)?.checked_mul(step)?;
            let end = i64::from(origin).checked_add(last)?.checked_add(i64::from(size))?;
            i32::try_from(end).ok()
        };

        if self.icon_size > self.slot_width.min(self.slot_height) {
            return None;
        }

        Some((
            edge(self.origin_x, width, self.slot_width)?,
            edge(self.origin_y, height, self.slot_height)?,
        ))
    }

    /// Screen rectangle of a slot
    ///
    /// `coord` must lie inside a grid whose `grid_extent` is Some.
    pub fn slot_rect(&self, coord: Coordinate) -> SlotRect {
        let step_x = i64::from(self.slot_width) + i64::from(self.padding);
        let step_y = i64::from(self.slot_height) + i64::from(self.padding);

        SlotRect::new(
            (i64::from(self.origin_x) + coord.col as i64 * step_x) as i32,
            (i64::from(self.origin_y) + coord.row as i64 * step_y) as i32,
            self.slot_width,
            self.slot_height,
        )
    }

    /// Icon-sized square centered in a slot
    pub fn icon_rect(&self, coord: Coordinate) -> SlotRect {
        let (cx, cy) = self.slot_rect(coord).center();
        let half = (self.icon_size / 2) as i32;
        SlotRect::new(cx - half, cy - half, self.icon_size, self.icon_size)
    }
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SlotRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        SlotRect { x, y, width, height }
    }

    /// Left/top edges are inclusive, right/bottom edges exclusive
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// One-pixel outlines making up a border `width` pixels thick
    ///
    /// Rings step inwards and stop once they would collapse, so a border
    /// wider than half the rect just fills it with outlines.
    pub fn border_rings(&self, width: u32) -> Vec<SlotRect> {
        let rings = width.min(self.width / 2).min(self.height / 2);
        (0..rings)
            .map(|inset| {
                SlotRect::new(
                    self.x + inset as i32,
                    self.y + inset as i32,
                    self.width - 2 * inset,
                    self.height - 2 * inset,
                )
            })
            .collect()
    }
}

#[cfg(feature = "sdl")]
impl From<SlotRect> for sdl2::rect::Rect {
    fn from(rect: SlotRect) -> Self {
        sdl2::rect::Rect::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Precomputed slot rectangles for a `width` x `height` grid
#[derive(Debug, Clone)]
pub struct SlotGrid {
    slots: Vec<(Coordinate, SlotRect)>,
}

impl SlotGrid {
    pub fn new(layout: &InventoryLayout, width: usize, height: usize) -> Self {
        let mut slots = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let coord = Coordinate::new(row, col);
                slots.push((coord, layout.slot_rect(coord)));
            }
        }
        SlotGrid { slots }
    }

    /// Iterates slots in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &(Coordinate, SlotRect)> {
        self.slots.iter()
    }

    /// Returns the slot under a pixel, or None if not over a slot
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Coordinate> {
        self.slots
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(coord, _)| *coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_rect_positions() {
        let layout = InventoryLayout::default();

        assert_eq!(layout.slot_rect(Coordinate::new(0, 0)), SlotRect::new(100, 100, 80, 80));
        assert_eq!(layout.slot_rect(Coordinate::new(0, 1)), SlotRect::new(200, 100, 80, 80));
        assert_eq!(layout.slot_rect(Coordinate::new(2, 4)), SlotRect::new(500, 300, 80, 80));
    }

    #[test]
    fn test_icon_rect_is_centered() {
        let layout = InventoryLayout::default();
        let icon = layout.icon_rect(Coordinate::new(1, 1));

        assert_eq!(icon, SlotRect::new(210, 210, 60, 60));
        assert_eq!(icon.center(), layout.slot_rect(Coordinate::new(1, 1)).center());
    }

    #[test]
    fn test_rect_edges() {
        let rect = SlotRect::new(100, 100, 80, 80);
        assert!(rect.contains(100, 100));
        assert!(rect.contains(179, 179));
        assert!(!rect.contains(180, 150));
        assert!(!rect.contains(150, 180));
        assert!(!rect.contains(99, 150));
    }

    #[test]
    fn test_border_rings() {
        let rect = SlotRect::new(100, 100, 80, 80);

        assert!(rect.border_rings(0).is_empty());
        assert_eq!(rect.border_rings(3), vec![
            SlotRect::new(100, 100, 80, 80),
            SlotRect::new(101, 101, 78, 78),
            SlotRect::new(102, 102, 76, 76),
        ]);

        // Clamped to half the shorter side
        let thin = SlotRect::new(0, 0, 10, 4);
        assert_eq!(thin.border_rings(50), vec![
            SlotRect::new(0, 0, 10, 4),
            SlotRect::new(1, 1, 8, 2),
        ]);
    }

    #[test]
    fn test_grid_extent() {
        let layout = InventoryLayout::default();
        assert_eq!(layout.grid_extent(5, 3), Some((580, 380)));
        assert_eq!(layout.grid_extent(1, 1), Some((180, 180)));
        assert_eq!(layout.grid_extent(0, 3), None);
    }

    #[test]
    fn test_grid_extent_rejects_overflow() {
        let wide = InventoryLayout { slot_width: 600_000_000, ..InventoryLayout::default() };
        assert_eq!(wide.grid_extent(5, 3), None);

        let far = InventoryLayout { origin_y: i32::MAX - 100, ..InventoryLayout::default() };
        assert_eq!(far.grid_extent(5, 3), None);

        let huge_icon = InventoryLayout { icon_size: 81, ..InventoryLayout::default() };
        assert_eq!(huge_icon.grid_extent(5, 3), None);

        assert_eq!(InventoryLayout::default().grid_extent(usize::MAX, 1), None);

        let wide_gap = InventoryLayout { padding: u32::MAX, ..InventoryLayout::default() };
        assert_eq!(wide_gap.grid_extent(2, 1), None);
        assert_eq!(wide_gap.grid_extent(1, 1), Some((180, 180)));
        assert_eq!(wide_gap.slot_rect(Coordinate::new(0, 0)), SlotRect::new(100, 100, 80, 80));
    }

    #[test]
    fn test_hit_test_slot_centers() {
        let layout = InventoryLayout::default();
        let grid = SlotGrid::new(&layout, 5, 3);

        for (coord, rect) in grid.iter() {
            let (cx, cy) = rect.center();
            assert_eq!(grid.hit_test(cx, cy), Some(*coord));
        }
    }

    #[test]
    fn test_hit_test_misses() {
        let grid = SlotGrid::new(&InventoryLayout::default(), 5, 3);

        // Padding gap between (0,0) and (0,1)
        assert_eq!(grid.hit_test(190, 140), None);
        // Above and left of the grid
        assert_eq!(grid.hit_test(50, 50), None);
        // Below the last row (rows end at y = 380)
        assert_eq!(grid.hit_test(150, 390), None);
        // Right of the last column (columns end at x = 580)
        assert_eq!(grid.hit_test(600, 150), None);
        assert_eq!(grid.hit_test(-10, -10), None);
    }

    #[test]
    fn test_partial_layout_keeps_defaults() {
        let layout: InventoryLayout = serde_json::from_str(r#"{"padding": 4}"#).unwrap();
        assert_eq!(layout.padding, 4);
        assert_eq!(layout.slot_width, 80);
        assert_eq!(layout.slot_rect(Coordinate::new(0, 1)).x, 184);
    }
}
