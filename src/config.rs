//! Config module.
//! Fixed visual parameters for region images (pixels unless noted).
//! Not user-configurable: every image of a given region has the same geometry.

/// Board and drawing constants used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Lines per side of the board.
    pub board_size: usize,
    pub cell_size: u32,
    /// Blank border around the grid on every side.
    pub margin: u32,
    pub stone_diameter: u32,
    pub grid_stroke: f32,
    /// Outline width of white stones.
    pub outline_stroke: f32,
}

impl RenderConfig {
    pub const STANDARD: RenderConfig = RenderConfig {
        board_size: 19,
        cell_size: 35,
        margin: 20,
        stone_diameter: 30,
        grid_stroke: 2.0,
        outline_stroke: 1.0,
    };

    /// Radius actually drawn, one pixel inside half the diameter so neighbours never touch.
    pub fn stone_radius(&self) -> f32 {
        (self.stone_diameter / 2 - 1) as f32
    }

    /// Largest valid zero-based coordinate.
    pub fn max_coord(&self) -> usize {
        self.board_size - 1
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
