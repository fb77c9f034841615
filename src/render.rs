//! Region renderer.
//! Draws the grid of one board region and the stones inside it, then encodes
//! the canvas as PNG. Output depends only on the stones and the region.

use crate::canvas::{BLACK, Canvas, RasterCanvas, WHITE};
use crate::config::RenderConfig;
use crate::error::SgfError;
use crate::region::BoardRegion;
use crate::sgf::{Color, Stone};

/// Pixel size of a region image: one cell per board line plus the margin on both sides.
pub fn canvas_size(region: &BoardRegion, config: &RenderConfig) -> (u32, u32) {
    let side = |span: usize| (span as u32 + 1) * config.cell_size + 2 * config.margin;
    (side(region.width_span()), side(region.height_span()))
}

/// Renders `region` to PNG bytes.
pub fn render_region(stones: &[Stone], region: &BoardRegion) -> Result<Vec<u8>, SgfError> {
    let config = RenderConfig::STANDARD;
    let (width, height) = canvas_size(region, &config);
    let mut canvas = RasterCanvas::new(width, height);

    draw_region(&mut canvas, stones, region, &config);

    canvas
        .encode_png()
        .map_err(|e| SgfError::render_failure(region.name, e))
}

/// Draws the grid and every stone inside `region` onto `canvas`.
pub fn draw_region<C: Canvas>(
    canvas: &mut C,
    stones: &[Stone],
    region: &BoardRegion,
    config: &RenderConfig,
) {
    let margin = config.margin as f32;
    let cell = config.cell_size as f32;
    let grid_right = margin + region.width_span() as f32 * cell;
    let grid_bottom = margin + region.height_span() as f32 * cell;

    for i in 0..=region.width_span() {
        let x = margin + i as f32 * cell;
        canvas.draw_line((x, margin), (x, grid_bottom), config.grid_stroke, BLACK);
    }
    for i in 0..=region.height_span() {
        let y = margin + i as f32 * cell;
        canvas.draw_line((margin, y), (grid_right, y), config.grid_stroke, BLACK);
    }

    let radius = config.stone_radius();
    for stone in stones.iter().filter(|s| region.contains(s)) {
        let center = (
            margin + (stone.x - region.start_x) as f32 * cell,
            margin + (stone.y - region.start_y) as f32 * cell,
        );
        match stone.color {
            Color::Black => canvas.fill_circle(center, radius, BLACK),
            Color::White => {
                canvas.fill_circle(center, radius, WHITE);
                canvas.stroke_circle(center, radius, config.outline_stroke, BLACK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Point;
    use crate::region::{REGIONS, find_region};
    use crate::sgf::extract_stones;
    use image::Rgb;

    #[derive(Debug, PartialEq)]
    enum Op {
        Line(Point, Point),
        Fill(Point, Rgb<u8>),
        Stroke(Point),
    }

    /// Records drawing calls instead of rasterizing them.
    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl RecordingCanvas {
        fn stones(&self) -> Vec<&Op> {
            self.ops
                .iter()
                .filter(|op| !matches!(op, Op::Line(..)))
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn draw_line(&mut self, from: Point, to: Point, _stroke: f32, _color: Rgb<u8>) {
            self.ops.push(Op::Line(from, to));
        }
        fn fill_circle(&mut self, center: Point, _radius: f32, color: Rgb<u8>) {
            self.ops.push(Op::Fill(center, color));
        }
        fn stroke_circle(&mut self, center: Point, _radius: f32, _stroke: f32, _color: Rgb<u8>) {
            self.ops.push(Op::Stroke(center));
        }
    }

    fn record(sgf: &str, region_name: &str) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        let region = find_region(region_name).unwrap();
        draw_region(&mut canvas, &extract_stones(sgf), region, &RenderConfig::STANDARD);
        canvas
    }

    #[test]
    fn test_canvas_size() {
        for region in &REGIONS {
            assert_eq!(canvas_size(region, &RenderConfig::STANDARD), (390, 390));
        }
    }

    #[test]
    fn test_grid_lines() {
        let canvas = record("(;)", "region2");
        let lines: Vec<_> = canvas.ops.iter().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], &Op::Line((20.0, 20.0), (20.0, 335.0)));
        assert_eq!(lines[9], &Op::Line((335.0, 20.0), (335.0, 335.0)));
        assert_eq!(lines[19], &Op::Line((20.0, 335.0), (335.0, 335.0)));
    }

    #[test]
    fn test_region3_scenario() {
        let canvas = record("(;AB[aa][ss]AW[jj])", "region3");
        assert_eq!(
            canvas.stones(),
            vec![
                &Op::Fill((20.0, 20.0), BLACK),
                &Op::Fill((335.0, 335.0), WHITE),
                &Op::Stroke((335.0, 335.0)),
            ]
        );
    }

    #[test]
    fn test_stone_offset_by_region_start() {
        let canvas = record("(;AB[pd])", "region1");
        assert_eq!(
            canvas.stones(),
            vec![&Op::Fill((20.0 + 6.0 * 35.0, 20.0 + 3.0 * 35.0), BLACK)]
        );
    }

    #[test]
    fn test_boundary_stone_in_both_regions() {
        let sgf = "(;AB[jf])";
        assert_eq!(record(sgf, "region1").stones().len(), 1);
        assert_eq!(record(sgf, "region3").stones().len(), 1);
        assert!(record(sgf, "region2").stones().is_empty());
        assert!(record(sgf, "region4").stones().is_empty());
    }

    #[test]
    fn test_outside_stones_not_drawn() {
        let canvas = record("(;AB[ss][ka]AW[as])", "region3");
        assert!(canvas.stones().is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let stones = extract_stones("(;AB[aa][dd]AW[jj][cc])");
        let region = find_region("region3").unwrap();
        let first = render_region(&stones, region).unwrap();
        let second = render_region(&stones, region).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_size_independent_of_stones() {
        let region = find_region("region4").unwrap();
        let empty = render_region(&[], region).unwrap();
        let full = render_region(&extract_stones("(;AB[aj][bk][cl]AW[is][js])"), region).unwrap();
        let empty = image::load_from_memory(&empty).unwrap();
        let full = image::load_from_memory(&full).unwrap();
        assert_eq!(empty.width(), full.width());
        assert_eq!(empty.height(), full.height());
    }
}
