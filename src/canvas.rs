//! Drawing primitives.
//! `Canvas` is the small set of operations the renderer needs; `RasterCanvas`
//! implements them over an in-memory RGB image with anti-aliased edges and
//! encodes the result as PNG.

use std::io::Cursor;

use image::{ImageFormat, ImageResult, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::pixelops::interpolate;
use imageproc::rect::Rect;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Point in canvas pixel space. Pixel `(px, py)` covers `[px, px + 1) x [py, py + 1)`.
pub type Point = (f32, f32);

pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, stroke: f32, color: Rgb<u8>);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb<u8>);
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: f32, color: Rgb<u8>);
}

/// In-memory canvas with a solid white background.
pub struct RasterCanvas {
    image: RgbImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Blends `color` into each pixel between `min` and `max`, weighted by the
    /// coverage `coverage_at` reports for that pixel's center.
    fn paint_coverage(
        &mut self,
        min: Point,
        max: Point,
        color: Rgb<u8>,
        coverage_at: impl Fn(f32, f32) -> f32,
    ) {
        let (width, height) = self.image.dimensions();
        let x0 = min.0.floor().max(0.0) as u32;
        let y0 = min.1.floor().max(0.0) as u32;
        let x1 = (max.0.ceil().max(0.0) as u32).min(width);
        let y1 = (max.1.ceil().max(0.0) as u32).min(height);

        for py in y0..y1 {
            for px in x0..x1 {
                let coverage = coverage_at(px as f32 + 0.5, py as f32 + 0.5).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let current = *self.image.get_pixel(px, py);
                self.image
                    .put_pixel(px, py, interpolate(color, current, coverage));
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn draw_line(&mut self, from: Point, to: Point, stroke: f32, color: Rgb<u8>) {
        let half = stroke / 2.0;

        // Grid lines are axis-aligned and land on whole pixels; fill them exactly.
        if from.0 == to.0 || from.1 == to.1 {
            let left = from.0.min(to.0) - if from.0 == to.0 { half } else { 0.0 };
            let top = from.1.min(to.1) - if from.1 == to.1 { half } else { 0.0 };
            let width = if from.0 == to.0 { stroke } else { (to.0 - from.0).abs() };
            let height = if from.1 == to.1 { stroke } else { (to.1 - from.1).abs() };
            let rect = Rect::at(left.round() as i32, top.round() as i32)
                .of_size((width.round() as u32).max(1), (height.round() as u32).max(1));
            draw_filled_rect_mut(&mut self.image, rect, color);
            return;
        }

        let min = (from.0.min(to.0) - half - 1.0, from.1.min(to.1) - half - 1.0);
        let max = (from.0.max(to.0) + half + 1.0, from.1.max(to.1) + half + 1.0);
        self.paint_coverage(min, max, color, |x, y| {
            half + 0.5 - distance_to_segment((x, y), from, to)
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb<u8>) {
        let reach = radius + 1.0;
        let min = (center.0 - reach, center.1 - reach);
        let max = (center.0 + reach, center.1 + reach);
        self.paint_coverage(min, max, color, |x, y| {
            radius + 0.5 - distance((x, y), center)
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: f32, color: Rgb<u8>) {
        let half = stroke / 2.0;
        let reach = radius + half + 1.0;
        let min = (center.0 - reach, center.1 - reach);
        let max = (center.0 + reach, center.1 + reach);
        self.paint_coverage(min, max, color, |x, y| {
            half + 0.5 - (distance((x, y), center) - radius).abs()
        });
    }
}

fn distance(a: Point, b: Point) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

fn distance_to_segment(p: Point, from: Point, to: Point) -> f32 {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return distance(p, from);
    }
    let t = (((p.0 - from.0) * dx + (p.1 - from.1) * dy) / length_sq).clamp(0.0, 1.0);
    distance(p, (from.0 + t * dx, from.1 + t * dy))
}
