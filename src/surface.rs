use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use egui::{Color32, Pos2, pos2};
use image::{Rgba, RgbaImage, imageops};

use crate::error::SurfaceError;

/// Angle between the arrow shaft and each head segment.
const ARROW_ANGLE: f32 = std::f32::consts::PI / 7.0;

/// An immutable full copy of the surface pixels at a point in time.
///
/// Snapshots are independent copies: mutating the live surface never changes
/// a snapshot that was taken earlier.
#[derive(Clone)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl Snapshot {
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// The raster canvas being drawn on.
///
/// Pixels are straight-alpha RGBA with a fully transparent background. All
/// drawing primitives clip to `[0, width) x [0, height)`; coordinates are
/// surface-local with `(0, 0)` at the top-left corner.
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw pixel access for rendering and export.
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Read a single pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.width() && y < self.height() {
            Some(*self.pixels.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Blank the whole surface back to transparency.
    pub fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Take an immutable full copy of the current pixels.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Overwrite the whole surface from a snapshot.
    ///
    /// A snapshot with matching dimensions is copied back bit-exactly.
    /// Otherwise the stored pixels are stamped stretched to fill the current
    /// bounds, which is what keeps content visible across resizes.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.pixels.dimensions() == self.pixels.dimensions() {
            self.pixels = snapshot.pixels.clone();
        } else {
            self.pixels = imageops::resize(
                &snapshot.pixels,
                self.width(),
                self.height(),
                imageops::FilterType::Triangle,
            );
        }
    }

    /// Resize the surface, preserving content by re-stamping the previous
    /// pixels stretched into the new bounds.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        if (width, height) == self.pixels.dimensions() {
            return Ok(());
        }
        let old = self.snapshot();
        self.pixels = RgbaImage::new(width, height);
        self.restore(&old);
        Ok(())
    }

    /// Stroke a round-capped segment of the given width.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let radius = (width * 0.5).max(0.5);
        let px = Rgba(color.to_array());
        let steps = (from.distance(to).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(from.lerp(to, t), radius, px);
        }
    }

    /// Stamp a solid disc of the given color.
    pub fn fill_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.stamp_disc(center, radius.max(0.5), Rgba(color.to_array()));
    }

    /// Remove ink inside a disc, restoring full transparency.
    pub fn erase_disc(&mut self, center: Pos2, radius: f32) {
        self.stamp_disc(center, radius.max(0.5), Rgba([0, 0, 0, 0]));
    }

    /// Stroke an axis-aligned rectangle outline spanning the two corners.
    /// The corners may be given in any order; negative spans are fine.
    pub fn stroke_rect(&mut self, a: Pos2, b: Pos2, color: Color32, width: f32) {
        let min = pos2(a.x.min(b.x), a.y.min(b.y));
        let max = pos2(a.x.max(b.x), a.y.max(b.y));
        self.stroke_segment(min, pos2(max.x, min.y), color, width);
        self.stroke_segment(pos2(max.x, min.y), max, color, width);
        self.stroke_segment(max, pos2(min.x, max.y), color, width);
        self.stroke_segment(pos2(min.x, max.y), min, color, width);
    }

    /// Stroke a circle outline.
    pub fn stroke_circle(&mut self, center: Pos2, radius: f32, color: Color32, width: f32) {
        let r = radius.max(0.0);
        let disc = (width * 0.5).max(0.5);
        let px = Rgba(color.to_array());
        let steps = ((std::f32::consts::TAU * r).ceil() as usize).max(8);
        for i in 0..steps {
            let angle = i as f32 / steps as f32 * std::f32::consts::TAU;
            let p = pos2(center.x + angle.cos() * r, center.y + angle.sin() * r);
            self.stamp_disc(p, disc, px);
        }
    }

    /// Stroke an arrow: shaft plus two head segments angled back from the tip.
    pub fn stroke_arrow(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        self.stroke_segment(from, to, color, width);
        let length = from.distance(to);
        if length <= f32::EPSILON {
            return;
        }
        let angle = (to.y - from.y).atan2(to.x - from.x);
        let head = 25.0_f32.min(length * 0.2);
        for side in [-1.0, 1.0] {
            let theta = angle + side * ARROW_ANGLE;
            let end = pos2(to.x - head * theta.cos(), to.y - head * theta.sin());
            self.stroke_segment(to, end, color, width);
        }
    }

    /// Composite a decoded image centered on the surface, uniformly scaled to
    /// fit inside the bounds with its aspect ratio preserved.
    pub fn draw_image_fit(&mut self, source: &RgbaImage) {
        if source.width() == 0 || source.height() == 0 {
            return;
        }
        let (sw, sh) = (self.width() as f32, self.height() as f32);
        let (iw, ih) = (source.width() as f32, source.height() as f32);
        let ratio = (sw / iw).min(sh / ih);
        let w = ((iw * ratio).round() as u32).max(1);
        let h = ((ih * ratio).round() as u32).max(1);
        let scaled = imageops::resize(source, w, h, imageops::FilterType::Triangle);
        let x = ((sw - w as f32) * 0.5).round() as i64;
        let y = ((sh - h as f32) * 0.5).round() as i64;
        imageops::overlay(&mut self.pixels, &scaled, x, y);
    }

    /// Composite text onto the surface. `pos` is the top-left corner of the
    /// first line; embedded newlines start further lines.
    pub fn fill_text(&mut self, text: &str, pos: Pos2, font: &FontArc, size: f32, color: Color32) {
        let scale = PxScale::from(size.max(1.0));
        let scaled = font.as_scaled(scale);
        let ascent = scaled.ascent();
        let line_height = scaled.height() + scaled.line_gap();

        for (row, line) in text.split('\n').enumerate() {
            let baseline = pos.y + ascent + row as f32 * line_height;
            let mut pen_x = pos.x;
            let mut prev = None;
            for ch in line.chars() {
                let id = font.glyph_id(ch);
                if let Some(prev_id) = prev {
                    pen_x += scaled.kern(prev_id, id);
                }
                let glyph = id.with_scale_and_position(scale, ab_glyph::point(pen_x, baseline));
                if let Some(outline) = font.outline_glyph(glyph) {
                    let bounds = outline.px_bounds();
                    outline.draw(|gx, gy, coverage| {
                        let x = bounds.min.x as i32 + gx as i32;
                        let y = bounds.min.y as i32 + gy as i32;
                        self.blend_pixel(x, y, color, coverage);
                    });
                }
                pen_x += scaled.h_advance(id);
                prev = Some(id);
            }
        }
    }

    /// Encode the current pixels as PNG for export.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut bytes = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut bytes);
        image::DynamicImage::ImageRgba8(self.pixels.clone())
            .write_to(&mut cursor, image::ImageFormat::Png)?;
        Ok(bytes)
    }

    fn stamp_disc(&mut self, center: Pos2, radius: f32, px: Rgba<u8>) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let min_x = ((center.x - radius).floor() as i32).max(0);
        let max_x = ((center.x + radius).ceil() as i32).min(w - 1);
        let min_y = ((center.y - radius).floor() as i32).max(0);
        let max_y = ((center.y + radius).ceil() as i32).min(h - 1);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Pixel centers sit at half-integer coordinates.
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    self.pixels.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color32, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        let (w, h) = (self.width() as i32, self.height() as i32);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let [r, g, b, a] = color.to_array();
        let src_a = coverage.clamp(0.0, 1.0) * (a as f32 / 255.0);
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            *dst = Rgba([0, 0, 0, 0]);
            return;
        }
        let blend = |s: u8, d: u8| {
            let s = s as f32 / 255.0;
            let d = d as f32 / 255.0;
            (((s * src_a + d * dst_a * (1.0 - src_a)) / out_a) * 255.0).round() as u8
        };
        *dst = Rgba([
            blend(r, dst[0]),
            blend(g, dst[1]),
            blend(b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }
}
