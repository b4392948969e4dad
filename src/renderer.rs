use egui::{Color32, ColorImage, Rect, TextureHandle, TextureOptions, pos2};

use crate::surface::Surface;

/// Blits the engine's raster surface into the UI.
///
/// The surface pixels are uploaded as an egui texture whenever the engine
/// reports them dirty, then painted over a white canvas backing.
pub struct Renderer {
    texture: Option<TextureHandle>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Upload the current surface pixels to the GPU.
    pub fn upload(&mut self, ctx: &egui::Context, surface: &Surface) {
        let size = [surface.width() as usize, surface.height() as usize];
        let image = ColorImage::from_rgba_unmultiplied(size, surface.image().as_raw());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("whiteboard-surface", image, TextureOptions::NEAREST));
            }
        }
    }

    /// Paint the last uploaded surface into `rect`.
    pub fn paint(&self, painter: &egui::Painter, rect: Rect) {
        // White backing so transparent surface regions read as paper.
        painter.rect_filled(rect, 2.0, Color32::WHITE);
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
