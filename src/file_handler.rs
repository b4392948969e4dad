use eframe::egui;

/// Collects image files dropped onto the window for import.
pub struct FileHandler {
    processed_files: Vec<String>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            processed_files: Vec::new(),
        }
    }

    /// Return the raw bytes of any newly dropped image files.
    pub fn take_dropped_images(&mut self, ctx: &egui::Context) -> Vec<Vec<u8>> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let mut images = Vec::new();

        for file in &dropped {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            // Skip if we've already processed this file
            if self.processed_files.contains(&file_name) {
                continue;
            }

            if !Self::is_image_file(file) {
                log::warn!("dropped file is not a supported type: {}", file_name);
                continue;
            }

            if let Some(bytes) = &file.bytes {
                log::info!(
                    "importing image from memory: {} ({} bytes)",
                    file_name,
                    bytes.len()
                );
                images.push(bytes.to_vec());
                self.processed_files.push(file_name);
            } else if let Some(path) = &file.path {
                log::info!("importing image from path: {}", path.display());
                match std::fs::read(path) {
                    Ok(bytes) => {
                        images.push(bytes);
                        self.processed_files.push(file_name);
                    }
                    Err(err) => {
                        log::error!("failed to read image file {}: {}", path.display(), err);
                    }
                }
            } else {
                log::warn!("dropped file has no accessible data: {}", file_name);
            }
        }

        if dropped.is_empty() {
            // Allow the same file to be dropped again later.
            self.processed_files.clear();
        }

        images
    }

    /// Check if a file is an image based on MIME type or extension.
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            file.mime.starts_with("image/")
        } else if let Some(path) = &file.path {
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
            } else {
                false
            }
        } else {
            false
        }
    }

    /// Preview files being dragged over the application.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if !ctx.input(|i| i.raw.hovered_files.is_empty()) {
            let painter =
                ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
            let screen_rect = ctx.screen_rect();
            painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
            painter.text(
                screen_rect.center(),
                Align2::CENTER_CENTER,
                "Drop image to import",
                egui::FontId::proportional(24.0),
                Color32::WHITE,
            );
        }
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}
