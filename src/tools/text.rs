use egui::{Color32, Pos2};

use super::{Tool, ToolAction};
use crate::settings::{FontFamily, ToolSettings};
use crate::surface::Surface;

/// Transient state while a text placement is being edited.
///
/// Styling is captured when the buffer opens; later settings changes do not
/// retroactively restyle a pending placement. The buffered string reaches
/// the surface only on explicit confirm.
#[derive(Debug, Clone)]
pub struct TextEditBuffer {
    pub anchor: Pos2,
    pub text: String,
    color: Color32,
    font_size: f32,
    font_family: FontFamily,
}

impl TextEditBuffer {
    pub fn new(anchor: Pos2, settings: &ToolSettings) -> Self {
        Self {
            anchor,
            text: String::new(),
            color: settings.color(),
            font_size: settings.font_size(),
            font_family: settings.font_family(),
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    /// Buffers holding only whitespace are discarded on confirm.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The text tool never starts a stroke session; a click just asks the
/// engine to open the entry overlay at that spot.
pub struct TextTool;

impl TextTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn deactivate(&mut self) {}

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        Some(ToolAction::OpenTextEditor(pos))
    }

    fn on_pointer_move(
        &mut self,
        _pos: Pos2,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        None
    }

    fn on_pointer_up(
        &mut self,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        None
    }
}
