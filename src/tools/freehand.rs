use egui::Pos2;

use super::{Tool, ToolAction};
use crate::settings::ToolSettings;
use crate::surface::Surface;

/// Freehand drawing: strokes a round-capped segment from the last position
/// to each new one.
pub struct PenTool {
    // Transient state: the previous point of the gesture, if one is active.
    last: Option<Pos2>,
}

impl PenTool {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for PenTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        "Pen"
    }

    fn deactivate(&mut self) {
        self.last = None;
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        self.last = Some(pos);
        None
    }

    fn on_pointer_move(
        &mut self,
        pos: Pos2,
        surface: &mut Surface,
        settings: &ToolSettings,
    ) -> Option<ToolAction> {
        if let Some(last) = self.last {
            surface.stroke_segment(last, pos, settings.color(), settings.brush_size());
            self.last = Some(pos);
        }
        None
    }

    fn on_pointer_up(
        &mut self,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        self.last.take().map(|_| ToolAction::Commit)
    }
}

/// Erasing stamps fully transparent discs along the path rather than
/// stroking a line, so fast pointer motion with a small brush can leave
/// gaps between stamps. That is inherent to the stamp model.
pub struct EraserTool {
    active: bool,
}

impl EraserTool {
    pub fn new() -> Self {
        Self { active: false }
    }
}

impl Default for EraserTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn on_pointer_down(
        &mut self,
        _pos: Pos2,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        self.active = true;
        None
    }

    fn on_pointer_move(
        &mut self,
        pos: Pos2,
        surface: &mut Surface,
        settings: &ToolSettings,
    ) -> Option<ToolAction> {
        if self.active {
            surface.erase_disc(pos, settings.brush_size());
        }
        None
    }

    fn on_pointer_up(
        &mut self,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        if self.active {
            self.active = false;
            Some(ToolAction::Commit)
        } else {
            None
        }
    }
}
