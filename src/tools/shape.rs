use egui::Pos2;

use super::{Tool, ToolAction};
use crate::settings::ToolSettings;
use crate::surface::{Snapshot, Surface};

/// Geometry drawn by a [`ShapeTool`] between the anchor and the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Arrow,
}

struct ShapeSession {
    anchor: Pos2,
    // Surface as it looked before the gesture; restored before every
    // preview redraw so earlier preview frames never accumulate.
    base: Snapshot,
}

/// Shape-preview tool: every pointer move restores the pre-gesture snapshot
/// and redraws the whole shape from the anchor to the current position.
pub struct ShapeTool {
    kind: ShapeKind,
    session: Option<ShapeSession>,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            session: None,
        }
    }

    fn draw(&self, anchor: Pos2, pos: Pos2, surface: &mut Surface, settings: &ToolSettings) {
        let color = settings.color();
        let width = settings.brush_size();
        match self.kind {
            ShapeKind::Line => surface.stroke_segment(anchor, pos, color, width),
            ShapeKind::Rectangle => surface.stroke_rect(anchor, pos, color, width),
            ShapeKind::Circle => {
                surface.stroke_circle(anchor, anchor.distance(pos), color, width);
            }
            ShapeKind::Arrow => surface.stroke_arrow(anchor, pos, color, width),
        }
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Arrow => "Arrow",
        }
    }

    fn deactivate(&mut self) {
        self.session = None;
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        self.session = Some(ShapeSession {
            anchor: pos,
            base: surface.snapshot(),
        });
        None
    }

    fn on_pointer_move(
        &mut self,
        pos: Pos2,
        surface: &mut Surface,
        settings: &ToolSettings,
    ) -> Option<ToolAction> {
        if let Some(session) = &self.session {
            surface.restore(&session.base);
            self.draw(session.anchor, pos, surface, settings);
        }
        None
    }

    fn on_pointer_up(
        &mut self,
        _surface: &mut Surface,
        _settings: &ToolSettings,
    ) -> Option<ToolAction> {
        // Whatever the last preview drew is the committed shape.
        self.session.take().map(|_| ToolAction::Commit)
    }
}
