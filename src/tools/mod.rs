use egui::Pos2;

use crate::settings::{ToolKind, ToolSettings};
use crate::surface::Surface;

mod freehand;
mod shape;
mod text;

pub use freehand::{EraserTool, PenTool};
pub use shape::{ShapeKind, ShapeTool};
pub use text::{TextEditBuffer, TextTool};

/// What a tool asks the engine to do after handling a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolAction {
    /// The gesture finished; record a history checkpoint.
    Commit,
    /// Open the text-entry overlay anchored at this surface position.
    OpenTextEditor(Pos2),
}

/// Tool trait defines the interface for all drawing tools.
///
/// A tool receives the begin/move/end events of one gesture and mutates the
/// surface directly; it reports back through [`ToolAction`] when the engine
/// should act on its behalf.
pub trait Tool {
    /// Return the name of the tool.
    fn name(&self) -> &'static str;

    /// Called when the tool is deselected. Drops any in-progress gesture
    /// state so a later gesture starts clean.
    fn deactivate(&mut self);

    /// Handle the start of a gesture on the canvas.
    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        surface: &mut Surface,
        settings: &ToolSettings,
    ) -> Option<ToolAction>;

    /// Handle pointer movement while the gesture is held.
    fn on_pointer_move(
        &mut self,
        pos: Pos2,
        surface: &mut Surface,
        settings: &ToolSettings,
    ) -> Option<ToolAction>;

    /// Handle the end of the gesture.
    fn on_pointer_up(
        &mut self,
        surface: &mut Surface,
        settings: &ToolSettings,
    ) -> Option<ToolAction>;
}

/// One strategy instance per tool kind, dispatched by tag.
pub struct ToolSet {
    pen: PenTool,
    eraser: EraserTool,
    line: ShapeTool,
    rectangle: ShapeTool,
    circle: ShapeTool,
    arrow: ShapeTool,
    text: TextTool,
}

impl ToolSet {
    pub fn new() -> Self {
        Self {
            pen: PenTool::new(),
            eraser: EraserTool::new(),
            line: ShapeTool::new(ShapeKind::Line),
            rectangle: ShapeTool::new(ShapeKind::Rectangle),
            circle: ShapeTool::new(ShapeKind::Circle),
            arrow: ShapeTool::new(ShapeKind::Arrow),
            text: TextTool::new(),
        }
    }

    pub fn get_mut(&mut self, kind: ToolKind) -> &mut dyn Tool {
        match kind {
            ToolKind::Pen => &mut self.pen,
            ToolKind::Eraser => &mut self.eraser,
            ToolKind::Line => &mut self.line,
            ToolKind::Rectangle => &mut self.rectangle,
            ToolKind::Circle => &mut self.circle,
            ToolKind::Arrow => &mut self.arrow,
            ToolKind::Text => &mut self.text,
        }
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new()
    }
}
