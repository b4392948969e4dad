use egui::{Color32, CursorIcon};
use serde::{Deserialize, Serialize};

/// The tools a user can pick from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Arrow,
    Text,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Arrow,
        ToolKind::Text,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Pen => "Pen",
            ToolKind::Eraser => "Eraser",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Arrow => "Arrow",
            ToolKind::Text => "Text",
        }
    }

    /// Cursor hint the host should show while this tool is active.
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            ToolKind::Pen | ToolKind::Eraser => CursorIcon::Default,
            ToolKind::Text => CursorIcon::Text,
            _ => CursorIcon::Crosshair,
        }
    }

    /// Shape-preview tools redraw their whole shape every pointer move.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            ToolKind::Line | ToolKind::Rectangle | ToolKind::Circle | ToolKind::Arrow
        )
    }
}

/// Font families available for the text tool, resolved against the embedded
/// egui fonts by [`crate::fonts::FontBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Monospace,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::SansSerif, FontFamily::Monospace];

    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Sans-serif",
            FontFamily::Monospace => "Monospace",
        }
    }
}

/// Shared drawing configuration read by the active tool during a stroke.
///
/// Mutated only through the setters below. Changing a setting mid-gesture is
/// allowed and takes effect on the next drawn segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    tool: ToolKind,
    color: Color32,
    brush_size: f32,
    font_size: f32,
    font_family: FontFamily,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pen,
            color: Color32::BLACK,
            brush_size: 5.0,
            font_size: 24.0,
            font_family: FontFamily::SansSerif,
        }
    }
}

impl ToolSettings {
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Brush size is kept at one pixel or more.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size.max(1.0);
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.max(1.0);
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_family = family;
    }
}
