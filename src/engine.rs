use egui::{CursorIcon, Pos2};

use crate::decode::{PendingDecode, spawn_decode};
use crate::error::{DecodeError, SurfaceError};
use crate::fonts::FontBook;
use crate::history::History;
use crate::input::{InputRouter, PointerEvent, RawPointerEvent};
use crate::settings::{FontFamily, ToolKind, ToolSettings};
use crate::surface::Surface;
use crate::tools::{TextEditBuffer, Tool, ToolAction, ToolSet};

/// Smallest surface the engine will run at.
pub const MIN_SURFACE_WIDTH: u32 = 300;
pub const MIN_SURFACE_HEIGHT: u32 = 200;

/// Fixed amount subtracted from the hosting container's content box when
/// sizing the surface.
pub const SURFACE_PADDING: f32 = 40.0;

/// Suggested file name for exported drawings.
pub const EXPORT_FILE_NAME: &str = "whiteboard.png";

/// The drawing-and-history engine.
///
/// Owns the surface, the tool strategies, the input router and the undo
/// history, and is driven synchronously from a single input-handling
/// thread. The hosting UI feeds it raw pointer events and configuration
/// signals and reads back pixels, cursor hints and history flags.
pub struct Whiteboard {
    surface: Surface,
    history: History,
    router: InputRouter,
    tools: ToolSet,
    settings: ToolSettings,
    fonts: FontBook,
    text_buffer: Option<TextEditBuffer>,
    pending_decode: Option<PendingDecode>,
    dirty: bool,
}

impl Whiteboard {
    pub fn new(
        width: u32,
        height: u32,
        settings: ToolSettings,
        fonts: FontBook,
    ) -> Result<Self, SurfaceError> {
        let surface = Surface::new(width, height)?;
        let mut history = History::new();
        // Entry 0 is the blank initial canvas; undo never goes past it.
        history.commit(&surface);
        Ok(Self {
            surface,
            history,
            router: InputRouter::new(),
            tools: ToolSet::new(),
            settings,
            fonts,
            text_buffer: None,
            pending_decode: None,
            dirty: true,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Cursor hint for the active tool.
    pub fn cursor_icon(&self) -> CursorIcon {
        self.settings.tool().cursor_icon()
    }

    /// True if the raster changed since the last `take_dirty`.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // --- Configuration signals ---

    pub fn set_tool(&mut self, tool: ToolKind) {
        let previous = self.settings.tool();
        if previous == tool {
            return;
        }
        self.tools.get_mut(previous).deactivate();
        if previous == ToolKind::Text {
            // A pending placement does not survive leaving the text tool.
            self.cancel_text();
        }
        self.settings.set_tool(tool);
        log::info!("tool selected: {}", self.tools.get_mut(tool).name());
    }

    pub fn set_color(&mut self, color: egui::Color32) {
        self.settings.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.settings.set_brush_size(size);
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.settings.set_font_size(size);
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.settings.set_font_family(family);
    }

    // --- Pointer input ---

    /// Device-coordinate position of the surface's top-left corner, used to
    /// translate raw events into surface-local coordinates.
    pub fn set_surface_origin(&mut self, origin: Pos2) {
        self.router.set_origin(origin);
    }

    pub fn gesture_active(&self) -> bool {
        self.router.gesture_active()
    }

    /// Route one raw pointer event through the active tool strategy.
    pub fn handle_pointer(&mut self, raw: RawPointerEvent) {
        let Some(event) = self.router.route(raw) else {
            return;
        };
        let tool = self.tools.get_mut(self.settings.tool());
        let action = match event {
            PointerEvent::Begin(pos) => tool.on_pointer_down(pos, &mut self.surface, &self.settings),
            PointerEvent::Move(pos) => tool.on_pointer_move(pos, &mut self.surface, &self.settings),
            PointerEvent::End => tool.on_pointer_up(&mut self.surface, &self.settings),
        };
        self.dirty = true;
        match action {
            Some(ToolAction::Commit) => self.history.commit(&self.surface),
            Some(ToolAction::OpenTextEditor(pos)) => self.open_text_editor(pos),
            None => {}
        }
    }

    // --- Text entry ---

    /// Open the text-entry overlay at `anchor`, cancelling any pending one.
    pub fn open_text_editor(&mut self, anchor: Pos2) {
        if self.text_buffer.is_some() {
            log::debug!("replacing pending text entry");
        }
        self.text_buffer = Some(TextEditBuffer::new(anchor, &self.settings));
    }

    pub fn text_buffer(&self) -> Option<&TextEditBuffer> {
        self.text_buffer.as_ref()
    }

    pub fn text_buffer_mut(&mut self) -> Option<&mut TextEditBuffer> {
        self.text_buffer.as_mut()
    }

    /// Composite the buffered text onto the surface and record a
    /// checkpoint. Blank buffers are discarded without committing.
    pub fn commit_text(&mut self) {
        let Some(buffer) = self.text_buffer.take() else {
            return;
        };
        if buffer.is_blank() {
            return;
        }
        let Some(font) = self.fonts.get(buffer.font_family()) else {
            log::warn!(
                "no font loaded for {:?}, dropping text entry",
                buffer.font_family()
            );
            return;
        };
        self.surface.fill_text(
            &buffer.text,
            buffer.anchor,
            font,
            buffer.font_size(),
            buffer.color(),
        );
        self.history.commit(&self.surface);
        self.dirty = true;
    }

    pub fn cancel_text(&mut self) {
        self.text_buffer = None;
    }

    // --- History ---

    pub fn undo(&mut self) {
        self.history.undo(&mut self.surface);
        self.dirty = true;
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.surface) {
            self.dirty = true;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Blank the surface and record the cleared state as a checkpoint.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.history.commit(&self.surface);
        self.dirty = true;
    }

    // --- Surface sizing ---

    /// Resize the surface, preserving content. No checkpoint is recorded;
    /// resizes are not edits.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if (width, height) == (self.surface.width(), self.surface.height()) {
            return Ok(());
        }
        self.surface.resize(width, height)?;
        self.dirty = true;
        Ok(())
    }

    // --- Image import ---

    /// Start decoding imported image bytes off-thread. Only one decode may
    /// be in flight; further requests are ignored until it completes.
    pub fn begin_image_import(&mut self, bytes: Vec<u8>) {
        if self.pending_decode.is_some() {
            log::warn!("image decode already in flight, ignoring new import");
            return;
        }
        let dims = (self.surface.width(), self.surface.height());
        self.pending_decode = Some(spawn_decode(bytes, dims));
    }

    pub fn import_in_flight(&self) -> bool {
        self.pending_decode.is_some()
    }

    /// Check the in-flight decode. On success the image is composited
    /// centered and aspect-fit against the surface's current dimensions and
    /// a checkpoint is recorded; on failure the surface is left untouched.
    pub fn poll_import(&mut self) -> Option<Result<(), DecodeError>> {
        let pending = self.pending_decode.as_mut()?;
        let result = pending.poll()?;
        let requested = pending.requested_dimensions();
        self.pending_decode = None;
        match result {
            Ok(image) => {
                let current = (self.surface.width(), self.surface.height());
                if current != requested {
                    // The decode raced a resize; fit math below uses the
                    // fresh dimensions, not the stale ones.
                    log::debug!("surface resized during decode ({requested:?} -> {current:?})");
                }
                self.surface.draw_image_fit(&image);
                self.history.commit(&self.surface);
                self.dirty = true;
                Some(Ok(()))
            }
            Err(err) => {
                log::error!("image import failed: {err}");
                Some(Err(err))
            }
        }
    }

    // --- Export ---

    /// Encode the current drawing as PNG. The conventional file name is
    /// [`EXPORT_FILE_NAME`].
    pub fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.encode_png()
    }
}
