use eframe::egui;

use crate::engine::{EXPORT_FILE_NAME, MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH, Whiteboard};
use crate::error::SurfaceError;
use crate::file_handler::FileHandler;
use crate::fonts::FontBook;
use crate::input::{PointerPhase, PointerSource, RawPointerEvent};
use crate::panels;
use crate::renderer::Renderer;
use crate::settings::ToolSettings;

/// The eframe shell around the whiteboard engine.
///
/// All heavy lifting happens in [`Whiteboard`]; this type wires panels,
/// dialogs and raw input into it and persists the tool settings.
pub struct WhiteboardApp {
    pub(crate) engine: Whiteboard,
    pub(crate) renderer: Renderer,
    pub(crate) file_handler: FileHandler,
    pub(crate) show_clear_confirm: bool,
    pub(crate) status: Option<String>,
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SurfaceError> {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let engine = Whiteboard::new(
            MIN_SURFACE_WIDTH,
            MIN_SURFACE_HEIGHT,
            settings,
            FontBook::from_egui_defaults(),
        )?;
        Ok(Self {
            engine,
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            show_clear_confirm: false,
            status: None,
        })
    }

    /// Translate this frame's raw egui events into the engine's pointer
    /// stream. Touch screens report both touch events and synthesized
    /// pointer events, so when touches are present the pointer stream is
    /// skipped for the frame.
    pub(crate) fn route_pointer_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let events = ctx.input(|i| i.events.clone());
        let has_touch = events
            .iter()
            .any(|event| matches!(event, egui::Event::Touch { .. }));

        // A gesture may only begin on the canvas itself, not on floating
        // widgets above it (the text overlay, dialogs).
        let begin_allowed = |pos: egui::Pos2| {
            canvas_rect.contains(pos)
                && !ctx
                    .layer_id_at(pos)
                    .is_some_and(|layer| layer.order != egui::Order::Background)
        };

        for event in events {
            match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    let source = PointerSource::Touch(id.0);
                    match phase {
                        egui::TouchPhase::Start => {
                            if begin_allowed(pos) {
                                self.engine.handle_pointer(RawPointerEvent {
                                    source,
                                    phase: PointerPhase::Begin,
                                    device_pos: pos,
                                });
                            }
                        }
                        egui::TouchPhase::Move => {
                            self.engine.handle_pointer(RawPointerEvent {
                                source,
                                phase: PointerPhase::Move,
                                device_pos: pos,
                            });
                        }
                        egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                            self.engine.handle_pointer(RawPointerEvent {
                                source,
                                phase: PointerPhase::End,
                                device_pos: pos,
                            });
                        }
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } if !has_touch => {
                    if pressed {
                        if begin_allowed(pos) {
                            self.engine.handle_pointer(RawPointerEvent {
                                source: PointerSource::Mouse,
                                phase: PointerPhase::Begin,
                                device_pos: pos,
                            });
                        }
                    } else {
                        self.engine.handle_pointer(RawPointerEvent {
                            source: PointerSource::Mouse,
                            phase: PointerPhase::End,
                            device_pos: pos,
                        });
                    }
                }
                egui::Event::PointerMoved(pos) if !has_touch => {
                    if self.engine.gesture_active() && !canvas_rect.contains(pos) {
                        // Leaving the canvas ends the stroke, like the
                        // pointer leaving a drawing area.
                        self.engine.handle_pointer(RawPointerEvent {
                            source: PointerSource::Mouse,
                            phase: PointerPhase::End,
                            device_pos: pos,
                        });
                    } else {
                        self.engine.handle_pointer(RawPointerEvent {
                            source: PointerSource::Mouse,
                            phase: PointerPhase::Move,
                            device_pos: pos,
                        });
                    }
                }
                egui::Event::PointerGone if !has_touch => {
                    if self.engine.gesture_active() {
                        self.engine.handle_pointer(RawPointerEvent {
                            source: PointerSource::Mouse,
                            phase: PointerPhase::End,
                            device_pos: egui::Pos2::ZERO,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    /// Export the drawing as PNG through a save dialog.
    pub(crate) fn export_drawing(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };
        match self.engine.export_png() {
            Ok(bytes) => match std::fs::write(&path, bytes) {
                Ok(()) => {
                    self.status = Some(format!("Saved {}", path.display()));
                }
                Err(err) => {
                    log::error!("failed to write {}: {}", path.display(), err);
                    self.status = Some(format!("Save failed: {err}"));
                }
            },
            Err(err) => {
                log::error!("export failed: {err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    /// Pick an image file and hand its bytes to the engine for import.
    pub(crate) fn import_via_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read(&path) {
            Ok(bytes) => self.engine.begin_image_import(bytes),
            Err(err) => {
                log::error!("failed to read {}: {}", path.display(), err);
                self.status = Some(format!("Import failed: {err}"));
            }
        }
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.engine.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Finished decodes land before anything draws this frame.
        if let Some(result) = self.engine.poll_import() {
            self.status = Some(match result {
                Ok(()) => "Image imported".to_owned(),
                Err(err) => format!("Import failed: {err}"),
            });
        }

        for bytes in self.file_handler.take_dropped_images(ctx) {
            self.engine.begin_image_import(bytes);
        }
        self.file_handler.preview_files_being_dropped(ctx);

        panels::tools_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        if self.show_clear_confirm {
            egui::Window::new("Clear canvas?")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to clear the canvas?");
                    ui.horizontal(|ui| {
                        if ui.button("Clear").clicked() {
                            self.engine.clear();
                            self.show_clear_confirm = false;
                        }
                        if ui.button("Cancel").clicked() {
                            self.show_clear_confirm = false;
                        }
                    });
                });
        }

        // Keep polling while a decode is running in the background.
        if self.engine.import_in_flight() {
            ctx.request_repaint();
        }
    }
}
