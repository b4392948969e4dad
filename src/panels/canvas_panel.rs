use eframe::egui;

use crate::WhiteboardApp;
use crate::engine::{MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH, SURFACE_PADDING};
use crate::settings::FontFamily;

pub fn canvas_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();

        // The surface follows the panel's content box minus a fixed padding,
        // floored at the minimum size. Content survives the resize.
        let width = (available.width() - SURFACE_PADDING).max(MIN_SURFACE_WIDTH as f32) as u32;
        let height = (available.height() - SURFACE_PADDING).max(MIN_SURFACE_HEIGHT as f32) as u32;
        if let Err(err) = app.engine.resize(width, height) {
            log::error!("surface resize failed: {err}");
        }

        let canvas_rect = egui::Rect::from_min_size(
            available.min + egui::vec2(SURFACE_PADDING * 0.5, SURFACE_PADDING * 0.5),
            egui::vec2(app.engine.width() as f32, app.engine.height() as f32),
        );
        app.engine.set_surface_origin(canvas_rect.min);

        // The confirmation dialog owns the pointer while it is up.
        if !app.show_clear_confirm {
            app.route_pointer_input(ctx, canvas_rect);
        }

        if app.engine.take_dirty() {
            app.renderer.upload(ctx, app.engine.surface());
        }
        app.renderer.paint(ui.painter(), canvas_rect);

        if let Some(pos) = ctx.pointer_latest_pos() {
            if canvas_rect.contains(pos) {
                ctx.set_cursor_icon(app.engine.cursor_icon());
            }
        }

        text_overlay(app, ctx, canvas_rect);
    });
}

/// Floating single-line editor for a pending text placement.
/// Enter commits the text onto the surface, Escape discards it.
fn text_overlay(app: &mut WhiteboardApp, ctx: &egui::Context, canvas_rect: egui::Rect) {
    let (anchor, color, font_size, family) = match app.engine.text_buffer() {
        Some(buffer) => (
            buffer.anchor,
            buffer.color(),
            buffer.font_size(),
            buffer.font_family(),
        ),
        None => return,
    };

    let mut commit = false;
    let mut cancel = false;
    let screen_pos = canvas_rect.min + anchor.to_vec2();
    let font_id = match family {
        FontFamily::SansSerif => egui::FontId::proportional(font_size),
        FontFamily::Monospace => egui::FontId::monospace(font_size),
    };

    egui::Area::new(egui::Id::new("text_entry_overlay"))
        .fixed_pos(screen_pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let Some(buffer) = app.engine.text_buffer_mut() else {
                return;
            };
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer.text)
                    .font(font_id)
                    .text_color(color)
                    .desired_width(240.0),
            );
            response.request_focus();
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                cancel = true;
            } else if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                commit = true;
            }
        });

    if commit {
        app.engine.commit_text();
    }
    if cancel {
        app.engine.cancel_text();
    }
}
