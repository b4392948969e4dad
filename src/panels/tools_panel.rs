use eframe::egui;

use crate::WhiteboardApp;
use crate::settings::{FontFamily, ToolKind};

/// Preset swatches shown under the color picker.
const PALETTE: [egui::Color32; 8] = [
    egui::Color32::BLACK,
    egui::Color32::from_rgb(0xe7, 0x4c, 0x3c),
    egui::Color32::from_rgb(0xe6, 0x7e, 0x22),
    egui::Color32::from_rgb(0xf1, 0xc4, 0x0f),
    egui::Color32::from_rgb(0x2e, 0xcc, 0x71),
    egui::Color32::from_rgb(0x34, 0x98, 0xdb),
    egui::Color32::from_rgb(0x9b, 0x59, 0xb6),
    egui::Color32::WHITE,
];

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.engine.settings().tool();
            for kind in ToolKind::ALL {
                if ui.selectable_label(active == kind, kind.label()).clicked() {
                    app.engine.set_tool(kind);
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.engine.settings().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.engine.set_color(color);
                }
            });

            ui.horizontal_wrapped(|ui| {
                for color in PALETTE {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::click());
                    let stroke = if app.engine.settings().color() == color {
                        egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
                    } else {
                        egui::Stroke::new(1.0, egui::Color32::GRAY)
                    };
                    ui.painter().rect_filled(rect, 3.0, color);
                    ui.painter().rect_stroke(rect, 3.0, stroke);
                    if response.clicked() {
                        app.engine.set_color(color);
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Size:");
                let mut size = app.engine.settings().brush_size();
                if ui
                    .add(egui::Slider::new(&mut size, 1.0..=50.0).integer())
                    .changed()
                {
                    app.engine.set_brush_size(size);
                }
            });
            ui.label(format!("{}px", app.engine.settings().brush_size() as u32));

            ui.separator();
            ui.label("Text");

            ui.horizontal(|ui| {
                ui.label("Font size:");
                let mut font_size = app.engine.settings().font_size();
                if ui
                    .add(egui::DragValue::new(&mut font_size).range(8.0..=96.0))
                    .changed()
                {
                    app.engine.set_font_size(font_size);
                }
            });

            let family = app.engine.settings().font_family();
            egui::ComboBox::from_label("Font")
                .selected_text(family.label())
                .show_ui(ui, |ui| {
                    for candidate in FontFamily::ALL {
                        if ui
                            .selectable_label(family == candidate, candidate.label())
                            .clicked()
                        {
                            app.engine.set_font_family(candidate);
                        }
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.engine.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    app.engine.undo();
                }
                if ui
                    .add_enabled(app.engine.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    app.engine.redo();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.show_clear_confirm = true;
                }
                if ui.button("Save").clicked() {
                    app.export_drawing();
                }
                if ui.button("Import").clicked() {
                    app.import_via_dialog();
                }
            });

            if app.engine.import_in_flight() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Importing image...");
                });
            }

            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}
