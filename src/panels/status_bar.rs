use eframe::egui;

use crate::ShapeEditorApp;
use crate::renderer;

pub fn status_bar(app: &ShapeEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Shapes: {}", app.scene().len()));
            ui.separator();
            match app.scene().selected() {
                Some(shape) => ui.label(format!("Dragging {}", renderer::describe(shape))),
                None => ui.label("Idle"),
            };
        });
    });
}
