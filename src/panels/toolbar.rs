use eframe::egui;

use crate::components::ShapeButton;
use crate::drop::{ShapeKind, ShapeTag};

/// Top bar holding one drag source per shape kind
pub fn toolbar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for kind in ShapeKind::ALL {
                let id = egui::Id::new(("shape_source", kind.tag()));
                ui.dnd_drag_source(id, ShapeTag::from(kind), |ui| {
                    ShapeButton::new(kind).show(ui);
                });
            }
            ui.separator();
            ui.label("Drag a shape onto the canvas. Drop a shape on the trash to delete it.");
        });
    });
}
