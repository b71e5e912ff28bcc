use eframe::egui;

use crate::drop::ShapeKind;

/// Toolbar tile standing for one shape kind; it only senses hover so the
/// surrounding drag source receives the drag
pub struct ShapeButton {
    pub kind: ShapeKind,
}

impl ShapeButton {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    fn fill(&self) -> egui::Color32 {
        match self.kind {
            ShapeKind::Rectangle => egui::Color32::from_rgb(0, 120, 215),
            ShapeKind::Polygon => egui::Color32::from_rgb(220, 50, 50),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(110.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() {
                self.fill().gamma_multiply(0.85)
            } else {
                self.fill()
            };
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.kind.tag(),
                egui::FontId::proportional(14.0),
                egui::Color32::WHITE,
            );
        }

        response.on_hover_cursor(egui::CursorIcon::Grab)
    }
}
