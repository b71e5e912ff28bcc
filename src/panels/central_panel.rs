use eframe::egui::{self, DragAndDrop};

use crate::ShapeEditorApp;
use crate::drop::{self, DropOutcome, ShapeTag};
use crate::input::route_event;

/// Canvas: drop zone for new shapes, pointer routing and painting
pub fn central_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let canvas = response.rect;
            app.input.set_canvas_rect(canvas);
            let trash = app.config.trash_rect(canvas.size());

            // A foreign payload released over the canvas is turned away
            let foreign_payload = DragAndDrop::has_any_payload(ctx)
                && !DragAndDrop::has_payload_of_type::<ShapeTag>(ctx);
            let released = ctx.input(|i| i.pointer.any_released());
            if let Some(pos) = ctx.pointer_latest_pos() {
                let at = app.input.make_location(pos).position;
                if let Some(tag) = response.dnd_release_payload::<ShapeTag>() {
                    let outcome = drop::handle_drop(&mut app.scene, Some(tag.as_ref()), at);
                    if let DropOutcome::Created(id) = outcome {
                        log::debug!("Created shape {id} from toolbar drop");
                    }
                } else if foreign_payload && released && response.contains_pointer() {
                    drop::handle_drop(&mut app.scene, None, at);
                    DragAndDrop::clear_payload(ctx);
                }
            }

            let mut changed = false;
            for event in app.input.process_input(ctx) {
                changed |= route_event(&event, &mut app.scene, trash);
            }
            if changed {
                ctx.request_repaint();
            }

            let trash_hovered = app.scene.selected_id().is_some()
                && ctx
                    .pointer_latest_pos()
                    .is_some_and(|pos| trash.contains(app.input.make_location(pos).position));
            app.renderer
                .render(&painter, canvas, &app.scene, trash, trash_hovered);
        });
}
