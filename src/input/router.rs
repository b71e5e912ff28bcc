use egui::Rect;

use crate::scene::SceneModel;

use super::InputEvent;

/// Routes a pointer event onto the scene state machine.
///
/// Presses only start a drag inside the canvas; moves and releases are
/// forwarded wherever they happen so a drag can leave the canvas and come
/// back. Returns true when the scene changed.
pub fn route_event(event: &InputEvent, scene: &mut SceneModel, trash: Rect) -> bool {
    match *event {
        InputEvent::PointerDown { location } => {
            location.is_in_canvas && scene.select_at(location.position).is_some()
        }
        InputEvent::PointerMove { location } => scene.drag_to(location.position),
        InputEvent::PointerUp { location } => {
            let was_dragging = scene.selected_id().is_some();
            scene.release_at(location.position, trash);
            was_dragging
        }
    }
}
