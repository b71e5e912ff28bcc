use egui::{Pos2, Rect, Vec2};
use log::{debug, info};

use crate::geometry::hit_testing;
use crate::shape::{Shape, ShapeId, ShapeType};

/// Pointer interaction state of the scene
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A top-level shape is being dragged
    Dragging {
        selected: ShapeId,
        /// Last pointer position seen during the drag
        anchor: Pos2,
    },
}

/// Ordered top-level shapes plus the drag state machine.
///
/// Shapes later in the list paint on top, so hit-testing walks the list in
/// reverse. The selection is kept as a [`ShapeId`] and is cleared whenever
/// the selected shape leaves the scene.
#[derive(Debug, Default)]
pub struct SceneModel {
    shapes: Vec<ShapeType>,
    state: InteractionState,
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level shapes in paint order
    pub fn shapes(&self) -> &[ShapeType] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        match self.state {
            InteractionState::Dragging { selected, .. } => Some(selected),
            InteractionState::Idle => None,
        }
    }

    pub fn selected(&self) -> Option<&ShapeType> {
        self.selected_id().and_then(|id| self.find_shape(id))
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut ShapeType> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// Put a shape on top of everything else
    pub fn add_shape(&mut self, shape: ShapeType) -> ShapeId {
        let id = shape.id();
        info!("Scene: added {} {}", shape.kind_name(), id);
        self.shapes.push(shape);
        id
    }

    /// Remove a top-level shape by id; absent ids are ignored
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<ShapeType> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        let removed = self.shapes.remove(index);
        if self.selected_id() == Some(id) {
            self.state = InteractionState::Idle;
        }
        info!("Scene: removed {} {}", removed.kind_name(), id);
        Some(removed)
    }

    /// Drop every shape and return to `Idle`
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.state = InteractionState::Idle;
    }

    /// Pointer down: select the topmost shape under `point` and start dragging it
    pub fn select_at(&mut self, point: Pos2) -> Option<ShapeId> {
        if let InteractionState::Dragging { selected, .. } = self.state {
            debug!("Scene: pointer down during drag of {selected}, restarting gesture");
            self.state = InteractionState::Idle;
        }

        let index = hit_testing::topmost_hit(&self.shapes, point)?;
        let selected = self.shapes[index].id();
        debug!("Scene: Idle -> Dragging {selected} at {point:?}");
        self.state = InteractionState::Dragging {
            selected,
            anchor: point,
        };
        Some(selected)
    }

    /// Pointer move: translate the selection by the distance since the last anchor.
    ///
    /// The distance is rounded to whole units and the anchor advances by the
    /// applied amount, so sub-unit motion carries over to the next move.
    /// Returns false when nothing is being dragged.
    pub fn drag_to(&mut self, point: Pos2) -> bool {
        let InteractionState::Dragging { selected, anchor } = self.state else {
            return false;
        };

        let delta = (point - anchor).round();
        let (dx, dy) = (delta.x as i32, delta.y as i32);
        match self.find_shape_mut(selected) {
            Some(shape) => shape.translate(dx, dy),
            None => {
                self.state = InteractionState::Idle;
                return false;
            }
        }
        self.state = InteractionState::Dragging {
            selected,
            anchor: anchor + Vec2::new(dx as f32, dy as f32),
        };
        true
    }

    /// Pointer up: end the drag, deleting the selection if released over `trash`.
    ///
    /// Returns the shape removed by the trash, if any.
    pub fn release_at(&mut self, point: Pos2, trash: Rect) -> Option<ShapeType> {
        let InteractionState::Dragging { selected, .. } = self.state else {
            return None;
        };
        self.state = InteractionState::Idle;
        debug!("Scene: Dragging {selected} -> Idle at {point:?}");

        if trash.contains(point) {
            self.remove_shape(selected)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::factory;
    use egui::Color32;

    fn square(min: Pos2, side: u32) -> ShapeType {
        factory::create_rectangle(min, side, side, Color32::BLUE).unwrap()
    }

    fn trash() -> Rect {
        Rect::from_min_size(Pos2::new(500.0, 500.0), Vec2::splat(50.0))
    }

    #[test]
    fn starts_idle() {
        let scene = SceneModel::new();
        assert_eq!(scene.state(), InteractionState::Idle);
        assert!(scene.selected().is_none());
    }

    #[test]
    fn miss_stays_idle() {
        let mut scene = SceneModel::new();
        scene.add_shape(square(Pos2::ZERO, 10));
        assert_eq!(scene.select_at(Pos2::new(50.0, 50.0)), None);
        assert_eq!(scene.state(), InteractionState::Idle);
        assert!(!scene.drag_to(Pos2::new(60.0, 60.0)));
    }

    #[test]
    fn removing_selected_shape_clears_selection() {
        let mut scene = SceneModel::new();
        let id = scene.add_shape(square(Pos2::ZERO, 10));
        scene.select_at(Pos2::new(1.0, 1.0));
        assert!(scene.remove_shape(id).is_some());
        assert_eq!(scene.state(), InteractionState::Idle);
        assert!(scene.remove_shape(id).is_none());
    }

    #[test]
    fn release_without_drag_is_noop() {
        let mut scene = SceneModel::new();
        scene.add_shape(square(Pos2::new(510.0, 510.0), 10));
        assert!(scene.release_at(Pos2::new(520.0, 520.0), trash()).is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn second_press_restarts_gesture() {
        let mut scene = SceneModel::new();
        let rect = scene.add_shape(square(Pos2::ZERO, 10));
        let poly = factory::create_polygon(Pos2::new(100.0, 100.0), 6, 20, Color32::RED).unwrap();
        let poly = scene.add_shape(poly);

        assert_eq!(scene.select_at(Pos2::new(5.0, 5.0)), Some(rect));
        assert_eq!(scene.select_at(Pos2::new(100.0, 100.0)), Some(poly));
        assert_eq!(scene.select_at(Pos2::new(300.0, 300.0)), None);
        assert_eq!(scene.state(), InteractionState::Idle);
    }

    #[test]
    fn sub_unit_motion_carries_over() {
        let mut scene = SceneModel::new();
        let id = scene.add_shape(square(Pos2::ZERO, 10));
        scene.select_at(Pos2::new(5.0, 5.0));

        assert!(scene.drag_to(Pos2::new(5.4, 5.0)));
        assert_eq!(scene.find_shape(id).unwrap().primitive().unwrap().position(), Pos2::ZERO);
        assert!(scene.drag_to(Pos2::new(5.8, 5.0)));
        let moved = scene.find_shape(id).unwrap().primitive().unwrap().position();
        assert_eq!(moved, Pos2::new(1.0, 0.0));
    }
}
