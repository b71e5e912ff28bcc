use egui::Pos2;

use crate::shape::{Rectangle, RegularPolygon, ShapeType};

/// Returns true if `point` lies inside the visual extent of `shape`.
///
/// Groups contain a point when any child does, probing the topmost child
/// first.
pub fn hit_test(shape: &ShapeType, point: Pos2) -> bool {
    match shape {
        ShapeType::Rectangle(rect) => rectangle_contains(rect, point),
        ShapeType::Polygon(poly) => polygon_contains(poly, point),
        ShapeType::Group(group) => group
            .children()
            .iter()
            .rev()
            .any(|child| hit_test(child, point)),
    }
}

/// Index of the topmost shape in paint-ordered `shapes` containing `point`
pub fn topmost_hit(shapes: &[ShapeType], point: Pos2) -> Option<usize> {
    shapes.iter().rposition(|shape| hit_test(shape, point))
}

/// Inclusive axis-aligned box test
fn rectangle_contains(rect: &Rectangle, point: Pos2) -> bool {
    let min = rect.base().position();
    let max_x = min.x + rect.width() as f32;
    let max_y = min.y + rect.height() as f32;
    min.x <= point.x && point.x <= max_x && min.y <= point.y && point.y <= max_y
}

/// Circle of radius `side_length` around the center, not the exact outline
fn polygon_contains(poly: &RegularPolygon, point: Pos2) -> bool {
    let radius = poly.side_length() as f32;
    poly.center().distance_sq(point) <= radius * radius
}
