mod common;
mod composite;
mod polygon;
mod rectangle;

pub use common::{MIN_POLYGON_SIDES, PrimitiveShape, ShapeId};
pub use composite::CompositeShape;
pub use polygon::RegularPolygon;
pub use rectangle::Rectangle;

use crate::error::{ShapeError, ShapeResult};

/// Common capability set of every shape, leaf or group.
///
/// Groups fan each call out to their children in list order. The child
/// management methods are only meaningful on groups; leaves keep the default
/// implementations, which fail with [`ShapeError::UnsupportedOperation`].
pub trait Shape {
    /// Identity of this shape
    fn id(&self) -> ShapeId;

    /// Human readable kind, also used as the drop tag for leaves
    fn kind_name(&self) -> &'static str;

    /// Set the fill color; channels are clamped into `[0, 255]`
    fn set_color(&mut self, r: i32, g: i32, b: i32);

    /// Move the shape by a whole-unit offset
    fn translate(&mut self, dx: i32, dy: i32);

    /// Add `angle` degrees to the accumulated rotation
    fn rotate(&mut self, angle: f32);

    /// Set the corner rounding radius; negative values become zero
    fn set_rounded_edge(&mut self, round: f32);

    /// Append a child to the end of a group
    fn add(&mut self, _child: ShapeType) -> ShapeResult<()> {
        Err(unsupported("add", self.kind_name()))
    }

    /// Detach the first child with the given id, `Ok(None)` when absent
    fn remove(&mut self, _child: ShapeId) -> ShapeResult<Option<ShapeType>> {
        Err(unsupported("remove", self.kind_name()))
    }

    /// Child at insertion position `index`
    fn get_child(&self, _index: usize) -> ShapeResult<&ShapeType> {
        Err(unsupported("get_child", self.kind_name()))
    }
}

fn unsupported(operation: &'static str, kind: &'static str) -> ShapeError {
    ShapeError::UnsupportedOperation { operation, kind }
}

/// Every concrete kind of shape the editor knows about
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Rectangle(Rectangle),
    Polygon(RegularPolygon),
    Group(CompositeShape),
}

impl ShapeType {
    /// Transform state of a leaf; groups have none of their own
    pub fn primitive(&self) -> Option<&PrimitiveShape> {
        match self {
            ShapeType::Rectangle(r) => Some(r.base()),
            ShapeType::Polygon(p) => Some(p.base()),
            ShapeType::Group(_) => None,
        }
    }

    pub fn primitive_mut(&mut self) -> Option<&mut PrimitiveShape> {
        match self {
            ShapeType::Rectangle(r) => Some(r.base_mut()),
            ShapeType::Polygon(p) => Some(p.base_mut()),
            ShapeType::Group(_) => None,
        }
    }

    /// True if this shape, or any shape nested below it, has the given id
    pub fn contains_id(&self, id: ShapeId) -> bool {
        match self {
            ShapeType::Group(g) => g.contains_id(id),
            leaf => leaf.id() == id,
        }
    }

    /// True if this shape is, or nests, a group with the given id
    pub(crate) fn group_ids_include(&self, id: ShapeId) -> bool {
        match self {
            ShapeType::Group(g) => {
                g.id() == id || g.children().iter().any(|c| c.group_ids_include(id))
            }
            _ => false,
        }
    }
}

impl Shape for ShapeType {
    fn id(&self) -> ShapeId {
        match self {
            ShapeType::Rectangle(r) => r.id(),
            ShapeType::Polygon(p) => p.id(),
            ShapeType::Group(g) => g.id(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            ShapeType::Rectangle(r) => r.kind_name(),
            ShapeType::Polygon(p) => p.kind_name(),
            ShapeType::Group(g) => g.kind_name(),
        }
    }

    fn set_color(&mut self, r: i32, g: i32, b: i32) {
        match self {
            ShapeType::Rectangle(rect) => rect.set_color(r, g, b),
            ShapeType::Polygon(poly) => poly.set_color(r, g, b),
            ShapeType::Group(group) => group.set_color(r, g, b),
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            ShapeType::Rectangle(r) => r.translate(dx, dy),
            ShapeType::Polygon(p) => p.translate(dx, dy),
            ShapeType::Group(g) => g.translate(dx, dy),
        }
    }

    fn rotate(&mut self, angle: f32) {
        match self {
            ShapeType::Rectangle(r) => r.rotate(angle),
            ShapeType::Polygon(p) => p.rotate(angle),
            ShapeType::Group(g) => g.rotate(angle),
        }
    }

    fn set_rounded_edge(&mut self, round: f32) {
        match self {
            ShapeType::Rectangle(r) => r.set_rounded_edge(round),
            ShapeType::Polygon(p) => p.set_rounded_edge(round),
            ShapeType::Group(g) => g.set_rounded_edge(round),
        }
    }

    fn add(&mut self, child: ShapeType) -> ShapeResult<()> {
        match self {
            ShapeType::Rectangle(r) => r.add(child),
            ShapeType::Polygon(p) => p.add(child),
            ShapeType::Group(g) => g.add(child),
        }
    }

    fn remove(&mut self, child: ShapeId) -> ShapeResult<Option<ShapeType>> {
        match self {
            ShapeType::Rectangle(r) => r.remove(child),
            ShapeType::Polygon(p) => p.remove(child),
            ShapeType::Group(g) => g.remove(child),
        }
    }

    fn get_child(&self, index: usize) -> ShapeResult<&ShapeType> {
        match self {
            ShapeType::Rectangle(r) => r.get_child(index),
            ShapeType::Polygon(p) => p.get_child(index),
            ShapeType::Group(g) => g.get_child(index),
        }
    }
}

impl From<Rectangle> for ShapeType {
    fn from(rect: Rectangle) -> Self {
        ShapeType::Rectangle(rect)
    }
}

impl From<RegularPolygon> for ShapeType {
    fn from(poly: RegularPolygon) -> Self {
        ShapeType::Polygon(poly)
    }
}

impl From<CompositeShape> for ShapeType {
    fn from(group: CompositeShape) -> Self {
        ShapeType::Group(group)
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use egui::{Color32, Pos2};

    /// Create a new rectangle with its top-left corner at `position`
    pub fn create_rectangle(
        position: Pos2,
        width: u32,
        height: u32,
        color: Color32,
    ) -> ShapeResult<ShapeType> {
        Rectangle::new(position, width, height, color).map(ShapeType::Rectangle)
    }

    /// Create a new regular polygon centered on `center`
    pub fn create_polygon(
        center: Pos2,
        nb_sides: u32,
        side_length: u32,
        color: Color32,
    ) -> ShapeResult<ShapeType> {
        RegularPolygon::new(center, nb_sides, side_length, color).map(ShapeType::Polygon)
    }

    /// Create a group owning `children` in the given order
    pub fn create_group(children: impl IntoIterator<Item = ShapeType>) -> ShapeResult<ShapeType> {
        let mut group = CompositeShape::new();
        for child in children {
            group.add(child)?;
        }
        Ok(ShapeType::Group(group))
    }
}
