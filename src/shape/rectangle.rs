use egui::{Color32, Pos2, Rect, Vec2};

use super::Shape;
use super::common::{self, PrimitiveShape, ShapeId};
use crate::error::ShapeResult;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: PrimitiveShape,
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(position: Pos2, width: u32, height: u32, color: Color32) -> ShapeResult<Self> {
        common::validate_positive("width", width)?;
        common::validate_positive("height", height)?;
        Ok(Self {
            base: PrimitiveShape::new(position, color),
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Replaces both dimensions; nothing changes if either is zero
    pub fn resize(&mut self, width: u32, height: u32) -> ShapeResult<()> {
        common::validate_positive("width", width)?;
        common::validate_positive("height", height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// The extent `[x, x+width] × [y, y+height]`
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(
            self.base.position(),
            Vec2::new(self.width as f32, self.height as f32),
        )
    }

    pub fn base(&self) -> &PrimitiveShape {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut PrimitiveShape {
        &mut self.base
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.base.id()
    }

    fn kind_name(&self) -> &'static str {
        "Rectangle"
    }

    fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.base.set_color(r, g, b);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.base.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f32) {
        self.base.rotate(angle);
    }

    fn set_rounded_edge(&mut self, round: f32) {
        self.base.set_rounded_edge(round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_spans_width_and_height() {
        let rect = Rectangle::new(Pos2::new(5.0, 10.0), 120, 60, Color32::BLUE).unwrap();
        assert_eq!(rect.rect().min, Pos2::new(5.0, 10.0));
        assert_eq!(rect.rect().max, Pos2::new(125.0, 70.0));
    }

    #[test]
    fn invalid_resize_keeps_dimensions() {
        let mut rect = Rectangle::new(Pos2::ZERO, 10, 20, Color32::BLUE).unwrap();
        assert!(rect.resize(0, 5).is_err());
        assert_eq!((rect.width(), rect.height()), (10, 20));

        rect.resize(30, 40).unwrap();
        assert_eq!((rect.width(), rect.height()), (30, 40));
    }
}
