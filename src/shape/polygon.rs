use std::f32::consts::TAU;

use egui::{Color32, Pos2, Vec2};

use super::Shape;
use super::common::{self, MIN_POLYGON_SIDES, PrimitiveShape, ShapeId};
use crate::error::{ShapeError, ShapeResult};

/// Regular polygon whose reference point is its center.
///
/// Vertices are never stored; they are derived from the center, the side
/// count and the side length each time they are needed.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    base: PrimitiveShape,
    nb_sides: u32,
    side_length: u32,
}

impl RegularPolygon {
    pub fn new(center: Pos2, nb_sides: u32, side_length: u32, color: Color32) -> ShapeResult<Self> {
        validate_sides(nb_sides)?;
        common::validate_positive("side length", side_length)?;
        Ok(Self {
            base: PrimitiveShape::new(center, color),
            nb_sides,
            side_length,
        })
    }

    pub fn center(&self) -> Pos2 {
        self.base.position()
    }

    pub fn nb_sides(&self) -> u32 {
        self.nb_sides
    }

    pub fn side_length(&self) -> u32 {
        self.side_length
    }

    pub fn set_nb_sides(&mut self, nb_sides: u32) -> ShapeResult<()> {
        validate_sides(nb_sides)?;
        self.nb_sides = nb_sides;
        Ok(())
    }

    pub fn set_side_length(&mut self, side_length: u32) -> ShapeResult<()> {
        common::validate_positive("side length", side_length)?;
        self.side_length = side_length;
        Ok(())
    }

    /// `vertex[i] = center + sideLength * (cos(i*2π/n), sin(i*2π/n))`
    pub fn vertices(&self) -> Vec<Pos2> {
        let center = self.center();
        let radius = self.side_length as f32;
        let step = TAU / self.nb_sides as f32;
        (0..self.nb_sides)
            .map(|i| {
                let angle = i as f32 * step;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect()
    }

    pub fn base(&self) -> &PrimitiveShape {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut PrimitiveShape {
        &mut self.base
    }
}

fn validate_sides(nb_sides: u32) -> ShapeResult<()> {
    if nb_sides < MIN_POLYGON_SIDES {
        Err(ShapeError::InvalidGeometry(format!(
            "a polygon needs at least {MIN_POLYGON_SIDES} sides, got {nb_sides}"
        )))
    } else {
        Ok(())
    }
}

impl Shape for RegularPolygon {
    fn id(&self) -> ShapeId {
        self.base.id()
    }

    fn kind_name(&self) -> &'static str {
        "Polygon"
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
