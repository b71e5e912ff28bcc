use std::fmt;

use egui::{Color32, Pos2, Vec2};
use uuid::Uuid;

use crate::error::{ShapeError, ShapeResult};

/// Smallest number of sides a regular polygon may have
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Identity of a shape; a clone is a distinct shape and gets a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transform and color state shared by every leaf shape.
///
/// Cloning mints a fresh [`ShapeId`]; equality compares state, not identity.
#[derive(Debug)]
pub struct PrimitiveShape {
    id: ShapeId,
    /// Position the shape was created at
    origin: Pos2,
    /// Whole-unit offset accumulated by `translate`
    offset: [i64; 2],
    color: Color32,
    /// Accumulated rotation in degrees, never wrapped
    rotation: f32,
    center_of_rotation: Pos2,
    /// Total distance travelled; positioning uses `origin` and `offset`
    translation: f32,
    rounded_edge: f32,
}

impl PrimitiveShape {
    pub fn new(position: Pos2, color: Color32) -> Self {
        Self {
            id: ShapeId::new(),
            origin: position,
            offset: [0, 0],
            color,
            rotation: 0.0,
            center_of_rotation: Pos2::ZERO,
            translation: 0.0,
            rounded_edge: 0.0,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.origin + Vec2::new(self.offset[0] as f32, self.offset[1] as f32)
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn center_of_rotation(&self) -> Pos2 {
        self.center_of_rotation
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn rounded_edge(&self) -> f32 {
        self.rounded_edge
    }

    pub fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.color = Color32::from_rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b));
    }

    /// Offsets are whole units so that opposite moves cancel exactly
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.offset[0] += i64::from(dx);
        self.offset[1] += i64::from(dy);
        self.translation += (dx as f32).hypot(dy as f32);
    }

    pub fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
    }

    pub fn set_center_of_rotation(&mut self, center: Pos2) {
        self.center_of_rotation = center;
    }

    pub fn set_rounded_edge(&mut self, round: f32) {
        // NaN fails the comparison and lands on zero too
        self.rounded_edge = if round > 0.0 { round } else { 0.0 };
    }
}

impl Clone for PrimitiveShape {
    fn clone(&self) -> Self {
        Self {
            id: ShapeId::new(),
            origin: self.origin,
            offset: self.offset,
            color: self.color,
            rotation: self.rotation,
            center_of_rotation: self.center_of_rotation,
            translation: self.translation,
            rounded_edge: self.rounded_edge,
        }
    }
}

impl PartialEq for PrimitiveShape {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
            && self.color == other.color
            && self.rotation == other.rotation
            && self.center_of_rotation == other.center_of_rotation
            && self.translation == other.translation
            && self.rounded_edge == other.rounded_edge
    }
}

/// Clamps a color channel into `[0, 255]`
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Validates that a geometric dimension is strictly positive
pub(crate) fn validate_positive(name: &str, value: u32) -> ShapeResult<()> {
    if value == 0 {
        Err(ShapeError::InvalidGeometry(format!("{name} must be greater than zero")))
    } else {
        Ok(())
    }
}
