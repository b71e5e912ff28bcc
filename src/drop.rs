use std::fmt;
use std::str::FromStr;

use egui::{Color32, Pos2};
use log::{info, warn};

use crate::error::{ShapeResult, UnknownShapeKind};
use crate::scene::SceneModel;
use crate::shape::{ShapeId, ShapeType, factory};

pub const DEFAULT_RECT_WIDTH: u32 = 120;
pub const DEFAULT_RECT_HEIGHT: u32 = 60;
pub const DEFAULT_RECT_COLOR: Color32 = Color32::from_rgb(0, 0, 255);

pub const DEFAULT_POLYGON_SIDES: u32 = 6;
pub const DEFAULT_POLYGON_SIDE_LENGTH: u32 = 50;
pub const DEFAULT_POLYGON_COLOR: Color32 = Color32::from_rgb(255, 0, 0);

/// Kinds of shape the toolbar can create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Polygon];

    /// Tag carried by a drag payload for this kind
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Polygon => "Polygon",
        }
    }

    /// Build a shape of this kind with the default geometry, placed at `at`
    pub fn create_at(self, at: Pos2) -> ShapeResult<ShapeType> {
        match self {
            ShapeKind::Rectangle => factory::create_rectangle(
                at,
                DEFAULT_RECT_WIDTH,
                DEFAULT_RECT_HEIGHT,
                DEFAULT_RECT_COLOR,
            ),
            ShapeKind::Polygon => factory::create_polygon(
                at,
                DEFAULT_POLYGON_SIDES,
                DEFAULT_POLYGON_SIDE_LENGTH,
                DEFAULT_POLYGON_COLOR,
            ),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| UnknownShapeKind(tag.to_owned()))
    }
}

/// Opaque payload packaged when a toolbar drag starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTag(pub String);

impl From<ShapeKind> for ShapeTag {
    fn from(kind: ShapeKind) -> Self {
        Self(kind.tag().to_owned())
    }
}

/// What a drop did to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Created(ShapeId),
    /// The tag named no known kind; the scene is untouched
    Ignored,
    /// The transfer carried no shape tag at all; the scene is untouched
    Rejected,
}

/// Complete a drag-and-drop creation in one step.
///
/// `payload` is `None` when the transfer carried something other than a
/// [`ShapeTag`].
pub fn handle_drop(scene: &mut SceneModel, payload: Option<&ShapeTag>, at: Pos2) -> DropOutcome {
    let Some(ShapeTag(tag)) = payload else {
        warn!("Drop rejected: payload is not a shape tag");
        return DropOutcome::Rejected;
    };

    let kind = match tag.parse::<ShapeKind>() {
        Ok(kind) => kind,
        Err(err) => {
            info!("Drop ignored: {err}");
            return DropOutcome::Ignored;
        }
    };

    match kind.create_at(at) {
        Ok(shape) => {
            info!("Dropped {kind} at {at:?}");
            DropOutcome::Created(scene.add_shape(shape))
        }
        Err(err) => {
            warn!("Drop rejected: {err}");
            DropOutcome::Rejected
        }
    }
}
