#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod drop;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod shape;

pub use app::ShapeEditorApp;
pub use config::EditorConfig;
pub use drop::{DropOutcome, ShapeKind, ShapeTag, handle_drop};
pub use error::{ConfigError, ShapeError, ShapeResult, UnknownShapeKind};
pub use geometry::hit_test;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use scene::{InteractionState, SceneModel};
pub use shape::{CompositeShape, Rectangle, RegularPolygon, Shape, ShapeId, ShapeType};
