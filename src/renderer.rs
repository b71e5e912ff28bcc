// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::config::EditorConfig;
use crate::scene::SceneModel;
use crate::shape::{Rectangle, RegularPolygon, Shape, ShapeType};

const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 200, 0);
const TRASH_FILL: Color32 = Color32::from_rgb(235, 235, 235);
const TRASH_HOVER_FILL: Color32 = Color32::from_rgb(255, 190, 190);

/// Paints the scene back-to-front onto an egui painter
#[derive(Debug, Clone)]
pub struct Renderer {
    outline: Stroke,
    base_rounding: f32,
    background: Color32,
    highlight_selection: bool,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            outline: Stroke::new(config.outline_width, Color32::BLACK),
            base_rounding: config.base_rounding,
            background: config.background_color(),
            highlight_selection: config.highlight_selection,
        }
    }

    /// Renders the canvas: background, shapes in paint order, then the trash.
    ///
    /// Scene coordinates are relative to `canvas.min`.
    pub fn render(
        &self,
        painter: &Painter,
        canvas: Rect,
        scene: &SceneModel,
        trash: Rect,
        trash_hovered: bool,
    ) {
        painter.rect_filled(canvas, 0.0, self.background);

        let offset = canvas.min.to_vec2();
        for shape in scene.shapes() {
            self.paint_shape(painter, shape, offset);
        }

        if self.highlight_selection {
            if let Some(selected) = scene.selected() {
                self.paint_highlight(painter, selected, offset);
            }
        }

        self.paint_trash(painter, trash.translate(offset), trash_hovered);
    }

    fn paint_shape(&self, painter: &Painter, shape: &ShapeType, offset: Vec2) {
        match shape {
            ShapeType::Rectangle(rect) => {
                let screen_rect = rect.rect().translate(offset);
                let rounding = self.rounding_for(rect);
                painter.rect_filled(screen_rect, rounding, rect.base().color());
                painter.rect_stroke(screen_rect, rounding, self.outline);
            }
            ShapeType::Polygon(poly) => {
                painter.add(egui::Shape::convex_polygon(
                    screen_vertices(poly, offset),
                    poly.base().color(),
                    self.outline,
                ));
            }
            ShapeType::Group(group) => {
                for child in group.children() {
                    self.paint_shape(painter, child, offset);
                }
            }
        }
    }

    fn paint_highlight(&self, painter: &Painter, shape: &ShapeType, offset: Vec2) {
        let stroke = Stroke::new(self.outline.width + 2.0, HIGHLIGHT_COLOR);
        match shape {
            ShapeType::Rectangle(rect) => {
                let screen_rect = rect.rect().translate(offset).expand(2.0);
                painter.rect_stroke(screen_rect, self.rounding_for(rect), stroke);
            }
            ShapeType::Polygon(poly) => {
                painter.add(egui::Shape::closed_line(screen_vertices(poly, offset), stroke));
            }
            ShapeType::Group(group) => {
                for child in group.children() {
                    self.paint_highlight(painter, child, offset);
                }
            }
        }
    }

    fn paint_trash(&self, painter: &Painter, trash: Rect, hovered: bool) {
        let fill = if hovered { TRASH_HOVER_FILL } else { TRASH_FILL };
        painter.rect_filled(trash, 6.0, fill);
        painter.rect_stroke(trash, 6.0, Stroke::new(1.0, Color32::DARK_GRAY));
        painter.text(
            trash.center(),
            Align2::CENTER_CENTER,
            "🗑 Trash",
            FontId::proportional(14.0),
            Color32::DARK_GRAY,
        );
    }

    fn rounding_for(&self, rect: &Rectangle) -> f32 {
        self.base_rounding + rect.base().rounded_edge()
    }
}

fn screen_vertices(poly: &RegularPolygon, offset: Vec2) -> Vec<Pos2> {
    poly.vertices().into_iter().map(|v| v + offset).collect()
}

/// Short description of a shape for the status bar
pub fn describe(shape: &ShapeType) -> String {
    match shape {
        ShapeType::Rectangle(rect) => {
            let pos = rect.base().position();
            format!("Rectangle {}×{} at ({:.0}, {:.0})", rect.width(), rect.height(), pos.x, pos.y)
        }
        ShapeType::Polygon(poly) => {
            let center = poly.center();
            format!(
                "Polygon {} sides of {} at ({:.0}, {:.0})",
                poly.nb_sides(),
                poly.side_length(),
                center.x,
                center.y
            )
        }
        ShapeType::Group(group) => format!("{} of {} shapes", group.kind_name(), group.len()),
    }
}
