use std::fs;
use std::path::Path;

use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file to load at startup
pub const CONFIG_ENV_VAR: &str = "SHAPE_EDITOR_CONFIG";

/// Editor appearance and trash placement.
///
/// Persisted by eframe on shutdown; missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Trash square edge length, in points
    pub trash_size: f32,
    /// Gap between the trash and the canvas bottom-right corner
    pub trash_margin: f32,
    /// Rounding added to every rectangle on top of its own rounded edge
    pub base_rounding: f32,
    pub outline_width: f32,
    pub background: [u8; 3],
    pub highlight_selection: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            trash_size: 80.0,
            trash_margin: 16.0,
            base_rounding: 7.5,
            outline_width: 1.0,
            background: [255, 255, 255],
            highlight_selection: true,
        }
    }
}

impl EditorConfig {
    /// Load and validate a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.trash_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "trash_size must be positive, got {}",
                self.trash_size
            )));
        }
        for (name, value) in [
            ("trash_margin", self.trash_margin),
            ("base_rounding", self.base_rounding),
            ("outline_width", self.outline_width),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    /// Trash region in canvas-local coordinates for a canvas of `canvas_size`
    pub fn trash_rect(&self, canvas_size: Vec2) -> Rect {
        let size = Vec2::splat(self.trash_size);
        let max = Pos2::new(
            canvas_size.x - self.trash_margin,
            canvas_size.y - self.trash_margin,
        );
        Rect::from_min_max(max - size, max)
    }
}
