use std::env;

use log::{info, warn};

use crate::config::{CONFIG_ENV_VAR, EditorConfig};
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::scene::SceneModel;

/// The editor window: toolbar, canvas and status bar around one scene.
///
/// Only the [`EditorConfig`] survives a restart; the scene always starts empty.
pub struct ShapeEditorApp {
    pub(crate) config: EditorConfig,
    pub(crate) scene: SceneModel,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
}

impl Default for ShapeEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl ShapeEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(load_config(cc.storage))
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            renderer: Renderer::new(&config),
            input: InputHandler::new(egui::Rect::NOTHING),
            scene: SceneModel::new(),
            config,
        }
    }

    pub fn scene(&self) -> &SceneModel {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneModel {
        &mut self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}

/// Config file named by the environment, then the persisted config, then defaults
fn load_config(storage: Option<&dyn eframe::Storage>) -> EditorConfig {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        match EditorConfig::from_json_file(&path) {
            Ok(config) => {
                info!("Loaded config from {path}");
                return config;
            }
            Err(err) => warn!("Ignoring config file {path}: {err}"),
        }
    }

    let persisted = storage.and_then(|s| eframe::get_value::<EditorConfig>(s, eframe::APP_KEY));
    match persisted {
        Some(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("Persisted config rejected, using defaults: {err}");
                EditorConfig::default()
            }
        },
        None => EditorConfig::default(),
    }
}

impl eframe::App for ShapeEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);
    }
}
