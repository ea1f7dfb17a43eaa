use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{validate_figure_size, ConfigError, RenderConfig, DEFAULT_REFLECTIONS};
use crate::shapes::{Rgb, ShapeKind};
use crate::KaleidoscopeApp;

/// Returns the path to the settings file: `~/.config/kaleido-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("kaleido-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files. The shape list itself is never saved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub show_settings: bool,

    // Rendering
    pub reflections: i32,
    pub visible: BTreeSet<ShapeKind>,
    pub background: Rgb,

    // Motion
    pub figure_size: i32,
    pub shapes_per_kind: usize,
    pub speed: f32,
    pub paused: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_settings: true,

            reflections: DEFAULT_REFLECTIONS as i32,
            visible: BTreeSet::from([ShapeKind::Triangle]),
            background: Rgb::CYAN,

            figure_size: 20,
            shapes_per_kind: 2,
            speed: 1.0,
            paused: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Build a validated render config from the stored values.
    ///
    /// The canvas size is left at zero; the canvas widget fills it in.
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        validate_figure_size(self.figure_size)?;
        RenderConfig::new(self.reflections, self.visible.iter().copied(), Default::default())
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &KaleidoscopeApp) -> Self {
        Self {
            show_settings: app.show_settings,

            reflections: app.config.reflections() as i32,
            visible: app.config.visible_kinds().collect(),
            background: app.canvas.renderer.background,

            figure_size: app.figure_size,
            shapes_per_kind: app.shapes_per_kind,
            speed: app.animator.speed,
            paused: app.paused,
        }
    }

    /// Apply loaded settings to the running application.
    ///
    /// Values that fail validation are logged and replaced by defaults.
    pub fn apply(&self, app: &mut KaleidoscopeApp) {
        let (config, figure_size) = match self.render_config() {
            Ok(config) => (config, self.figure_size),
            Err(e) => {
                log::warn!("Ignoring stored render settings: {}", e);
                let defaults = Self::default();
                (RenderConfig::default(), defaults.figure_size)
            }
        };

        app.show_settings = self.show_settings;
        app.config = config;
        app.canvas.renderer.background = self.background;
        app.figure_size = figure_size;
        app.shapes_per_kind = self.shapes_per_kind;
        app.animator.speed = self.speed;
        app.paused = self.paused;

        app.needs_respawn = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("kaleido-rs-test-{}-{}", std::process::id(), name));
        path.push("settings.json");
        path
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{ "reflections": 12 }"#).unwrap();
        assert_eq!(settings.reflections, 12);
        assert_eq!(settings.figure_size, 20);
        assert!(settings.visible.contains(&ShapeKind::Triangle));
    }

    #[test]
    fn test_invalid_reflections_fail_validation() {
        let settings = AppSettings {
            reflections: 0,
            ..Default::default()
        };
        assert_eq!(settings.render_config(), Err(ConfigError::InvalidReflections(0)));

        let settings = AppSettings {
            figure_size: -5,
            ..Default::default()
        };
        assert_eq!(settings.render_config(), Err(ConfigError::InvalidFigureSize(-5)));
    }

    #[test]
    fn test_render_config_from_settings() {
        let settings = AppSettings {
            reflections: 5,
            visible: BTreeSet::from([ShapeKind::Ball, ShapeKind::Diamond]),
            ..Default::default()
        };
        let config = settings.render_config().unwrap();
        assert_eq!(config.reflections(), 5);
        assert!(config.is_visible(ShapeKind::Ball));
        assert!(config.is_visible(ShapeKind::Diamond));
        assert!(!config.is_visible(ShapeKind::Triangle));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = AppSettings {
            reflections: 16,
            background: Rgb::new(10, 20, 30),
            paused: true,
            ..Default::default()
        };
        settings.save_to(&path);
        assert_eq!(AppSettings::load_from(&path), settings);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let path = temp_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
