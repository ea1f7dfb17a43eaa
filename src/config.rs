//! Render configuration
//!
//! `RenderConfig` is the validated state the renderer reads on every frame:
//! reflection count, which shape kinds are drawn, and the canvas size.
//! The UI mutates it between frames through the setters below.

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use thiserror::Error;

use crate::shapes::ShapeKind;

/// Default number of rotated copies per shape
pub const DEFAULT_REFLECTIONS: u32 = 8;

/// Errors raised when validating configuration values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: reflections must be at least 1 (got {0})")]
    InvalidReflections(i32),

    #[error("Invalid config: figure size must be positive (got {0})")]
    InvalidFigureSize(i32),
}

/// Canvas dimensions in pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Validated rendering configuration
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    reflections: u32,
    visible: BTreeSet<ShapeKind>,
    canvas: CanvasSize,
}

impl Default for RenderConfig {
    /// Eight reflections with only triangles visible
    fn default() -> Self {
        Self {
            reflections: DEFAULT_REFLECTIONS,
            visible: BTreeSet::from([ShapeKind::Triangle]),
            canvas: CanvasSize::default(),
        }
    }
}

impl RenderConfig {
    /// Create a config, rejecting a reflection count below 1
    pub fn new(
        reflections: i32,
        visible: impl IntoIterator<Item = ShapeKind>,
        canvas: CanvasSize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            reflections: validate_reflections(reflections)?,
            visible: visible.into_iter().collect(),
            canvas,
        })
    }

    pub fn reflections(&self) -> u32 {
        self.reflections
    }

    /// Set the reflection count; the config is left unchanged on error
    pub fn set_reflections(&mut self, reflections: i32) -> Result<(), ConfigError> {
        self.reflections = validate_reflections(reflections)?;
        log::debug!("Reflections set to {}", self.reflections);
        Ok(())
    }

    /// Angular spacing between consecutive reflections, `2π / reflections`
    pub fn angle_offset(&self) -> f64 {
        TAU / self.reflections as f64
    }

    pub fn is_visible(&self, kind: ShapeKind) -> bool {
        self.visible.contains(&kind)
    }

    /// Turn drawing of one shape kind on or off
    pub fn set_visible(&mut self, kind: ShapeKind, visible: bool) {
        if visible {
            self.visible.insert(kind);
        } else {
            self.visible.remove(&kind);
        }
    }

    pub fn visible_kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.visible.iter().copied()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn set_canvas_size(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }
}

fn validate_reflections(reflections: i32) -> Result<u32, ConfigError> {
    if reflections < 1 {
        return Err(ConfigError::InvalidReflections(reflections));
    }
    Ok(reflections as u32)
}

/// Check a figure size coming from settings or the UI
pub fn validate_figure_size(size: i32) -> Result<i32, ConfigError> {
    if size < 1 {
        return Err(ConfigError::InvalidFigureSize(size));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.reflections(), 8);
        assert!(config.is_visible(ShapeKind::Triangle));
        assert!(!config.is_visible(ShapeKind::Ball));
        assert!((config.angle_offset() - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_reflections() {
        let mut config = RenderConfig::default();
        assert_eq!(config.set_reflections(0), Err(ConfigError::InvalidReflections(0)));
        assert_eq!(config.set_reflections(-3), Err(ConfigError::InvalidReflections(-3)));
        assert_eq!(config.reflections(), 8);

        let result = RenderConfig::new(0, [ShapeKind::Ball], CanvasSize::new(10, 10));
        assert!(result.is_err());
    }

    #[test]
    fn test_set_reflections() {
        let mut config = RenderConfig::default();
        config.set_reflections(4).unwrap();
        assert!((config.angle_offset() - FRAC_PI_2).abs() < 1e-12);

        config.set_reflections(1).unwrap();
        assert!((config.angle_offset() - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_visibility_toggles_are_independent() {
        let mut config = RenderConfig::default();
        config.set_visible(ShapeKind::Ball, true);
        config.set_visible(ShapeKind::Triangle, false);
        config.set_visible(ShapeKind::Diamond, true);

        let kinds: Vec<_> = config.visible_kinds().collect();
        assert_eq!(kinds, vec![ShapeKind::Ball, ShapeKind::Diamond]);
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::InvalidReflections(0);
        assert_eq!(err.to_string(), "Invalid config: reflections must be at least 1 (got 0)");
        assert!(validate_figure_size(0).is_err());
        assert_eq!(validate_figure_size(20), Ok(20));
    }
}
