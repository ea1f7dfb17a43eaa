//! Shape model - a single moving shape as seen by the renderer

use serde::{Deserialize, Serialize};

use super::kind::ShapeKind;

/// 8-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One shape instance
///
/// `x` and `y` are model-space coordinates with the origin at the canvas
/// center. The motion driver owns and mutates models between frames; the
/// renderer only reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeModel {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
    pub kind: ShapeKind,
    /// Figure size in pixels, shared by all models
    pub size: i32,
}

impl ShapeModel {
    pub fn new(kind: ShapeKind, x: i32, y: i32, size: i32, color: Rgb) -> Self {
        Self { x, y, color, kind, size }
    }

    /// Model-space anchors for this shape's kind
    pub fn anchors(&self) -> Vec<(i32, i32)> {
        self.kind.anchors(self.x, self.y, self.size)
    }
}
