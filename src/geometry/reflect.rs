//! Radial reflection - rotated copies of a shape around the canvas center
//!
//! Each anchor of a shape is converted to polar form once. Copy `div`
//! (for `div` in `1..=reflections`) rotates every anchor by the same
//! `div * angle_offset`, so multi-vertex shapes rotate rigidly. The last copy
//! is a full turn, which lands back on the unrotated shape.
#![allow(dead_code)]

use std::f64::consts::TAU;

use super::pixel::PixelPoint;
use super::polar::Polar;
use crate::config::CanvasSize;
use crate::shapes::{Placement, ShapeKind, ShapeModel};

/// Screen offset added to rotated model-space points for a given kind
///
/// Boxed kinds get `(canvas - size) / 2` so the result is the top-left of a
/// box centered on the rotated point. Polygon kinds get `canvas / 2`.
pub fn screen_origin(kind: ShapeKind, canvas: CanvasSize, size: i32) -> PixelPoint {
    match kind.placement() {
        Placement::Boxed => PixelPoint::new((canvas.width - size) / 2, (canvas.height - size) / 2),
        Placement::Vertices => PixelPoint::new(canvas.width / 2, canvas.height / 2),
    }
}

/// Precomputed reflection state for one shape instance
pub struct Reflector {
    anchors: Vec<Polar>,
    origin: PixelPoint,
    reflections: u32,
    angle_offset: f64,
}

impl Reflector {
    /// Build from raw model-space anchors and a screen origin
    ///
    /// `reflections` must be at least 1; `RenderConfig` guarantees this.
    pub fn from_anchors(anchors: &[(i32, i32)], reflections: u32, origin: PixelPoint) -> Self {
        debug_assert!(reflections >= 1, "reflections must be validated before rendering");
        Self {
            anchors: anchors.iter().map(|&(x, y)| Polar::from_model(x, y)).collect(),
            origin,
            reflections,
            angle_offset: TAU / reflections as f64,
        }
    }

    /// Build for a shape model, with anchors in outline order
    pub fn for_model(model: &ShapeModel, reflections: u32, canvas: CanvasSize) -> Self {
        let anchors = model.anchors();
        let ordered: Vec<(i32, i32)> = model.kind.outline().iter().map(|&i| anchors[i]).collect();
        let origin = screen_origin(model.kind, canvas, model.size);
        Self::from_anchors(&ordered, reflections, origin)
    }

    pub fn reflections(&self) -> u32 {
        self.reflections
    }

    /// Screen points of copy `div`, in anchor order
    pub fn copy(&self, div: u32) -> Vec<PixelPoint> {
        let offset = div as f64 * self.angle_offset;
        self.anchors
            .iter()
            .map(|polar| {
                let (x, y) = polar.rotated(offset);
                PixelPoint::new(x + self.origin.x, y + self.origin.y)
            })
            .collect()
    }

    /// All copies, in `div = 1..=reflections` order
    pub fn copies(&self) -> impl Iterator<Item = Vec<PixelPoint>> + '_ {
        (1..=self.reflections).map(move |div| self.copy(div))
    }
}

/// Reflect raw anchors into `reflections` screen-space point sets
pub fn reflect_anchors(anchors: &[(i32, i32)], reflections: u32, origin: PixelPoint) -> Vec<Vec<PixelPoint>> {
    Reflector::from_anchors(anchors, reflections, origin).copies().collect()
}

/// Reflect a shape model into outline-ordered screen-space point sets
pub fn reflect(model: &ShapeModel, reflections: u32, canvas: CanvasSize) -> Vec<Vec<PixelPoint>> {
    Reflector::for_model(model, reflections, canvas).copies().collect()
}
