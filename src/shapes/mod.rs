//! Shapes module - the shape models the kaleidoscope draws
//!
//! This module provides:
//! - `ShapeKind` with the anchor table for each kind
//! - `ShapeModel`, the per-shape snapshot read by the renderer
//! - `Rgb` fill colors

mod kind;
mod model;

pub use kind::{Placement, ShapeKind};
pub use model::{Rgb, ShapeModel};
