//! Render module - painting the kaleidoscope
//!
//! This module provides:
//! - `Surface` trait with the fill primitives the renderer needs
//! - `ShapeRenderer`, which turns shape models into reflected fills
//! - `KaleidoscopeCanvas`, the egui widget that hosts it

mod canvas;
mod renderer;
mod surface;

pub use canvas::KaleidoscopeCanvas;
#[allow(unused_imports)]
pub use renderer::ShapeRenderer;
#[allow(unused_imports)]
pub use surface::Surface;
