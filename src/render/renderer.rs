//! Shape renderer - paints the full kaleidoscope pattern
//!
//! ## Draw order
//!
//! 1. Background over the whole canvas
//! 2. Models in list order, skipping kinds that are not visible
//! 3. Within a model, copies in `div = 1..=reflections` order
//!
//! Later fills overpaint earlier ones; there is no other z-ordering.

use super::surface::Surface;
use crate::config::RenderConfig;
use crate::geometry::{PixelRect, Reflector};
use crate::shapes::{Rgb, ShapeKind, ShapeModel};

/// Corner arc diameter for round rectangles
pub const ROUND_RECT_ARC: i32 = 20;

/// Stateless renderer for a list of shape models
#[derive(Clone, Debug)]
pub struct ShapeRenderer {
    /// Canvas background color
    pub background: Rgb,
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self::new(Rgb::CYAN)
    }
}

impl ShapeRenderer {
    pub fn new(background: Rgb) -> Self {
        Self { background }
    }

    /// Paint one frame
    ///
    /// Assumes `config` is already validated. Models are only read.
    pub fn render<S: Surface + ?Sized>(&self, models: &[ShapeModel], config: &RenderConfig, surface: &mut S) {
        let canvas = config.canvas();
        surface.fill_rect(PixelRect::new(0, 0, canvas.width, canvas.height), self.background);

        for model in models.iter().filter(|m| config.is_visible(m.kind)) {
            self.draw_model(model, config, surface);
        }
    }

    fn draw_model<S: Surface + ?Sized>(&self, model: &ShapeModel, config: &RenderConfig, surface: &mut S) {
        let reflector = Reflector::for_model(model, config.reflections(), config.canvas());
        let color = model.color;
        let size = model.size;

        for points in reflector.copies() {
            match model.kind {
                ShapeKind::Ball => surface.fill_ellipse(PixelRect::square(points[0], size), color),
                ShapeKind::Rectangle => surface.fill_rect(PixelRect::square(points[0], size), color),
                ShapeKind::RoundRect => surface.fill_round_rect(
                    PixelRect::square(points[0], size),
                    ROUND_RECT_ARC,
                    ROUND_RECT_ARC,
                    color,
                ),
                ShapeKind::Triangle | ShapeKind::Diamond => surface.fill_polygon(&points, color),
            }
        }
    }
}
