//! Kaleidoscope canvas widget
//!
//! Bridges the renderer to egui: the widget claims the available space,
//! reports its pixel size back into the render config (this is how window
//! resizes reach the geometry), then paints through a [`PainterSurface`].

use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Rect, Rounding, Stroke, Vec2};

use super::renderer::ShapeRenderer;
use super::surface::Surface;
use crate::config::{CanvasSize, RenderConfig};
use crate::geometry::{PixelPoint, PixelRect};
use crate::shapes::{Rgb, ShapeModel};

/// Outline segments for non-circular ellipses
const ELLIPSE_SEGMENTS: usize = 48;

fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// [`Surface`] implementation on top of an egui painter
///
/// Pixel coordinates are relative to `origin`, the top-left of the widget.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, point: PixelPoint) -> Pos2 {
        self.origin + Vec2::new(point.x as f32, point.y as f32)
    }

    fn rect(&self, rect: PixelRect) -> Rect {
        Rect::from_min_size(
            self.pos(PixelPoint::new(rect.x, rect.y)),
            Vec2::new(rect.width as f32, rect.height as f32),
        )
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.painter.rect_filled(self.rect(rect), 0.0, color32(color));
    }

    fn fill_ellipse(&mut self, bounds: PixelRect, color: Rgb) {
        let rect = self.rect(bounds);
        let radius = rect.size() / 2.0;
        if bounds.width == bounds.height {
            self.painter.circle_filled(rect.center(), radius.x, color32(color));
            return;
        }

        let points = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * TAU;
                rect.center() + Vec2::new(radius.x * angle.cos(), radius.y * angle.sin())
            })
            .collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, color32(color), Stroke::NONE));
    }

    fn fill_round_rect(&mut self, rect: PixelRect, arc_width: i32, arc_height: i32, color: Rgb) {
        // egui corners are circular; use the smaller arc as the diameter
        let radius = arc_width.min(arc_height) as f32 / 2.0;
        self.painter
            .rect_filled(self.rect(rect), Rounding::same(radius), color32(color));
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgb) {
        let points: Vec<Pos2> = points.iter().map(|&p| self.pos(p)).collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, color32(color), Stroke::NONE));
    }
}

/// Central display widget
pub struct KaleidoscopeCanvas {
    pub renderer: ShapeRenderer,
}

impl Default for KaleidoscopeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl KaleidoscopeCanvas {
    pub fn new() -> Self {
        Self {
            renderer: ShapeRenderer::default(),
        }
    }

    /// Size the render config to the space the canvas will occupy
    ///
    /// Called before the shapes move so their bounds match this frame.
    pub fn fit(ui: &egui::Ui, config: &mut RenderConfig) -> CanvasSize {
        let available = ui.available_size();
        let canvas = CanvasSize::new(available.x.floor() as i32, available.y.floor() as i32);
        if config.canvas() != canvas {
            log::debug!("Canvas resized to {}x{}", canvas.width, canvas.height);
            config.set_canvas_size(canvas);
        }
        canvas
    }

    /// Paint one frame into all available space
    pub fn show(&self, ui: &mut egui::Ui, models: &[ShapeModel], config: &mut RenderConfig) -> egui::Response {
        let canvas = Self::fit(ui, config);
        let size = Vec2::new(canvas.width as f32, canvas.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());

        let mut surface = PainterSurface::new(&painter, response.rect.min);
        self.renderer.render(models, config, &mut surface);

        response
    }
}
