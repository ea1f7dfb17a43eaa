//! Drawing surface abstraction
//!
//! The renderer only ever fills shapes. Any backend that can fill these four
//! primitives in absolute pixel coordinates can display the kaleidoscope.

use crate::geometry::{PixelPoint, PixelRect};
use crate::shapes::Rgb;

/// A 2D target that accepts solid fills
pub trait Surface {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Fill the ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: PixelRect, color: Rgb);

    /// Fill a rectangle with rounded corners
    ///
    /// `arc_width` and `arc_height` are the full diameters of the corner arcs.
    fn fill_round_rect(&mut self, rect: PixelRect, arc_width: i32, arc_height: i32, color: Rgb);

    /// Fill a closed polygon through `points`, in order
    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgb);
}

/// A fill call captured by [`RecordingSurface`]
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum FillCall {
    Rect(PixelRect, Rgb),
    Ellipse(PixelRect, Rgb),
    RoundRect(PixelRect, i32, i32, Rgb),
    Polygon(Vec<PixelPoint>, Rgb),
}

/// Surface that records every call, for renderer tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<FillCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.calls.push(FillCall::Rect(rect, color));
    }

    fn fill_ellipse(&mut self, bounds: PixelRect, color: Rgb) {
        self.calls.push(FillCall::Ellipse(bounds, color));
    }

    fn fill_round_rect(&mut self, rect: PixelRect, arc_width: i32, arc_height: i32, color: Rgb) {
        self.calls.push(FillCall::RoundRect(rect, arc_width, arc_height, color));
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgb) {
        self.calls.push(FillCall::Polygon(points.to_vec(), color));
    }
}
