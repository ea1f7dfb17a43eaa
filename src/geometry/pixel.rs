//! Integer screen coordinates

/// A point in screen pixels, origin at the canvas top-left
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A `size × size` square with its top-left corner at `origin`
    pub const fn square(origin: PixelPoint, size: i32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }

    /// Center point, rounded towards the top-left
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}
