//! Geometry module - radial reflection math
//!
//! This module provides:
//! - `Polar` conversion around the canvas center
//! - `Reflector` for producing the rotated copies of a shape
//! - Integer pixel types handed to drawing surfaces
//!
//! Everything here is pure and never fails.

mod pixel;
mod polar;
mod reflect;

pub use pixel::{PixelPoint, PixelRect};
#[allow(unused_imports)]
pub use polar::Polar;
#[allow(unused_imports)]
pub use reflect::{reflect, reflect_anchors, screen_origin, Reflector};
