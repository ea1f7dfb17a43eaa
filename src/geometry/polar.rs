//! Polar coordinates around the canvas center
//!
//! Angles are measured from the +Y axis towards +X, so a point is recovered
//! as `(r * sin(a), r * cos(a))`.

use std::f64::consts::PI;

/// A model-space point in polar form
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub radius: f64,
    pub angle: f64,
}

impl Polar {
    /// Convert a model-space point to polar form
    ///
    /// The angle is `atan(x / y)`, shifted by π when `y < 0`. For `y == 0`
    /// the quotient is ±∞ and the angle lands on ±π/2. The origin has no
    /// angle; it is reported as 0 since the radius is 0 anyway.
    pub fn from_model(x: i32, y: i32) -> Self {
        let (fx, fy) = (x as f64, y as f64);
        let radius = (fx * fx + fy * fy).sqrt();

        if x == 0 && y == 0 {
            return Self { radius, angle: 0.0 };
        }

        let mut angle = (fx / fy).atan();
        if y < 0 {
            angle += PI;
        }

        Self { radius, angle }
    }

    /// Rotate by `offset` radians and project back to rounded model space
    pub fn rotated(&self, offset: f64) -> (i32, i32) {
        let a = self.angle + offset;
        (
            (self.radius * a.sin()).round() as i32,
            (self.radius * a.cos()).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_positive_y_axis() {
        let p = Polar::from_model(0, 50);
        assert!((p.radius - 50.0).abs() < 1e-12);
        assert!(p.angle.abs() < 1e-12);
    }

    #[test]
    fn test_negative_y_adds_pi() {
        let p = Polar::from_model(0, -50);
        assert!((p.angle - PI).abs() < 1e-12);

        let p = Polar::from_model(30, -40);
        assert!((p.radius - 50.0).abs() < 1e-12);
        assert_eq!(p.rotated(0.0), (30, -40));
    }

    #[test]
    fn test_x_axis_uses_infinite_quotient() {
        let p = Polar::from_model(100, 0);
        assert!((p.angle - FRAC_PI_2).abs() < 1e-12);

        let p = Polar::from_model(-100, 0);
        assert!((p.angle + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(p.rotated(0.0), (-100, 0));
    }

    #[test]
    fn test_origin() {
        let p = Polar::from_model(0, 0);
        assert_eq!(p.radius, 0.0);
        assert_eq!(p.rotated(1.234), (0, 0));
    }

    #[test]
    fn test_round_trip_all_quadrants() {
        for &(x, y) in &[(3, 4), (-3, 4), (-3, -4), (3, -4), (17, 1), (-1, -17)] {
            assert_eq!(Polar::from_model(x, y).rotated(0.0), (x, y));
        }
    }
}
