//! Shape kinds and their anchor tables
//!
//! Every kind is described by the anchor points it derives from a single
//! primary position, plus the order in which those anchors form its outline.
//! The geometry code is shared by all kinds; only these tables differ.

use serde::{Deserialize, Serialize};

/// The five drawable shape kinds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Ball,
    Rectangle,
    RoundRect,
    Triangle,
    Diamond,
}

/// Where a kind's reflected points are translated to on screen
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    /// The single anchor becomes the top-left corner of a `size × size` box
    /// centered on the rotated point
    Boxed,
    /// Anchors are polygon vertices measured from the canvas center
    Vertices,
}

impl ShapeKind {
    /// Get all shape kinds
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Ball,
            ShapeKind::Rectangle,
            ShapeKind::RoundRect,
            ShapeKind::Triangle,
            ShapeKind::Diamond,
        ]
    }

    /// Get the display name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Ball => "Ball",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundRect => "Round rect",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Diamond => "Diamond",
        }
    }

    pub fn placement(&self) -> Placement {
        match self {
            ShapeKind::Ball | ShapeKind::Rectangle | ShapeKind::RoundRect => Placement::Boxed,
            ShapeKind::Triangle | ShapeKind::Diamond => Placement::Vertices,
        }
    }

    /// Model-space anchors derived from the primary position `(x, y)`
    ///
    /// The primary anchor is always first. `size / 2` uses integer division.
    pub fn anchors(&self, x: i32, y: i32, size: i32) -> Vec<(i32, i32)> {
        match self {
            ShapeKind::Ball | ShapeKind::Rectangle | ShapeKind::RoundRect => vec![(x, y)],
            ShapeKind::Triangle => vec![
                (x, y),
                (x + size, y + size / 2),
                (x + size / 2, y + size),
            ],
            ShapeKind::Diamond => vec![
                (x, y),
                (x + size, y + size / 2),
                (x + size / 2, y + size),
                (x + 2 * size, y + 2 * size),
            ],
        }
    }

    /// Indices into [`anchors`](Self::anchors) in outline order
    ///
    /// The diamond's far vertex sits between its two side vertices, so the
    /// outline visits it third to stay non-self-intersecting.
    pub fn outline(&self) -> &'static [usize] {
        match self {
            ShapeKind::Ball | ShapeKind::Rectangle | ShapeKind::RoundRect => &[0],
            ShapeKind::Triangle => &[0, 1, 2],
            ShapeKind::Diamond => &[0, 1, 3, 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_counts() {
        for kind in ShapeKind::all() {
            let anchors = kind.anchors(10, 20, 30);
            assert_eq!(anchors.len(), kind.outline().len());
            assert_eq!(anchors[0], (10, 20));
        }
    }

    #[test]
    fn test_triangle_anchors() {
        let anchors = ShapeKind::Triangle.anchors(10, 20, 25);
        assert_eq!(anchors, vec![(10, 20), (35, 32), (22, 45)]);
    }

    #[test]
    fn test_diamond_outline_visits_far_vertex_third() {
        let anchors = ShapeKind::Diamond.anchors(0, 0, 20);
        let ordered: Vec<_> = ShapeKind::Diamond
            .outline()
            .iter()
            .map(|&i| anchors[i])
            .collect();
        assert_eq!(ordered, vec![(0, 0), (20, 10), (40, 40), (10, 20)]);
    }

    #[test]
    fn test_placement() {
        assert_eq!(ShapeKind::Ball.placement(), Placement::Boxed);
        assert_eq!(ShapeKind::RoundRect.placement(), Placement::Boxed);
        assert_eq!(ShapeKind::Diamond.placement(), Placement::Vertices);
    }
}
