//! Motion driver - owns the shape list and moves it between frames
//!
//! Each shape drifts in a straight line and bounces off the canvas edges.
//! Exact positions are kept as `f32` vectors; the integer `ShapeModel`
//! coordinates the renderer reads are refreshed after every step.
//!
//! The app calls [`Animator::step`] and then renders; nothing is notified.

use std::f32::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CanvasSize;
use crate::shapes::{Rgb, ShapeKind, ShapeModel};

/// Spawn speed range in pixels per second
const MIN_SPEED: f32 = 40.0;
const MAX_SPEED: f32 = 160.0;

/// Sub-pixel state of one moving shape
#[derive(Clone, Debug)]
struct Motion {
    position: Vector2<f32>,
    velocity: Vector2<f32>,
}

/// Moves shape models around the canvas
pub struct Animator {
    models: Vec<ShapeModel>,
    motions: Vec<Motion>,
    rng: StdRng,
    /// Speed multiplier (1.0 = spawn speed)
    pub speed: f32,
}

impl Animator {
    /// Create an animator seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic animator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            models: Vec::new(),
            motions: Vec::new(),
            rng,
            speed: 1.0,
        }
    }

    pub fn models(&self) -> &[ShapeModel] {
        &self.models
    }

    /// Replace all shapes with `per_kind` new shapes of every kind
    ///
    /// Positions, directions and colors are random; every shape starts
    /// inside the canvas bounds.
    pub fn spawn(&mut self, per_kind: usize, figure_size: i32, canvas: CanvasSize) {
        self.models.clear();
        self.motions.clear();

        let limit = bounds(canvas, figure_size);
        for &kind in ShapeKind::all() {
            for _ in 0..per_kind {
                let position = Vector2::new(
                    self.rng.random_range(-limit.x..=limit.x),
                    self.rng.random_range(-limit.y..=limit.y),
                );
                let heading = self.rng.random_range(0.0..TAU);
                let speed = self.rng.random_range(MIN_SPEED..MAX_SPEED);
                let velocity = Vector2::new(heading.cos(), heading.sin()) * speed;
                let color = Rgb::new(self.rng.random(), self.rng.random(), self.rng.random());

                let motion = Motion { position, velocity };
                self.models.push(ShapeModel::new(
                    kind,
                    motion.position.x.round() as i32,
                    motion.position.y.round() as i32,
                    figure_size,
                    color,
                ));
                self.motions.push(motion);
            }
        }

        log::info!("Spawned {} shapes ({} per kind)", self.models.len(), per_kind);
    }

    /// Change the figure size of every shape
    pub fn set_figure_size(&mut self, size: i32) {
        for model in &mut self.models {
            model.size = size;
        }
    }

    /// Advance all shapes by `dt` seconds, bouncing off the canvas edges
    pub fn step(&mut self, dt: f32, canvas: CanvasSize) {
        for (model, motion) in self.models.iter_mut().zip(self.motions.iter_mut()) {
            let limit = bounds(canvas, model.size);
            motion.position += motion.velocity * (dt * self.speed);

            bounce(&mut motion.position.x, &mut motion.velocity.x, limit.x);
            bounce(&mut motion.position.y, &mut motion.velocity.y, limit.y);

            model.x = motion.position.x.round() as i32;
            model.y = motion.position.y.round() as i32;
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest model-space coordinate a shape may reach on each axis
fn bounds(canvas: CanvasSize, size: i32) -> Vector2<f32> {
    Vector2::new(
        (canvas.width as f32 / 2.0 - size as f32).max(0.0),
        (canvas.height as f32 / 2.0 - size as f32).max(0.0),
    )
}

fn bounce(position: &mut f32, velocity: &mut f32, limit: f32) {
    if *position > limit {
        *position = limit;
        *velocity = -velocity.abs();
    } else if *position < -limit {
        *position = -limit;
        *velocity = velocity.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: CanvasSize = CanvasSize { width: 400, height: 300 };

    #[test]
    fn test_spawn_counts_every_kind() {
        let mut animator = Animator::seeded(7);
        animator.spawn(3, 20, CANVAS);

        assert_eq!(animator.models().len(), 15);
        for &kind in ShapeKind::all() {
            assert_eq!(animator.models().iter().filter(|m| m.kind == kind).count(), 3);
        }
        assert!(animator.models().iter().all(|m| m.size == 20));
    }

    #[test]
    fn test_spawn_is_deterministic_with_seed() {
        let mut a = Animator::seeded(42);
        let mut b = Animator::seeded(42);
        a.spawn(2, 20, CANVAS);
        b.spawn(2, 20, CANVAS);
        assert_eq!(a.models(), b.models());
    }

    #[test]
    fn test_shapes_stay_in_bounds() {
        let mut animator = Animator::seeded(3);
        animator.spawn(4, 20, CANVAS);
        animator.speed = 5.0;

        for _ in 0..500 {
            animator.step(1.0 / 60.0, CANVAS);
            for model in animator.models() {
                assert!(model.x.abs() <= 180, "x out of bounds: {}", model.x);
                assert!(model.y.abs() <= 130, "y out of bounds: {}", model.y);
            }
        }
    }

    #[test]
    fn test_bounce_reverses_velocity() {
        let mut position = 105.0;
        let mut velocity = 30.0;
        bounce(&mut position, &mut velocity, 100.0);
        assert_eq!(position, 100.0);
        assert_eq!(velocity, -30.0);

        let mut position = -101.0;
        let mut velocity = -12.0;
        bounce(&mut position, &mut velocity, 100.0);
        assert_eq!(position, -100.0);
        assert_eq!(velocity, 12.0);
    }

    #[test]
    fn test_paused_speed_does_not_move() {
        let mut animator = Animator::seeded(9);
        animator.spawn(1, 20, CANVAS);
        let before = animator.models().to_vec();

        animator.speed = 0.0;
        animator.step(0.5, CANVAS);
        assert_eq!(animator.models(), before.as_slice());
    }

    #[test]
    fn test_set_figure_size() {
        let mut animator = Animator::seeded(1);
        animator.spawn(1, 20, CANVAS);
        animator.set_figure_size(35);
        assert!(animator.models().iter().all(|m| m.size == 35));
    }
}
