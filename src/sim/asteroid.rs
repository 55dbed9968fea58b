//! Asteroids: procedural outlines, spawning and splitting

use glam::DVec2;
use rand::Rng;

use super::object::{Bounds, FloatingObject};
use super::shape::Shape;
use crate::polar_to_cartesian;

/// Largest (initial) asteroid level
pub const MAX_LEVEL: u8 = 3;

/// Children spawned when a level > 1 asteroid breaks up
pub const CHILD_COUNT: usize = 3;

/// Fixed (position offset, velocity delta) applied to each child, relative to the parent
pub const CHILD_OFFSETS: [(DVec2, DVec2); CHILD_COUNT] = [
    (DVec2::new(0.0, 20.0), DVec2::new(0.0, 0.8)),
    (DVec2::new(-17.320508075688775, -10.0), DVec2::new(-0.692820323027551, -0.4)),
    (DVec2::new(17.320508075688775, -10.0), DVec2::new(0.692820323027551, -0.4)),
];

/// Spin range (radians per tick) for new asteroids
const MAX_SPIN: f64 = 0.04;

/// Outline and speed parameters for one asteroid level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    pub vertex_count: usize,
    pub base_radius: f64,
    pub jitter: f64,
    pub speed: f64,
}

/// Per-level parameters; out-of-range levels clamp to the nearest valid one
pub fn level_params(level: u8) -> LevelParams {
    match level.clamp(1, MAX_LEVEL) {
        3 => LevelParams {
            vertex_count: 12,
            base_radius: 30.0,
            jitter: 15.0,
            speed: 1.0,
        },
        2 => LevelParams {
            vertex_count: 9,
            base_radius: 16.0,
            jitter: 8.0,
            speed: 1.6,
        },
        _ => LevelParams {
            vertex_count: 7,
            base_radius: 8.0,
            jitter: 4.0,
            speed: 2.2,
        },
    }
}

/// Build a lumpy closed polygon around the origin
///
/// Vertices sit at equal angular steps with radius `base + U(0, jitter)`. The
/// result is shifted so its axis-aligned bounding box is centred on the
/// origin, and the range is computed after that shift.
pub fn generate_asteroid_shape<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    base_radius: f64,
    jitter: f64,
) -> Shape {
    let step = std::f64::consts::TAU / vertex_count.max(1) as f64;
    let mut points: Vec<DVec2> = (0..vertex_count)
        .map(|i| {
            let extra = if jitter > 0.0 {
                rng.random_range(0.0..jitter)
            } else {
                0.0
            };
            polar_to_cartesian(base_radius + extra, step * i as f64)
        })
        .collect();

    if let Some(&first) = points.first() {
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        let centre = (min + max) * 0.5;
        for p in &mut points {
            *p -= centre;
        }
    }

    Shape::new(points)
}

/// A drifting, spinning rock that owns its outline
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub object: FloatingObject,
    /// 1..=3, bigger is larger and slower
    pub level: u8,
    /// Angular velocity (radians per tick)
    pub spin: f64,
    pub shape: Shape,
}

impl Asteroid {
    /// New asteroid at `pos` heading in a random direction at the level's speed
    pub fn spawn_random<R: Rng>(rng: &mut R, level: u8, pos: DVec2) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        let params = level_params(level);
        let heading = rng.random_range(0.0..std::f64::consts::TAU);

        Self {
            object: FloatingObject {
                angle: rng.random_range(0.0..std::f64::consts::TAU),
                pos,
                vel: polar_to_cartesian(params.speed, heading),
            },
            level,
            spin: rng.random_range(-MAX_SPIN..MAX_SPIN),
            shape: generate_asteroid_shape(rng, params.vertex_count, params.base_radius, params.jitter),
        }
    }

    pub fn range(&self) -> f64 {
        self.shape.range()
    }

    /// Rotate by the spin, then drift and wrap
    pub fn advance(&mut self, bounds: &Bounds) {
        self.object.angle = crate::normalize_angle(self.object.angle + self.spin);
        self.object.advance(bounds);
    }

    /// Pieces left behind when this asteroid is destroyed
    ///
    /// Level 1 leaves nothing. Higher levels leave exactly three children one
    /// level down, placed at the fixed offsets from the parent's position and
    /// velocity.
    pub fn split<R: Rng>(&self, rng: &mut R, bounds: &Bounds) -> Vec<Asteroid> {
        if self.level <= 1 {
            return Vec::new();
        }

        let level = self.level - 1;
        let params = level_params(level);

        CHILD_OFFSETS
            .iter()
            .map(|&(offset, delta)| Asteroid {
                object: FloatingObject {
                    angle: self.object.angle,
                    pos: bounds.wrap(self.object.pos + offset),
                    vel: self.object.vel + delta,
                },
                level,
                spin: rng.random_range(-MAX_SPIN..MAX_SPIN),
                shape: generate_asteroid_shape(rng, params.vertex_count, params.base_radius, params.jitter),
            })
            .collect()
    }
}
