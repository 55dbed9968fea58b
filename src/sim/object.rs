//! Floating bodies on the wrap-around playfield

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Playfield size. Both axes wrap: leaving one edge re-enters at the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Wrap a position into `[0, width) × [0, height)`
    pub fn wrap(&self, pos: DVec2) -> DVec2 {
        DVec2::new(wrap_coord(pos.x, self.width), wrap_coord(pos.y, self.height))
    }

    pub fn contains(&self, pos: DVec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

/// Euclidean remainder into `[0, size)`
#[inline]
fn wrap_coord(v: f64, size: f64) -> f64 {
    let r = v.rem_euclid(size);
    // Tiny negatives round up to exactly `size`
    if r >= size { 0.0 } else { r }
}

/// Position, velocity and heading shared by every physical body
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingObject {
    /// Heading (radians)
    pub angle: f64,
    pub pos: DVec2,
    pub vel: DVec2,
}

impl FloatingObject {
    pub fn at(pos: DVec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Move one tick along the velocity and wrap into the playfield
    pub fn advance(&mut self, bounds: &Bounds) {
        self.pos = bounds.wrap(self.pos + self.vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    #[test]
    fn test_advance_wraps_both_edges() {
        let mut obj = FloatingObject {
            angle: 0.0,
            pos: DVec2::new(799.0, 1.0),
            vel: DVec2::new(3.0, -4.0),
        };
        obj.advance(&BOUNDS);
        assert!((obj.pos.x - 2.0).abs() < 1e-9);
        assert!((obj.pos.y - 597.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_negative_wraps_inside() {
        let p = BOUNDS.wrap(DVec2::new(-1e-18, 0.0));
        assert!(BOUNDS.contains(p));
    }

    proptest! {
        #[test]
        fn prop_advance_stays_in_bounds(
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
            vx in -2000.0f64..2000.0,
            vy in -2000.0f64..2000.0,
        ) {
            let mut obj = FloatingObject { angle: 0.0, pos: DVec2::new(x, y), vel: DVec2::new(vx, vy) };
            obj.advance(&BOUNDS);
            prop_assert!(BOUNDS.contains(obj.pos), "{:?} escaped", obj.pos);
        }
    }
}
