//! Polygon outlines and their bounding radius

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BULLET_POINTS, SHIP_POINTS};
use crate::polar_to_cartesian;

/// Closed polygon outline (last point connects back to the first)
///
/// `range` is the largest distance from the local origin to any vertex and is
/// used as the collision/wrap radius. It is recomputed on every point update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    points: Vec<DVec2>,
    range: f64,
}

impl Shape {
    pub fn new(points: Vec<DVec2>) -> Self {
        let range = max_vertex_distance(&points);
        Self { points, range }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn set_points(&mut self, points: Vec<DVec2>) {
        self.range = max_vertex_distance(&points);
        self.points = points;
    }

    /// Outline edges as (from, to) pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

fn max_vertex_distance(points: &[DVec2]) -> f64 {
    points.iter().map(|p| p.length()).fold(0.0, f64::max)
}

/// Shared outline templates. Entities borrow these instead of owning copies.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    pub ship: Shape,
    pub bullet: Shape,
    /// Looping thrust flame frames, drawn behind the ship
    pub flame: Vec<Shape>,
    /// One-shot explosion frames, growing outward
    pub explosion: Vec<Shape>,
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeLibrary {
    pub fn new() -> Self {
        let flame = [16.0, 22.0, 19.0]
            .iter()
            .map(|&tip| Shape::from_pairs(&[(-10.0, -5.0), (-tip, 0.0), (-10.0, 5.0)]))
            .collect();

        let explosion = (1..=6).map(|step| starburst(8, 5.0 * step as f64)).collect();

        Self {
            ship: Shape::from_pairs(&SHIP_POINTS),
            bullet: Shape::from_pairs(&BULLET_POINTS),
            flame,
            explosion,
        }
    }
}

/// Star outline alternating between full and half radius
fn starburst(spikes: usize, radius: f64) -> Shape {
    let count = spikes * 2;
    let step = std::f64::consts::TAU / count as f64;
    let points = (0..count)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius * 0.5 };
            polar_to_cartesian(r, step * i as f64)
        })
        .collect();
    Shape::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_max_vertex_distance() {
        let ship = Shape::from_pairs(&SHIP_POINTS);
        assert!((ship.range() - 200f64.sqrt()).abs() < 1e-9);

        let bullet = Shape::from_pairs(&BULLET_POINTS);
        assert!((bullet.range() - 20f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_set_points_recomputes_range() {
        let mut shape = Shape::from_pairs(&[(1.0, 0.0), (0.0, 1.0)]);
        assert!((shape.range() - 1.0).abs() < 1e-9);
        shape.set_points(vec![DVec2::new(3.0, 4.0)]);
        assert!((shape.range() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_edges_close_the_outline() {
        let shape = Shape::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let edges: Vec<_> = shape.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (DVec2::new(0.0, 1.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_library_frames() {
        let lib = ShapeLibrary::new();
        assert_eq!(lib.flame.len(), 3);
        assert_eq!(lib.explosion.len(), 6);
        // Explosion grows every frame
        for pair in lib.explosion.windows(2) {
            assert!(pair[1].range() > pair[0].range());
        }
    }
}
