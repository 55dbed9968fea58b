//! 3×3 affine transforms for placing shapes in the world
//!
//! A frame places each outline with `identity × translate(pos) × rotate(angle)`,
//! so shape-local points are rotated first and then moved to world space.

use glam::{DMat3, DVec2, IVec2};

/// Affine 2D transform (homogeneous 3×3 matrix)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: DMat3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: DMat3::IDENTITY,
        }
    }

    /// Counter-clockwise rotation about the origin (radians)
    pub fn rotation(angle: f64) -> Self {
        Self {
            matrix: DMat3::from_angle(angle),
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: DMat3::from_translation(DVec2::new(dx, dy)),
        }
    }

    /// Right-multiply: the result applies `other` first, then `self`
    #[must_use]
    pub fn compose(self, other: Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Placement of a shape-local outline at `pos`, turned by `angle`
    pub fn placing(pos: DVec2, angle: f64) -> Self {
        Self::identity()
            .compose(Self::translation(pos.x, pos.y))
            .compose(Self::rotation(angle))
    }

    #[inline]
    pub fn apply(&self, point: DVec2) -> DVec2 {
        self.matrix.transform_point2(point)
    }

    /// Apply and floor to integer screen coordinates
    #[inline]
    pub fn apply_floor(&self, point: DVec2) -> IVec2 {
        self.apply(point).floor().as_ivec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_identity_is_noop() {
        let p = DVec2::new(3.5, -7.0);
        assert!(close(Transform::identity().apply(p), p));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let p = Transform::rotation(FRAC_PI_2).apply(DVec2::new(1.0, 0.0));
        assert!(close(p, DVec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_placing_rotates_then_translates() {
        let t = Transform::placing(DVec2::new(100.0, 50.0), FRAC_PI_2);
        // Nose at local (10, 0) ends up 10 units "down" the Y axis from the position
        assert!(close(t.apply(DVec2::new(10.0, 0.0)), DVec2::new(100.0, 60.0)));
    }

    #[test]
    fn test_compose_order() {
        let a = Transform::translation(5.0, 0.0);
        let b = Transform::rotation(FRAC_PI_2);
        let p = DVec2::new(1.0, 0.0);
        // compose(a, b) applies b first
        assert!(close(a.compose(b).apply(p), a.apply(b.apply(p))));
        assert!(close(a.compose(b).apply(p), DVec2::new(5.0, 1.0)));
    }

    #[test]
    fn test_apply_floor() {
        let t = Transform::translation(0.5, -0.5);
        assert_eq!(t.apply_floor(DVec2::new(1.2, 1.2)), IVec2::new(1, 0));
    }
}
