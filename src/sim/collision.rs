//! Wrap-aware circle collision
//!
//! Bodies are approximated by circles of their shape's `range`. On a torus an
//! object straddling an edge also occupies the opposite edge, so each side of
//! a test is expanded into its ghost copies and any overlapping pair counts.

use glam::DVec2;

use super::object::Bounds;

/// Translation that moves an edge-hugging object to its ghost across the seam
///
/// Each axis is zero unless the circle pokes past that edge.
pub fn ghost_offset(pos: DVec2, range: f64, bounds: &Bounds) -> DVec2 {
    let x = if pos.x < range {
        bounds.width
    } else if pos.x > bounds.width - range {
        -bounds.width
    } else {
        0.0
    };

    let y = if pos.y < range {
        bounds.height
    } else if pos.y > bounds.height - range {
        -bounds.height
    } else {
        0.0
    };

    DVec2::new(x, y)
}

/// The real position plus up to three ghosts (horizontal, vertical, diagonal)
pub fn ghost_positions(pos: DVec2, range: f64, bounds: &Bounds) -> Vec<DVec2> {
    let offset = ghost_offset(pos, range, bounds);
    let mut out = Vec::with_capacity(4);
    out.push(pos);
    if offset.x != 0.0 {
        out.push(pos + DVec2::new(offset.x, 0.0));
    }
    if offset.y != 0.0 {
        out.push(pos + DVec2::new(0.0, offset.y));
    }
    if offset.x != 0.0 && offset.y != 0.0 {
        out.push(pos + offset);
    }
    out
}

/// Plain circle overlap (touching circles do not collide)
#[inline]
pub fn circles_overlap(a: DVec2, a_range: f64, b: DVec2, b_range: f64) -> bool {
    let reach = a_range + b_range;
    a.distance_squared(b) < reach * reach
}

/// Wrap-aware overlap test between two bodies
pub fn collides(a: DVec2, a_range: f64, b: DVec2, b_range: f64, bounds: &Bounds) -> bool {
    let a_ghosts = ghost_positions(a, a_range, bounds);
    let b_ghosts = ghost_positions(b, b_range, bounds);

    a_ghosts
        .iter()
        .any(|&ga| b_ghosts.iter().any(|&gb| circles_overlap(ga, a_range, gb, b_range)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    #[test]
    fn test_ghost_offset_interior_is_zero() {
        assert_eq!(ghost_offset(DVec2::new(400.0, 300.0), 20.0, &BOUNDS), DVec2::ZERO);
    }

    #[test]
    fn test_ghost_positions_corner() {
        let ghosts = ghost_positions(DVec2::new(5.0, 595.0), 10.0, &BOUNDS);
        assert_eq!(ghosts.len(), 4);
        assert!(ghosts.contains(&DVec2::new(805.0, 595.0)));
        assert!(ghosts.contains(&DVec2::new(5.0, -5.0)));
        assert!(ghosts.contains(&DVec2::new(805.0, -5.0)));
    }

    #[test]
    fn test_ghost_positions_single_edge() {
        let ghosts = ghost_positions(DVec2::new(795.0, 300.0), 10.0, &BOUNDS);
        assert_eq!(ghosts, vec![DVec2::new(795.0, 300.0), DVec2::new(-5.0, 300.0)]);
    }

    #[test]
    fn test_direct_overlap() {
        assert!(collides(DVec2::new(100.0, 100.0), 10.0, DVec2::new(115.0, 100.0), 10.0, &BOUNDS));
        assert!(!collides(DVec2::new(100.0, 100.0), 10.0, DVec2::new(125.0, 100.0), 10.0, &BOUNDS));
    }

    #[test]
    fn test_collision_across_horizontal_seam() {
        let a = DVec2::new(2.0, 300.0);
        let b = DVec2::new(BOUNDS.width - 2.0, 300.0);
        assert!(collides(a, 5.0, b, 5.0, &BOUNDS));
    }

    #[test]
    fn test_collision_across_corner() {
        let a = DVec2::new(3.0, 3.0);
        let b = DVec2::new(797.0, 597.0);
        assert!(collides(a, 6.0, b, 6.0, &BOUNDS));
    }

    #[test]
    fn test_far_apart_on_seam_axis_miss() {
        // Same column across the seam, but rows far apart
        let a = DVec2::new(2.0, 100.0);
        let b = DVec2::new(798.0, 400.0);
        assert!(!collides(a, 5.0, b, 5.0, &BOUNDS));
    }

    proptest! {
        #[test]
        fn prop_collides_is_symmetric(
            ax in 0.0f64..800.0, ay in 0.0f64..600.0, ar in 0.0f64..60.0,
            bx in 0.0f64..800.0, by in 0.0f64..600.0, br in 0.0f64..60.0,
        ) {
            let a = DVec2::new(ax, ay);
            let b = DVec2::new(bx, by);
            prop_assert_eq!(collides(a, ar, b, br, &BOUNDS), collides(b, br, a, ar, &BOUNDS));
        }
    }
}
