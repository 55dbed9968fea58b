//! Wrapstar - a wrap-around Asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (ship, bullets, asteroids, collisions)
//! - `renderer`: Outline drawing into a line sink, wrap ghosts included
//! - `platform`: Fixed-step scheduling and input mapping
//! - `audio`: Music play/pause and one-shot effect routing
//! - `settings`: JSON-loaded game configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;

    /// Timer cadence driving the simulation (milliseconds per tick)
    pub const TICK_INTERVAL_MS: u32 = 15;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Velocity added per tick while accelerating (times the aim vector)
    pub const ACCEL_SCALE: f64 = 0.05;
    /// Bullet muzzle speed added to the ship velocity
    pub const BULLET_SCALE: f64 = 10.0;
    /// Ticks a bullet lives
    pub const BULLET_LIFETIME: i32 = 100;
    /// Minimum ticks between two shots
    pub const FIRE_COOLDOWN: u64 = 10;
    /// Ticks each animation frame stays on screen
    pub const ANIM_FRAME_TICKS: u64 = 5;

    /// Asteroids spawned on a new game
    pub const INITIAL_ASTEROIDS: usize = 4;
    /// New-game asteroids never spawn closer than this to the ship
    pub const SAFE_SPAWN_DISTANCE: f64 = 150.0;

    /// Ship outline, nose pointing along +X
    pub const SHIP_POINTS: [(f64, f64); 4] = [(-10.0, -10.0), (10.0, -2.0), (10.0, 2.0), (-10.0, 10.0)];
    /// Bullet outline
    pub const BULLET_POINTS: [(f64, f64); 4] = [(-4.0, -2.0), (4.0, -2.0), (4.0, 2.0), (-4.0, 2.0)];
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-9);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-9);
        assert!(normalize_angle(PI) < PI);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 2.0).abs() < 1e-9);
    }
}
