//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: IVec2, color: [f32; 4]) -> Self {
        Self::new(point.x as f32, point.y as f32, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const ASTEROID: [f32; 4] = [0.25, 0.2, 0.15, 1.0];
    pub const FLAME: [f32; 4] = [1.0, 0.45, 0.1, 1.0];
    pub const EXPLOSION: [f32; 4] = [0.9, 0.2, 0.1, 1.0];
}
