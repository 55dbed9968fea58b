//! Outline drawing for every body in the world
//!
//! Each body is drawn through `identity × translate(pos) × rotate(angle)` and
//! redrawn at its wrap ghosts so it shows on both sides of a seam.

use glam::{DVec2, IVec2};

use super::vertex::{Vertex, colors};
use crate::sim::{Bounds, FloatingObject, Shape, Transform, World, ghost_offset};

/// Line-drawing backend (software renderer, GPU line list, test recorder)
pub trait LineSink {
    fn clear(&mut self, _color: [f32; 4]) {}
    fn draw_line(&mut self, from: IVec2, to: IVec2, color: [f32; 4]);
    fn present(&mut self) {}
}

/// Stroke a closed outline through a transform
pub fn draw_shape<S: LineSink + ?Sized>(sink: &mut S, transform: &Transform, shape: &Shape, color: [f32; 4]) {
    for (from, to) in shape.edges() {
        sink.draw_line(transform.apply_floor(from), transform.apply_floor(to), color);
    }
}

/// Draw a body plus the ghost copies needed near the playfield edges
pub fn draw_floating<S: LineSink + ?Sized>(
    sink: &mut S,
    object: &FloatingObject,
    shape: &Shape,
    bounds: &Bounds,
    color: [f32; 4],
) {
    let base = Transform::placing(object.pos, object.angle);
    draw_shape(sink, &base, shape, color);

    let offset = ghost_offset(object.pos, shape.range(), bounds);
    let mut ghosts = Vec::with_capacity(3);
    if offset.x != 0.0 {
        ghosts.push(DVec2::new(offset.x, 0.0));
    }
    if offset.y != 0.0 {
        ghosts.push(DVec2::new(0.0, offset.y));
    }
    if offset.x != 0.0 && offset.y != 0.0 {
        ghosts.push(offset);
    }

    for ghost in ghosts {
        let shifted = Transform::translation(ghost.x, ghost.y).compose(base);
        draw_shape(sink, &shifted, shape, color);
    }
}

/// Clear and redraw the whole scene
pub fn render_frame<S: LineSink + ?Sized>(world: &World, sink: &mut S) {
    let bounds = world.config.bounds;
    let frame_ticks = world.config.anim_frame_ticks;

    sink.clear(colors::BACKGROUND);

    if world.player.alive {
        draw_floating(sink, &world.player.object, &world.shapes.ship, &bounds, colors::SHIP);
        if world.thrusting {
            if let Some(frame) = world.flame.frame_index(world.tick, frame_ticks) {
                let shape = &world.shapes.flame[frame];
                draw_floating(sink, &world.flame.object, shape, &bounds, colors::FLAME);
            }
        }
    } else if let Some(frame) = world.explosion.frame_index(world.tick, frame_ticks) {
        let shape = &world.shapes.explosion[frame];
        draw_floating(sink, &world.explosion.object, shape, &bounds, colors::EXPLOSION);
    }

    for bullet in world.live_bullets() {
        draw_floating(sink, &bullet.object, &world.shapes.bullet, &bounds, colors::BULLET);
    }

    for rock in &world.asteroids {
        draw_floating(sink, &rock.object, &rock.shape, &bounds, colors::ASTEROID);
    }

    sink.present();
}

/// Collects lines as vertex pairs, ready for a GPU line-list upload
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
    frames: u64,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl LineSink for LineBuffer {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2, color: [f32; 4]) {
        self.vertices.push(Vertex::at(from, color));
        self.vertices.push(Vertex::at(to, color));
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
