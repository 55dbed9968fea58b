//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod anim;
pub mod asteroid;
pub mod collision;
pub mod object;
pub mod shape;
pub mod state;
pub mod tick;
pub mod transform;

pub use anim::Anim;
pub use asteroid::{Asteroid, CHILD_OFFSETS, generate_asteroid_shape};
pub use collision::{collides, ghost_offset, ghost_positions};
pub use object::{Bounds, FloatingObject};
pub use shape::{Shape, ShapeLibrary};
pub use state::{Bullet, GameEvent, Player, SimConfig, World};
pub use tick::{TickInput, tick};
pub use transform::Transform;
