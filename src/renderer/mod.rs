//! Line rendering module
//!
//! Scenes are stroked as polygon outlines into a `LineSink`; the actual
//! rasterizer or GPU pipeline sits behind that trait.

pub mod outline;
pub mod vertex;

pub use outline::{LineBuffer, LineSink, draw_floating, draw_shape, render_frame};
pub use vertex::Vertex;
