//! Platform abstraction layer
//!
//! Handles the parts a windowing toolkit would otherwise own:
//! - Time: fixed-rate tick scheduling and the frame-ready latch
//! - Input: raw events to tick flags, aim and commands

pub mod input;
pub mod time;

pub use input::{InputAction, InputEvent, InputMapper, Key, PointerButton};
pub use time::FixedStepScheduler;
