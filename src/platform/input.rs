//! Input mapping
//!
//! Turns raw pointer/keyboard events from the windowing layer into held
//! action flags, aim updates and one-shot commands.

use glam::DVec2;

use crate::sim::{TickInput, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Return,
    Space,
    Up,
    K,
    N,
    Other,
}

/// Raw event from the window/event pump
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f64, y: f64 },
    Pointer { button: PointerButton, pressed: bool },
    Key { key: Key, pressed: bool },
    Quit,
}

/// Commands for the driver itself rather than the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    ToggleMusic,
}

/// Tracks held buttons and remembers the pointer
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    held: TickInput,
    fire_button: bool,
    fire_key: bool,
    thrust_button: bool,
    thrust_key: bool,
    pointer: Option<DVec2>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags to feed into the next tick
    pub fn tick_input(&self) -> TickInput {
        self.held
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Apply one event; aim and new-game requests go straight into the world
    pub fn handle(&mut self, event: InputEvent, world: &mut World) -> Option<InputAction> {
        match event {
            InputEvent::Quit => return Some(InputAction::Quit),
            InputEvent::PointerMoved { x, y } => {
                let pointer = DVec2::new(x, y);
                self.pointer = Some(pointer);
                world.aim_at(pointer);
            }
            InputEvent::Pointer { button, pressed } => match button {
                PointerButton::Left => self.fire_button = pressed,
                PointerButton::Right => self.thrust_button = pressed,
                PointerButton::Middle => {}
            },
            InputEvent::Key { key, pressed } => match key {
                Key::Escape if pressed => return Some(InputAction::Quit),
                Key::Return if pressed => return Some(InputAction::ToggleMusic),
                Key::N if pressed => world.request_new_game(),
                Key::Space => self.fire_key = pressed,
                Key::Up => self.thrust_key = pressed,
                Key::K => self.held.self_destruct = pressed,
                _ => {}
            },
        }

        self.held.fire = self.fire_button || self.fire_key;
        self.held.accelerate = self.thrust_button || self.thrust_key;
        None
    }

    /// Re-aim at the last pointer position (the ship moved under it)
    pub fn refresh_aim(&self, world: &mut World) {
        if let Some(pointer) = self.pointer {
            world.aim_at(pointer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimConfig;

    fn world() -> World {
        World::new(SimConfig::default(), 1)
    }

    #[test]
    fn test_buttons_map_to_held_flags() {
        let mut world = world();
        let mut input = InputMapper::new();

        input.handle(
            InputEvent::Pointer {
                button: PointerButton::Left,
                pressed: true,
            },
            &mut world,
        );
        input.handle(
            InputEvent::Key {
                key: Key::Up,
                pressed: true,
            },
            &mut world,
        );
        assert!(input.tick_input().fire);
        assert!(input.tick_input().accelerate);

        input.handle(
            InputEvent::Pointer {
                button: PointerButton::Left,
                pressed: false,
            },
            &mut world,
        );
        assert!(!input.tick_input().fire);
        assert!(input.tick_input().accelerate);
    }

    #[test]
    fn test_fire_stays_held_while_either_source_held() {
        let mut world = world();
        let mut input = InputMapper::new();
        let press = |key, pressed| InputEvent::Key { key, pressed };

        input.handle(press(Key::Space, true), &mut world);
        input.handle(
            InputEvent::Pointer {
                button: PointerButton::Left,
                pressed: true,
            },
            &mut world,
        );
        input.handle(press(Key::Space, false), &mut world);
        assert!(input.tick_input().fire);
    }

    #[test]
    fn test_pointer_motion_updates_aim() {
        let mut world = world();
        let mut input = InputMapper::new();
        input.handle(InputEvent::PointerMoved { x: 400.0, y: 400.0 }, &mut world);
        assert!((world.aim - DVec2::new(0.0, 1.0)).length() < 1e-12);
        assert_eq!(input.pointer(), Some(DVec2::new(400.0, 400.0)));
    }

    #[test]
    fn test_commands() {
        let mut world = world();
        let mut input = InputMapper::new();
        let key = |key| InputEvent::Key { key, pressed: true };

        assert_eq!(input.handle(key(Key::Escape), &mut world), Some(InputAction::Quit));
        assert_eq!(input.handle(InputEvent::Quit, &mut world), Some(InputAction::Quit));
        assert_eq!(input.handle(key(Key::Return), &mut world), Some(InputAction::ToggleMusic));

        assert_eq!(input.handle(key(Key::N), &mut world), None);
        assert!(world.new_game_requested);
    }

    #[test]
    fn test_self_destruct_key() {
        let mut world = world();
        let mut input = InputMapper::new();
        input.handle(
            InputEvent::Key {
                key: Key::K,
                pressed: true,
            },
            &mut world,
        );
        assert!(input.tick_input().self_destruct);
    }
}
