//! Wrapstar entry point
//!
//! Native headless driver: runs the fixed-step simulation on a simulated
//! clock with a scripted pilot and strokes every ready frame into a line
//! buffer. A windowing backend would replace the pilot with real events and
//! upload the buffer instead.

use std::time::Duration;

use wrapstar::Settings;
use wrapstar::audio::{AudioManager, LogAudio};
use wrapstar::platform::{FixedStepScheduler, InputAction, InputEvent, InputMapper, Key, PointerButton};
use wrapstar::renderer::{LineBuffer, render_frame};
use wrapstar::sim::{SimConfig, World, tick};

/// Simulated run length
const RUN_TIME: Duration = Duration::from_secs(60);
/// Simulated display refresh
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    log::info!("Wrapstar (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    }
    .sanitized();

    let mut world = World::new(SimConfig::from(&settings), settings.seed);
    let mut scheduler = FixedStepScheduler::from_interval_ms(settings.tick_interval_ms);
    let mut input = InputMapper::new();
    let mut audio = AudioManager::new(LogAudio::default());
    audio.set_music_volume(settings.music_volume);
    let mut lines = LineBuffer::new();

    let mut elapsed = Duration::ZERO;
    'run: while elapsed < RUN_TIME {
        for event in pilot_events(&world, elapsed) {
            match input.handle(event, &mut world) {
                Some(InputAction::Quit) => break 'run,
                Some(InputAction::ToggleMusic) => {
                    audio.toggle_music();
                }
                None => {}
            }
        }

        scheduler.advance(FRAME_TIME, || {
            input.refresh_aim(&mut world);
            tick(&mut world, &input.tick_input());
            if world.tick % 30 == 0 {
                log::debug!("frame {}", world.tick);
            }
        });

        for event in world.drain_events() {
            audio.handle_event(&event);
        }

        if scheduler.take_frame_ready() {
            render_frame(&world, &mut lines);
        }

        elapsed += FRAME_TIME;
    }

    log::info!(
        "Ran {} ticks, presented {} frames ({} lines last frame), score {}, {} asteroids left, {} effects",
        scheduler.total_steps(),
        lines.frames(),
        lines.line_count(),
        world.score,
        world.asteroids.len(),
        audio.backend().effects_played
    );
}

/// Scripted stand-in for a player: circles the pointer around the ship,
/// keeps the trigger down, pulses the thruster and restarts after dying.
fn pilot_events(world: &World, elapsed: Duration) -> Vec<InputEvent> {
    let t = elapsed.as_secs_f64();
    let ship = world.player.object.pos;
    let mut events = vec![InputEvent::PointerMoved {
        x: ship.x + 100.0 * (t * 0.7).cos(),
        y: ship.y + 100.0 * (t * 0.7).sin(),
    }];

    let ms = elapsed.as_millis();
    if ms == 0 {
        events.push(InputEvent::Key {
            key: Key::Return,
            pressed: true,
        });
        events.push(InputEvent::Pointer {
            button: PointerButton::Left,
            pressed: true,
        });
    }

    // Thrust for half a second out of every three
    let thrust = (ms % 3000) < 500;
    events.push(InputEvent::Pointer {
        button: PointerButton::Right,
        pressed: thrust,
    });

    if !world.player.alive && world.explosion_finished() {
        events.push(InputEvent::Key {
            key: Key::N,
            pressed: true,
        });
    }

    events
}
