//! World state and core simulation types
//!
//! Everything the tick mutates lives in one `World` aggregate that the driver
//! owns and lends to the tick, renderer and input handling in turn.

use std::collections::VecDeque;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::anim::Anim;
use super::asteroid::{Asteroid, MAX_LEVEL};
use super::object::{Bounds, FloatingObject};
use super::shape::ShapeLibrary;
use crate::consts::*;
use crate::settings::Settings;

/// Tunables the tick reads every step
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub bounds: Bounds,
    pub accel_scale: f64,
    pub bullet_scale: f64,
    pub bullet_lifetime: i32,
    pub fire_cooldown: u64,
    pub anim_frame_ticks: u64,
    pub initial_asteroids: usize,
    pub safe_spawn_distance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            accel_scale: ACCEL_SCALE,
            bullet_scale: BULLET_SCALE,
            bullet_lifetime: BULLET_LIFETIME,
            fire_cooldown: FIRE_COOLDOWN,
            anim_frame_ticks: ANIM_FRAME_TICKS,
            initial_asteroids: INITIAL_ASTEROIDS,
            safe_spawn_distance: SAFE_SPAWN_DISTANCE,
        }
    }
}

impl From<&Settings> for SimConfig {
    fn from(settings: &Settings) -> Self {
        let s = settings.sanitized();
        Self {
            bounds: Bounds::new(s.screen_width, s.screen_height),
            accel_scale: s.accel_scale,
            bullet_scale: s.bullet_scale,
            bullet_lifetime: s.bullet_lifetime,
            fire_cooldown: s.fire_cooldown,
            anim_frame_ticks: s.anim_frame_ticks,
            initial_asteroids: s.initial_asteroids,
            safe_spawn_distance: s.safe_spawn_distance,
        }
    }
}

/// Something the presentation/audio side may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    NewGame,
    BulletFired,
    AsteroidDestroyed { level: u8, pos: DVec2 },
    PlayerKilled { tick: u64 },
}

/// The ship
#[derive(Debug, Clone)]
pub struct Player {
    pub object: FloatingObject,
    pub alive: bool,
}

impl Player {
    fn spawned_at(pos: DVec2, aim: DVec2) -> Self {
        Self {
            object: FloatingObject {
                angle: aim.y.atan2(aim.x),
                pos,
                vel: DVec2::ZERO,
            },
            alive: true,
        }
    }
}

/// A projectile; dead once `lifetime` reaches zero
#[derive(Debug, Clone)]
pub struct Bullet {
    pub object: FloatingObject,
    pub lifetime: i32,
}

impl Bullet {
    #[inline]
    pub fn is_live(&self) -> bool {
        self.lifetime > 0
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub config: SimConfig,
    /// Shared outlines for the ship, bullets and effects
    pub shapes: ShapeLibrary,
    /// Simulation tick counter
    pub tick: u64,
    /// Unit vector from the ship toward the pointer
    pub aim: DVec2,
    /// Set by input, consumed by the next tick
    pub new_game_requested: bool,
    pub player: Player,
    /// Oldest first; all bullets start with the same lifetime so expired ones
    /// always form a prefix
    pub bullets: VecDeque<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub flame: Anim,
    pub explosion: Anim,
    /// Accelerate input held during the last tick
    pub thrusting: bool,
    /// Earliest tick the next shot may be fired on
    pub next_fire_tick: u64,
    /// Points for destroyed asteroids (reset on new game)
    pub score: u64,
    /// Seed the world was created with
    pub seed: u64,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl World {
    /// Create a world and start the first game
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let shapes = ShapeLibrary::new();
        let aim = DVec2::X;
        let start = player_start(&config.bounds);
        let flame = Anim::new(shapes.flame.len(), true);
        let explosion = Anim::new(shapes.explosion.len(), false);

        let mut world = Self {
            config,
            shapes,
            tick: 0,
            aim,
            new_game_requested: false,
            player: Player::spawned_at(start, aim),
            bullets: VecDeque::new(),
            asteroids: Vec::new(),
            flame,
            explosion,
            thrusting: false,
            next_fire_tick: 0,
            score: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        world.reset();
        world
    }

    /// Clear the field, put the ship back in the centre and seed fresh asteroids
    ///
    /// The tick counter keeps running; only per-game state is reset.
    pub fn reset(&mut self) {
        let start = player_start(&self.config.bounds);
        self.player = Player::spawned_at(start, self.aim);
        self.bullets.clear();
        self.asteroids.clear();
        self.flame.stop();
        self.explosion.stop();
        self.thrusting = false;
        self.next_fire_tick = self.tick;
        self.score = 0;

        for _ in 0..self.config.initial_asteroids {
            let pos = self.safe_spawn_point();
            let rock = Asteroid::spawn_random(&mut self.rng, MAX_LEVEL, pos);
            self.asteroids.push(rock);
        }

        self.events.push(GameEvent::NewGame);
        log::info!(
            "New game at tick {} with {} asteroids",
            self.tick,
            self.asteroids.len()
        );
    }

    /// Random point at least `safe_spawn_distance` from the ship
    fn safe_spawn_point(&mut self) -> DVec2 {
        let bounds = self.config.bounds;
        let ship = self.player.object.pos;
        let mut pos = DVec2::ZERO;
        // Bounded retries; a tiny playfield just takes the last candidate
        for _ in 0..32 {
            pos = DVec2::new(
                self.rng.random_range(0.0..bounds.width),
                self.rng.random_range(0.0..bounds.height),
            );
            if pos.distance(ship) >= self.config.safe_spawn_distance {
                break;
            }
        }
        pos
    }

    /// Ask for a fresh game on the next tick
    pub fn request_new_game(&mut self) {
        self.new_game_requested = true;
    }

    /// Point the ship at a pointer position
    ///
    /// A pointer exactly on the ship has no direction; the previous aim is kept.
    pub fn aim_at(&mut self, pointer: DVec2) {
        let delta = pointer - self.player.object.pos;
        let len = delta.length();
        if len <= f64::EPSILON {
            return;
        }
        self.aim = delta / len;
        self.player.object.angle = self.aim.y.atan2(self.aim.x);
    }

    /// Alive → dead, starting the explosion. No-op when already dead.
    pub fn kill_player(&mut self) {
        if !self.player.alive {
            return;
        }
        self.player.alive = false;
        self.explosion.sync_to(&self.player.object);
        self.explosion.start(self.tick);
        self.flame.stop();
        self.events.push(GameEvent::PlayerKilled { tick: self.tick });
        log::info!("Player destroyed at tick {}", self.tick);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn live_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.is_live())
    }

    /// Explosion has played through (or never started)
    pub fn explosion_finished(&self) -> bool {
        !self.explosion.is_playing() || self.explosion.is_finished(self.tick, self.config.anim_frame_ticks)
    }
}

fn player_start(bounds: &Bounds) -> DVec2 {
    DVec2::new(bounds.width / 2.0, bounds.height / 2.0)
}

/// Points for destroying an asteroid of the given level
pub fn score_for_level(level: u8) -> u64 {
    match level {
        3 => 20,
        2 => 50,
        _ => 100,
    }
}
