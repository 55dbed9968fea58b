//! Fixed timestep simulation tick
//!
//! Advances the world exactly one step per call. Wall-clock cadence is the
//! driver's concern; the tick only counts steps.

use super::collision::collides;
use super::state::{score_for_level, Bullet, GameEvent, World};

/// Held action buttons for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Blow up the ship on the spot
    pub self_destruct: bool,
    /// Shoot (repeats at the fire cooldown while held)
    pub fire: bool,
    /// Thrust along the aim vector
    pub accelerate: bool,
}

/// Advance the world by one step
pub fn tick(world: &mut World, input: &TickInput) {
    if world.new_game_requested {
        world.new_game_requested = false;
        world.reset();
    }

    world.tick += 1;

    if input.self_destruct {
        world.kill_player();
    }

    apply_thrust(world, input.accelerate);

    if input.fire && world.player.alive && world.tick >= world.next_fire_tick {
        fire_bullet(world);
    }

    let bounds = world.config.bounds;
    world.player.object.advance(&bounds);

    world.flame.sync_to(&world.player.object);
    world.explosion.sync_to(&world.player.object);

    for bullet in world.bullets.iter_mut().filter(|b| b.is_live()) {
        bullet.lifetime -= 1;
        bullet.object.advance(&bounds);
    }

    for rock in &mut world.asteroids {
        rock.advance(&bounds);
    }

    purge_expired_bullets(world);
    resolve_bullet_hits(world);

    if world.player.alive && player_hits_asteroid(world) {
        world.kill_player();
    }

    bounce_asteroids(world);
}

fn apply_thrust(world: &mut World, accelerate: bool) {
    let thrusting = accelerate && world.player.alive;
    if thrusting {
        world.player.object.vel += world.aim * world.config.accel_scale;
        if !world.thrusting {
            world.flame.start(world.tick);
        }
    } else {
        world.flame.stop();
    }
    world.thrusting = thrusting;
}

fn fire_bullet(world: &mut World) {
    let mut object = world.player.object;
    object.vel += world.aim * world.config.bullet_scale;

    world.bullets.push_back(Bullet {
        object,
        lifetime: world.config.bullet_lifetime,
    });
    world.next_fire_tick = world.tick + world.config.fire_cooldown;
    world.push_event(GameEvent::BulletFired);
}

/// Drop the expired prefix (bullets share one initial lifetime, so the oldest
/// expire first)
fn purge_expired_bullets(world: &mut World) {
    while world.bullets.front().is_some_and(|b| !b.is_live()) {
        world.bullets.pop_front();
    }
    debug_assert!(world.bullets.iter().all(Bullet::is_live));
}

/// Each bullet takes out the first asteroid it touches, in collection order
fn resolve_bullet_hits(world: &mut World) {
    let bounds = world.config.bounds;
    let bullet_range = world.shapes.bullet.range();

    let mut i = 0;
    while i < world.bullets.len() {
        let pos = world.bullets[i].object.pos;
        let hit = world
            .asteroids
            .iter()
            .position(|rock| collides(pos, bullet_range, rock.object.pos, rock.range(), &bounds));

        let Some(index) = hit else {
            i += 1;
            continue;
        };

        world.bullets.remove(i);
        let rock = world.asteroids.remove(index);
        let children = rock.split(&mut world.rng, &bounds);
        log::debug!(
            "Asteroid level {} destroyed at ({:.1}, {:.1}), {} children",
            rock.level,
            rock.object.pos.x,
            rock.object.pos.y,
            children.len()
        );

        world.score += score_for_level(rock.level);
        world.asteroids.extend(children);
        world.push_event(GameEvent::AsteroidDestroyed {
            level: rock.level,
            pos: rock.object.pos,
        });
    }
}

fn player_hits_asteroid(world: &World) -> bool {
    let bounds = world.config.bounds;
    let ship = &world.player.object;
    let ship_range = world.shapes.ship.range();

    world
        .asteroids
        .iter()
        .any(|rock| collides(ship.pos, ship_range, rock.object.pos, rock.range(), &bounds))
}

/// Touching asteroids trade velocities (every pair, no position correction)
fn bounce_asteroids(world: &mut World) {
    let bounds = world.config.bounds;
    let rocks = &mut world.asteroids;

    for i in 0..rocks.len() {
        for j in (i + 1)..rocks.len() {
            let (a, b) = (&rocks[i], &rocks[j]);
            if collides(a.object.pos, a.range(), b.object.pos, b.range(), &bounds) {
                let (head, tail) = rocks.split_at_mut(j);
                std::mem::swap(&mut head[i].object.vel, &mut tail[0].object.vel);
            }
        }
    }
}
