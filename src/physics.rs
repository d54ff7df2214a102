use ggez::glam::Vec2;
use std::time::Instant;

use crate::collision::first_hit;
use crate::input::MoveIntent;
use crate::state::{GameState, Obstacle, Player};

/// Moves the ship by one tick of intent and keeps its bounding box on the
/// playfield.
pub fn move_player(player: &mut Player, intent: &MoveIntent, speed: f32, bounds: Vec2) {
    let (dx, dy) = intent.velocity(speed);
    player.pos += Vec2::new(dx, dy);

    let r = player.radius;
    player.pos.x = player.pos.x.clamp(r, bounds.x - r);
    player.pos.y = player.pos.y.clamp(r, bounds.y - r);

    if let Some(heading) = intent.heading() {
        player.heading = heading;
    }
}

/// Bounces `pos` back inside `[r, max - r]` along one axis. Returns true if
/// the edge was crossed.
fn reflect_axis(pos: &mut f32, vel: &mut f32, r: f32, max: f32) -> bool {
    if *pos - r < 0.0 {
        *pos = 2.0 * r - *pos;
    } else if *pos + r > max {
        *pos = 2.0 * (max - r) - *pos;
    } else {
        return false;
    }
    *vel = -*vel;
    true
}

pub fn move_obstacle(obstacle: &mut Obstacle, bounds: Vec2) {
    obstacle.pos += obstacle.vel;

    let r = obstacle.radius;
    if reflect_axis(&mut obstacle.pos.x, &mut obstacle.vel.x, r, bounds.x) {
        obstacle.flip_x = !obstacle.flip_x;
    }
    if reflect_axis(&mut obstacle.pos.y, &mut obstacle.vel.y, r, bounds.y) {
        obstacle.flip_y = !obstacle.flip_y;
    }
}

/// Advances the simulation by one fixed tick and returns the index of the
/// meteor that destroyed the ship, if one did.
///
/// Pause gates everything here: ship input, meteor motion and collision.
pub fn step(state: &mut GameState, intent: &MoveIntent, speed: f32, now: Instant) -> Option<usize> {
    if state.settings.paused {
        return None;
    }

    let bounds = Vec2::new(state.width, state.height);

    if state.player.is_alive() {
        move_player(&mut state.player, intent, speed, bounds);
    }

    for obstacle in &mut state.obstacles {
        move_obstacle(obstacle, bounds);
    }

    if !state.player.is_alive() {
        return None;
    }
    let hit = first_hit(&state.player, &state.obstacles);
    if hit.is_some() {
        state.kill_player(now);
    }
    hit
}
