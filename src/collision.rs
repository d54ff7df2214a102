//! Circle overlap tests between the ship and the meteors.

use ggez::glam::Vec2;

use crate::state::{Obstacle, Player};

/// True when two circles overlap. Touching at exactly one point is not an
/// overlap.
#[inline]
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let radius_sum = radius_a + radius_b;
    center_a.distance_squared(center_b) < radius_sum * radius_sum
}

/// Index of the first obstacle touching the player.
pub fn first_hit(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| circles_overlap(player.pos, player.radius, o.pos, o.radius))
}
