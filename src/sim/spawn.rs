//! Timed enemy spawning

use rand::Rng;

use super::entity::{Enemy, SpriteId};
use super::state::GameState;
use crate::consts::*;

/// Count the spawn timer down; at zero, spawn exactly one enemy at the
/// right edge with randomized height and drift speed, then rearm. Skipped
/// ticks never produce catch-up spawns.
pub fn run(state: &mut GameState) {
    state.enemy_spawn_timer -= 1;
    if state.enemy_spawn_timer > 0 {
        return;
    }

    let size = state.atlas.size(SpriteId::Enemy);
    let max_y = (WORLD_HEIGHT - size.y).max(0.0) as i32;
    let y = state.rng.random_range(0..=max_y) as f32;
    let speed = state.rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED) as f32;

    state.enemies.push(Enemy::new(y, speed, size));
    state.enemy_spawn_timer = ENEMY_SPAWN_INTERVAL;
    log::debug!("enemy spawned at y={y} speed={speed}");
}
