//! Fixed timestep scheduler
//!
//! One call to [`tick`] advances the world by exactly one frame: apply the
//! player's intent, spawn, sweep every collection, then collide. Each sweep
//! evicts the dead before updating survivors, so an entity that died last
//! tick is never updated again, and collision reactions only become visible
//! on the following tick.

use super::collision;
use super::entity::{Bullet, Direction, SpriteId};
use super::spawn;
use super::state::{GameState, GameView};

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub direction: Direction,
    pub fire: bool,
    /// Switch between the playing field and the high-score screen
    pub toggle_view: bool,
}

/// Advance the world by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.toggle_view {
        state.toggle_view();
    }
    if state.view != GameView::Playing {
        // The world is frozen while the high-score screen is up
        return;
    }

    state.time_ticks += 1;

    state.player.direction = input.direction;
    state.player.fire = input.fire;

    let bullet_size = state.atlas.size(SpriteId::PlayerBullet);
    state.player.update(bullet_size, &mut state.player_bullets);

    spawn::run(state);

    advance_bullets(&mut state.player_bullets);

    // Enemies fire into a deferred sink; merging afterwards keeps the
    // shared enemy-bullet collection stable while the sweep runs.
    let target = if state.player.body.alive() {
        Some(state.player.body.center())
    } else {
        None
    };
    let enemy_bullet_size = state.atlas.size(SpriteId::EnemyBullet);
    let mut fired: Vec<Bullet> = Vec::new();
    state.enemies.retain(|e| e.body.alive());
    for enemy in &mut state.enemies {
        enemy.update(target, enemy_bullet_size, &mut fired);
    }
    state.enemy_bullets.extend(fired);

    advance_bullets(&mut state.enemy_bullets);

    state.explosions.retain(|e| e.alive());
    for explosion in &mut state.explosions {
        explosion.update();
    }

    state.debris.retain(|d| d.alive());
    for debris in &mut state.debris {
        debris.update();
    }

    collision::resolve(state);

    if !state.player.body.alive() {
        state.reset_stage_timer -= 1;
        if state.reset_stage_timer <= 0 {
            state.reset_stage();
        }
    }
}

/// Compacting sweep: drop the dead, then give every survivor one update
fn advance_bullets(bullets: &mut Vec<Bullet>) {
    bullets.retain(|b| b.body.alive());
    for bullet in bullets {
        bullet.update();
    }
}
