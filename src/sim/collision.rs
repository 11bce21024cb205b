//! Axis-aligned collision detection between opposing factions
//!
//! Two all-pairs scans per tick: every enemy against every player bullet,
//! and every enemy bullet against the player. Populations are tens of
//! entities, so the quadratic scan is fine.

use glam::Vec2;

use super::entity::SpriteId;
use super::particles;
use super::state::GameState;
use crate::consts::*;

/// An axis-aligned rectangle in world space, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Strict AABB overlap: the intersection must have positive area, so
/// edge-touching and degenerate zero-size rectangles never collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let max_x = a.pos.x.max(b.pos.x);
    let min_xw = (a.pos.x + a.size.x).min(b.pos.x + b.size.x);
    let max_y = a.pos.y.max(b.pos.y);
    let min_yh = (a.pos.y + a.size.y).min(b.pos.y + b.size.y);
    max_x < min_xw && max_y < min_yh
}

/// Where an enemy died, captured before the hit mutated it
#[derive(Debug, Clone, Copy)]
struct KillSite {
    pos: Vec2,
    size: Vec2,
    sprite: SpriteId,
}

/// Run both faction scans for this tick.
///
/// Every overlapping pair reacts independently, so one tick can drive a
/// health below zero. Kill reactions that touch other collections (score
/// already applied inline, particles deferred) flush after both scans, so
/// no scan ever observes a particle it caused.
pub fn resolve(state: &mut GameState) {
    let mut kills: Vec<KillSite> = Vec::new();

    for enemy in &mut state.enemies {
        for bullet in &mut state.player_bullets {
            if overlaps(&enemy.body.bounds(), &bullet.body.bounds()) {
                kills.push(KillSite {
                    pos: enemy.body.pos,
                    size: enemy.body.size,
                    sprite: enemy.body.sprite,
                });
                enemy.body.hit();
                bullet.body.hit();
                state.score += ENEMY_DESTROYED_SCORE;
            }
        }
    }

    for bullet in &mut state.enemy_bullets {
        if overlaps(&state.player.body.bounds(), &bullet.body.bounds()) {
            state.player.body.hit();
            bullet.body.hit();
        }
    }

    for kill in kills {
        log::debug!("enemy destroyed at {:?}, score {}", kill.pos, state.score);
        particles::explosion_burst(
            &mut state.rng,
            &mut state.explosions,
            kill.pos,
            EXPLOSION_PARTICLES,
        );
        particles::debris_shatter(
            &mut state.rng,
            &mut state.debris,
            kill.pos,
            kill.size,
            kill.sprite,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScores;
    use crate::sim::entity::{Bullet, Enemy, SpriteAtlas};
    use proptest::prelude::*;

    fn test_state() -> GameState {
        GameState::new(7, SpriteAtlas::default(), HighScores::new())
    }

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));

        let far = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &far));
    }

    #[test]
    fn test_edge_touching_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_degenerate_rect_never_collides() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let line = Rect::new(5.0, 5.0, 4.0, 0.0);
        assert!(!overlaps(&a, &point));
        assert!(!overlaps(&a, &line));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }

    #[test]
    fn test_bullet_kill_scores_and_shatters() {
        let mut state = test_state();

        let mut enemy = Enemy::new(0.0, 2.0, Vec2::new(20.0, 20.0));
        enemy.body.pos = Vec2::new(98.0, 98.0);
        state.enemies.push(enemy);
        state
            .player_bullets
            .push(Bullet::player(Vec2::new(100.0, 100.0), Vec2::new(10.0, 4.0)));

        resolve(&mut state);

        assert_eq!(state.score, ENEMY_DESTROYED_SCORE);
        assert!(!state.enemies[0].body.alive());
        assert!(!state.player_bullets[0].body.alive());
        assert_eq!(state.explosions.len(), EXPLOSION_PARTICLES);
        assert_eq!(state.debris.len(), 4);
        // Debris starts at the enemy's pre-hit center
        for debris in &state.debris {
            assert_eq!(debris.pos, Vec2::new(108.0, 108.0));
        }
    }

    #[test]
    fn test_enemy_bullet_hits_player_without_score() {
        let mut state = test_state();
        let pos = state.player.body.center();
        state
            .enemy_bullets
            .push(Bullet::enemy(pos, Vec2::new(-8.0, 0.0), Vec2::new(12.0, 12.0)));

        resolve(&mut state);

        assert!(!state.player.body.alive());
        assert!(!state.enemy_bullets[0].body.alive());
        assert_eq!(state.score, 0);
        assert!(state.explosions.is_empty());
        assert!(state.debris.is_empty());
    }

    #[test]
    fn test_simultaneous_hits_apply_independently() {
        let mut state = test_state();

        let mut enemy = Enemy::new(0.0, 2.0, Vec2::new(20.0, 20.0));
        enemy.body.pos = Vec2::new(100.0, 100.0);
        state.enemies.push(enemy);
        // Two bullets overlapping the same enemy in the same tick
        state
            .player_bullets
            .push(Bullet::player(Vec2::new(102.0, 102.0), Vec2::new(10.0, 4.0)));
        state
            .player_bullets
            .push(Bullet::player(Vec2::new(104.0, 106.0), Vec2::new(10.0, 4.0)));

        resolve(&mut state);

        assert_eq!(state.enemies[0].body.health, -1);
        assert_eq!(state.score, 2 * ENEMY_DESTROYED_SCORE);
        assert_eq!(state.explosions.len(), 2 * EXPLOSION_PARTICLES);
        assert_eq!(state.debris.len(), 8);
    }
}
