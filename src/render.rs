//! The narrow seam between the simulation and whatever draws it
//!
//! The simulation exposes read access to every live entity; a frontend
//! implements [`Renderer`] and never reaches past it into sim internals.

use glam::Vec2;

use crate::highscores::HighScores;
use crate::sim::{GameState, GameView, Rect, Rgba, SpriteId};

pub trait Renderer {
    /// Draw a full sprite at a world position
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2);
    /// Draw a sprite tinted by an RGBA color (explosion particles)
    fn draw_tinted(&mut self, sprite: SpriteId, pos: Vec2, color: Rgba);
    /// Draw a sub-rectangle of a sprite (debris quadrants)
    fn draw_region(&mut self, sprite: SpriteId, src: Rect, pos: Vec2);
    /// Scrolling starfield behind everything else
    fn draw_background(&mut self, tick: u64);
    fn draw_hud(&mut self, score: u32, highscore: u32);
    /// Full-screen high-score listing
    fn draw_highscores(&mut self, table: &HighScores);
}

/// Submit one frame: either the playing field or the high-score screen.
/// Dead entities are never drawn; they vanish the tick they die.
pub fn render_world<R: Renderer>(renderer: &mut R, state: &GameState) {
    if state.view == GameView::Highscores {
        renderer.draw_highscores(&state.highscores);
        return;
    }

    renderer.draw_background(state.time_ticks);

    if state.player.body.alive() {
        renderer.draw_sprite(SpriteId::Player, state.player.body.pos);
    }
    for bullet in &state.player_bullets {
        if bullet.body.alive() {
            renderer.draw_sprite(SpriteId::PlayerBullet, bullet.body.pos);
        }
    }
    for enemy in &state.enemies {
        if enemy.body.alive() {
            renderer.draw_sprite(SpriteId::Enemy, enemy.body.pos);
        }
    }
    for bullet in &state.enemy_bullets {
        if bullet.body.alive() {
            renderer.draw_sprite(SpriteId::EnemyBullet, bullet.body.pos);
        }
    }
    for debris in &state.debris {
        if debris.alive() {
            renderer.draw_region(debris.sprite, debris.src, debris.pos);
        }
    }
    for explosion in &state.explosions {
        if explosion.alive() {
            renderer.draw_tinted(SpriteId::Explosion, explosion.pos, explosion.color);
        }
    }

    renderer.draw_hud(state.score, state.highscore);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, SpriteAtlas, TickInput, tick};

    /// Counts draw calls instead of drawing
    #[derive(Default)]
    struct CountingRenderer {
        sprites: usize,
        tinted: usize,
        regions: usize,
        hud: usize,
        highscore_screens: usize,
    }

    impl Renderer for CountingRenderer {
        fn draw_sprite(&mut self, _sprite: SpriteId, _pos: Vec2) {
            self.sprites += 1;
        }
        fn draw_tinted(&mut self, _sprite: SpriteId, _pos: Vec2, _color: Rgba) {
            self.tinted += 1;
        }
        fn draw_region(&mut self, _sprite: SpriteId, _src: Rect, _pos: Vec2) {
            self.regions += 1;
        }
        fn draw_background(&mut self, _tick: u64) {}
        fn draw_hud(&mut self, _score: u32, _highscore: u32) {
            self.hud += 1;
        }
        fn draw_highscores(&mut self, _table: &HighScores) {
            self.highscore_screens += 1;
        }
    }

    #[test]
    fn test_dead_entities_are_not_submitted() {
        let mut state = GameState::new(5, SpriteAtlas::default(), HighScores::new());
        state.enemy_spawn_timer = 1_000_000;

        let mut live = Bullet::player(Vec2::new(200.0, 200.0), Vec2::new(16.0, 4.0));
        let mut dead = live;
        dead.body.health = 0;
        live.body.health = 1;
        state.player_bullets.push(live);
        state.player_bullets.push(dead);

        let mut renderer = CountingRenderer::default();
        render_world(&mut renderer, &state);

        // Player + one live bullet
        assert_eq!(renderer.sprites, 2);
        assert_eq!(renderer.hud, 1);
        assert_eq!(renderer.highscore_screens, 0);
    }

    #[test]
    fn test_highscore_view_replaces_the_field() {
        let mut state = GameState::new(5, SpriteAtlas::default(), HighScores::new());
        tick(
            &mut state,
            &TickInput {
                toggle_view: true,
                ..Default::default()
            },
        );

        let mut renderer = CountingRenderer::default();
        render_world(&mut renderer, &state);

        assert_eq!(renderer.highscore_screens, 1);
        assert_eq!(renderer.sprites, 0);
        assert_eq!(renderer.hud, 0);
    }
}
