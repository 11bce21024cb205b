//! Game state and the stage lifecycle
//!
//! Everything the simulation mutates lives here: the five entity
//! collections, the player, timers, score, and the seeded RNG that all
//! randomized creation draws from.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Bullet, Debris, Enemy, Explosion, PlayerShip, SpriteAtlas, SpriteId};
use crate::consts::*;
use crate::highscores::HighScores;

/// Which screen the game is on; an external input toggles between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameView {
    Playing,
    Highscores,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The one random source; every spawn and particle draw goes through it
    pub rng: Pcg32,
    pub view: GameView,
    pub score: u32,
    pub highscore: u32,
    pub enemy_spawn_timer: i32,
    pub reset_stage_timer: i32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Stage resets performed so far; the frontend persists scores when it
    /// sees this change
    pub stage_resets: u32,
    pub player: PlayerShip,
    pub player_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub debris: Vec<Debris>,
    /// In-memory high-score table; file persistence is the frontend's job
    pub highscores: HighScores,
    pub atlas: SpriteAtlas,
}

impl GameState {
    /// Create a fresh world. `reset_stage` doubles as the initializer, so
    /// game start and stage restart go through the same code path.
    pub fn new(seed: u64, atlas: SpriteAtlas, highscores: HighScores) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            view: GameView::Playing,
            score: 0,
            highscore: 0,
            enemy_spawn_timer: ENEMY_SPAWN_INTERVAL,
            reset_stage_timer: RESET_STAGE_DELAY,
            time_ticks: 0,
            stage_resets: 0,
            player: PlayerShip::new(atlas.size(SpriteId::Player)),
            player_bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            explosions: Vec::new(),
            debris: Vec::new(),
            highscores,
            atlas,
        };
        state.reset_stage();
        // The initializing reset is not a stage end
        state.stage_resets = 0;
        state
    }

    /// End the stage: clear every collection, reinitialize the player and
    /// timers, fold the score into the high-score table, start from zero.
    pub fn reset_stage(&mut self) {
        self.player_bullets.clear();
        self.enemies.clear();
        self.enemy_bullets.clear();
        self.explosions.clear();
        self.debris.clear();
        self.player.init();
        self.enemy_spawn_timer = ENEMY_SPAWN_INTERVAL;
        self.reset_stage_timer = RESET_STAGE_DELAY;

        self.highscores.add_score(self.score, self.time_ticks);
        self.highscore = self.highscores.high_score();
        if self.score > 0 {
            log::info!("stage over: score {} (best {})", self.score, self.highscore);
        }
        self.score = 0;
        self.stage_resets += 1;
    }

    /// Flip between the playing field and the high-score screen
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            GameView::Playing => GameView::Highscores,
            GameView::Highscores => GameView::Playing,
        };
    }
}
