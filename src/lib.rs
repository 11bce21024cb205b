//! Astro Blitz - a side-scrolling arcade space shooter
//!
//! Core modules:
//! - `sim`: deterministic fixed-tick simulation (entities, collisions,
//!   spawning, particles, stage lifecycle)
//! - `render`: the narrow seam a frontend renders the world through
//! - `highscores`: persisted high-score table

pub mod highscores;
pub mod render;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// World dimensions in pixels
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Frame budget in milliseconds (pacing target for the frontend)
    pub const MS_PER_TICK: u64 = 1000 / TICKS_PER_SECOND as u64;

    /// Ticks between enemy spawns
    pub const ENEMY_SPAWN_INTERVAL: i32 = 120;
    /// Ticks the player stays dead before the stage resets
    pub const RESET_STAGE_DELAY: i32 = 300;

    /// Player movement speed (px/tick)
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 330.0;
    /// Ticks between player shots
    pub const PLAYER_RELOAD: i32 = 8;

    /// Ticks between enemy shots
    pub const ENEMY_RELOAD: i32 = 64;
    /// Enemy drift speed range (px/tick, inclusive)
    pub const ENEMY_MIN_SPEED: i32 = 2;
    pub const ENEMY_MAX_SPEED: i32 = 6;

    pub const PLAYER_BULLET_SPEED: f32 = 16.0;
    pub const ENEMY_BULLET_SPEED: f32 = 8.0;

    /// Score awarded per destroyed enemy
    pub const ENEMY_DESTROYED_SCORE: u32 = 100;

    /// Particles in one explosion burst
    pub const EXPLOSION_PARTICLES: usize = 32;
    /// Debris lifetime in ticks (two seconds)
    pub const DEBRIS_LIFE: i32 = 2 * TICKS_PER_SECOND as i32;
}
