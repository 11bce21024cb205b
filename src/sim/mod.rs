//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the state and threaded through every draw
//! - Stable iteration order within each collection
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use entity::{
    Body, Bullet, Debris, Direction, Enemy, Explosion, LethalEdges, PlayerShip, Rgba, SpriteAtlas,
    SpriteId,
};
pub use state::{GameState, GameView};
pub use tick::{TickInput, tick};
