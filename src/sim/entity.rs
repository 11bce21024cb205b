//! Entity data model
//!
//! The world is a small closed set of concrete kinds, each its own struct
//! around a shared kinematic [`Body`]. No trait objects, no downcasting:
//! a collection only ever holds one kind.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;

/// Visual asset handles. The simulation only ever reads sizes from the
/// [`SpriteAtlas`]; pixel data stays with whoever renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Player,
    PlayerBullet,
    Enemy,
    EnemyBullet,
    Explosion,
}

/// Pixel dimensions of every sprite, supplied by the asset-owning frontend.
/// Sizes feed collision bounds and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct SpriteAtlas {
    pub player: Vec2,
    pub player_bullet: Vec2,
    pub enemy: Vec2,
    pub enemy_bullet: Vec2,
    pub explosion: Vec2,
}

impl SpriteAtlas {
    pub fn size(&self, sprite: SpriteId) -> Vec2 {
        match sprite {
            SpriteId::Player => self.player,
            SpriteId::PlayerBullet => self.player_bullet,
            SpriteId::Enemy => self.enemy,
            SpriteId::EnemyBullet => self.enemy_bullet,
            SpriteId::Explosion => self.explosion,
        }
    }
}

impl Default for SpriteAtlas {
    /// Dimensions of the stock sprite set
    fn default() -> Self {
        Self {
            player: Vec2::new(64.0, 48.0),
            player_bullet: Vec2::new(16.0, 4.0),
            enemy: Vec2::new(48.0, 48.0),
            enemy_bullet: Vec2::new(12.0, 12.0),
            explosion: Vec2::new(32.0, 32.0),
        }
    }
}

/// RGBA tint for explosion particles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Shared kinematic and health record
#[derive(Debug, Clone, Copy)]
pub struct Body {
    /// Top-left anchored world position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: Vec2,
    /// `> 0` alive, `<= 0` evicted on the next sweep
    pub health: i32,
    pub sprite: SpriteId,
}

impl Body {
    pub fn new(sprite: SpriteId, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            health: 1,
            sprite,
        }
    }

    /// Collision bounds
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Take one hit. Every current kind starts at health 1, so a single hit
    /// is fatal; simultaneous hits in one tick may push health negative.
    pub fn hit(&mut self) {
        self.health -= 1;
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }

    /// One tick of motion
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// World edges that kill a bullet once crossed. Carried on the bullet at
/// creation instead of being inferred from its velocity sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct LethalEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl LethalEdges {
    /// Player bullets travel rightward and die off the right/top/bottom edges
    pub const PLAYER_BULLET: Self = Self {
        left: false,
        right: true,
        top: true,
        bottom: true,
    };
    /// Enemy bullets travel leftward and die off the left/top/bottom edges
    pub const ENEMY_BULLET: Self = Self {
        left: true,
        right: false,
        top: true,
        bottom: true,
    };

    /// True once `pos` has crossed any lethal edge
    pub fn crossed(&self, pos: Vec2) -> bool {
        (self.left && pos.x < 0.0)
            || (self.right && pos.x > WORLD_WIDTH)
            || (self.top && pos.y < 0.0)
            || (self.bottom && pos.y > WORLD_HEIGHT)
    }
}

/// Player movement intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stop,
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -PLAYER_SPEED),
            Direction::Down => Vec2::new(0.0, PLAYER_SPEED),
            Direction::Left => Vec2::new(-PLAYER_SPEED, 0.0),
            Direction::Right => Vec2::new(PLAYER_SPEED, 0.0),
            Direction::Stop => Vec2::ZERO,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy)]
pub struct PlayerShip {
    pub body: Body,
    pub direction: Direction,
    /// Fire intent for this tick
    pub fire: bool,
    /// Ticks until the next shot is allowed
    pub reload: i32,
}

impl PlayerShip {
    pub fn new(size: Vec2) -> Self {
        Self {
            body: Body::new(
                SpriteId::Player,
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                Vec2::ZERO,
                size,
            ),
            direction: Direction::Stop,
            fire: false,
            reload: 0,
        }
    }

    /// Back to the stage-start state
    pub fn init(&mut self) {
        self.body.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.body.vel = Vec2::ZERO;
        self.body.health = 1;
        self.direction = Direction::Stop;
        self.fire = false;
        self.reload = 0;
    }

    /// Movement, bounds clamping and firing for one tick. Fired bullets go
    /// into `bullets`. Does nothing while dead.
    pub fn update(&mut self, bullet_size: Vec2, bullets: &mut Vec<Bullet>) {
        if !self.body.alive() {
            return;
        }
        if self.reload > 0 {
            self.reload -= 1;
        }

        self.body.pos += self.direction.delta();
        self.body.pos = self.body.pos.clamp(
            Vec2::ZERO,
            Vec2::new(WORLD_WIDTH, WORLD_HEIGHT) - self.body.size,
        );

        if self.fire && self.reload <= 0 {
            bullets.push(Bullet::player(self.muzzle(bullet_size), bullet_size));
            self.reload = PLAYER_RELOAD;
        }
    }

    /// Bullet spawn point: just off the nose, vertically centered
    fn muzzle(&self, bullet_size: Vec2) -> Vec2 {
        Vec2::new(
            self.body.pos.x + self.body.size.x,
            self.body.center().y - bullet_size.y / 2.0,
        )
    }
}

/// A bullet from either faction; the faction is encoded in its sprite,
/// velocity and lethal edge set at creation.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub body: Body,
    lethal: LethalEdges,
}

impl Bullet {
    pub fn player(pos: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(
                SpriteId::PlayerBullet,
                pos,
                Vec2::new(PLAYER_BULLET_SPEED, 0.0),
                size,
            ),
            lethal: LethalEdges::PLAYER_BULLET,
        }
    }

    /// Enemy bullet already aimed along `vel`
    pub fn enemy(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(SpriteId::EnemyBullet, pos, vel, size),
            lethal: LethalEdges::ENEMY_BULLET,
        }
    }

    pub fn update(&mut self) {
        self.body.integrate();
        if self.lethal.crossed(self.body.pos) {
            self.body.health = 0;
        }
    }
}

/// An enemy ship drifting leftward across the field
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub body: Body,
    /// Ticks until the next shot
    pub reload: i32,
}

impl Enemy {
    /// Spawn at the right edge of the world
    pub fn new(y: f32, speed: f32, size: Vec2) -> Self {
        Self {
            body: Body::new(
                SpriteId::Enemy,
                Vec2::new(WORLD_WIDTH, y),
                Vec2::new(-speed, 0.0),
                size,
            ),
            reload: ENEMY_RELOAD,
        }
    }

    /// Drift; die past the left edge; fire at the player's current center
    /// when reloaded. `target` is `None` while the player is dead. Fired
    /// bullets go into `fired` and are merged into the shared enemy-bullet
    /// collection after the sweep.
    pub fn update(&mut self, target: Option<Vec2>, bullet_size: Vec2, fired: &mut Vec<Bullet>) {
        self.body.integrate();
        if self.body.pos.x < -self.body.size.x {
            self.body.health = 0;
            return;
        }

        if self.reload > 0 {
            self.reload -= 1;
        }
        if self.reload <= 0 {
            if let Some(target) = target {
                let pos = self.body.center() - bullet_size / 2.0;
                fired.push(Bullet::enemy(pos, self.aim(target), bullet_size));
                self.reload = ENEMY_RELOAD;
            }
        }
    }

    /// Aim slope toward the target at fixed bullet speed. An enemy sitting
    /// exactly on the target falls back to straight left.
    fn aim(&self, target: Vec2) -> Vec2 {
        let dir = (target - self.body.center()).normalize_or_zero();
        if dir == Vec2::ZERO {
            Vec2::new(-ENEMY_BULLET_SPEED, 0.0)
        } else {
            dir * ENEMY_BULLET_SPEED
        }
    }
}

/// A single explosion particle. `life` starts at the rolled alpha value so
/// brighter particles linger longer; eviction happens when it runs out.
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgba,
    pub life: i32,
}

impl Explosion {
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1;
    }

    pub fn alive(&self) -> bool {
        self.life > 0
    }
}

/// One quadrant of a destroyed entity's sprite, tumbling away
#[derive(Debug, Clone, Copy)]
pub struct Debris {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks
    pub life: i32,
    /// Sprite of the entity that shattered
    pub sprite: SpriteId,
    /// Sub-rectangle of `sprite` this piece shows
    pub src: Rect,
}

impl Debris {
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1;
    }

    pub fn alive(&self) -> bool {
        self.life > 0
    }
}
