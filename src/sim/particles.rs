//! Procedural particle emitters
//!
//! Two independent generators, both pure functions of a source position
//! plus the shared RNG: the explosion burst on a kill, and the debris
//! shatter that splits a dead entity's sprite into four tumbling quadrants.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::entity::{Debris, Explosion, Rgba, SpriteId};
use crate::consts::*;

/// Signed jitter in `[-n, n]`, biased toward zero by taking the difference
/// of two uniform draws
fn jitter(rng: &mut Pcg32, n: i32) -> f32 {
    (rng.random_range(0..=n) - rng.random_range(0..=n)) as f32
}

/// Emit exactly `count` explosion particles scattered around `at`.
///
/// Velocity lands in `[-1, 1]` per axis; the color comes from a fixed
/// four-way palette (red, orange, yellow, white); the alpha draw doubles
/// as the particle's lifetime in ticks, up to three seconds.
pub fn explosion_burst(rng: &mut Pcg32, out: &mut Vec<Explosion>, at: Vec2, count: usize) {
    for _ in 0..count {
        let pos = at + Vec2::new(jitter(rng, 32), jitter(rng, 32));
        let vel = Vec2::new(jitter(rng, 10), jitter(rng, 10)) / 10.0;

        let (r, g, b) = match rng.random_range(0..=4) {
            0 => (255, 0, 0),
            1 => (255, 128, 0),
            2 => (255, 255, 0),
            _ => (255, 255, 255),
        };
        let a = rng.random_range(0..=TICKS_PER_SECOND as i32) * 3;

        out.push(Explosion {
            pos,
            vel,
            color: Rgba { r, g, b, a: a as u8 },
            life: a,
        });
    }
}

/// Shatter a dead entity (world rect `pos`/`size`, drawn from `sprite`)
/// into a 2x2 grid of quadrant particles. Always exactly four, launched
/// upward from the entity's center.
pub fn debris_shatter(
    rng: &mut Pcg32,
    out: &mut Vec<Debris>,
    pos: Vec2,
    size: Vec2,
    sprite: SpriteId,
) {
    let half = size / 2.0;
    let center = pos + half;

    for qy in 0..2 {
        for qx in 0..2 {
            let vel = Vec2::new(jitter(rng, 5), -(5 + rng.random_range(0..=12)) as f32);
            out.push(Debris {
                pos: center,
                vel,
                life: DEBRIS_LIFE,
                sprite,
                src: Rect {
                    pos: Vec2::new(qx as f32 * half.x, qy as f32 * half.y),
                    size: half,
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(1234)
    }

    #[test]
    fn test_burst_emits_exact_count() {
        let mut rng = rng();
        let mut out = Vec::new();
        explosion_burst(&mut rng, &mut out, Vec2::new(400.0, 300.0), 32);
        assert_eq!(out.len(), 32);
        explosion_burst(&mut rng, &mut out, Vec2::new(400.0, 300.0), 5);
        assert_eq!(out.len(), 37);
    }

    #[test]
    fn test_burst_alpha_palette_and_kinematics() {
        let mut rng = rng();
        let mut out = Vec::new();
        explosion_burst(&mut rng, &mut out, Vec2::new(100.0, 100.0), 500);

        let palette = [
            (255u8, 0u8, 0u8),
            (255, 128, 0),
            (255, 255, 0),
            (255, 255, 255),
        ];
        for p in &out {
            assert!(palette.contains(&(p.color.r, p.color.g, p.color.b)));
            assert!(p.color.a as u32 <= 3 * TICKS_PER_SECOND);
            assert_eq!(p.life, p.color.a as i32);
            assert!(p.vel.x >= -1.0 && p.vel.x <= 1.0);
            assert!(p.vel.y >= -1.0 && p.vel.y <= 1.0);
            assert!((p.pos.x - 100.0).abs() <= 32.0);
            assert!((p.pos.y - 100.0).abs() <= 32.0);
        }
    }

    #[test]
    fn test_shatter_always_four_quadrants() {
        let mut rng = rng();
        let mut out = Vec::new();
        debris_shatter(
            &mut rng,
            &mut out,
            Vec2::new(200.0, 200.0),
            Vec2::new(48.0, 48.0),
            SpriteId::Enemy,
        );
        assert_eq!(out.len(), 4);

        let mut quads: Vec<(f32, f32)> = out.iter().map(|d| (d.src.pos.x, d.src.pos.y)).collect();
        quads.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            quads,
            vec![(0.0, 0.0), (0.0, 24.0), (24.0, 0.0), (24.0, 24.0)]
        );

        for debris in &out {
            assert_eq!(debris.pos, Vec2::new(224.0, 224.0));
            assert_eq!(debris.life, DEBRIS_LIFE);
            assert_eq!(debris.src.size, Vec2::new(24.0, 24.0));
            assert!(debris.vel.x >= -5.0 && debris.vel.x <= 5.0);
            assert!(debris.vel.y <= -5.0 && debris.vel.y >= -17.0);
        }
    }

    #[test]
    fn test_shatter_tolerates_degenerate_size() {
        let mut rng = rng();
        let mut out = Vec::new();
        debris_shatter(
            &mut rng,
            &mut out,
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            SpriteId::Enemy,
        );
        assert_eq!(out.len(), 4);
    }
}
