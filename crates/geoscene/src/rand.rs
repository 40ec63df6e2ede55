//! Seeded random scenes (benches, demo driver).
//!
//! Model
//! - Each shape is drawn from its own `ReplayToken { seed, index }`, so shape
//!   `i` of a scene can be regenerated without replaying shapes `0..i`.
//! - Kinds are uniform over the four variants; coordinates are whole cells
//!   inside the default canvas so every shape is at least partly visible.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{InvalidArgument, ShapeResult};
use crate::scene::{Scene, HEIGHT, WIDTH};
use crate::shape::{Circle, LineSegment, Point, Rectangle, Shape};

/// Random scene configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomSceneCfg {
    /// Number of shapes per scene.
    pub count: usize,
    /// Depths are drawn from `0..=max_depth`.
    pub max_depth: u32,
    /// Upper bound for segment length, rectangle sides, and circle radius (cells).
    pub max_extent: u32,
}

impl Default for RandomSceneCfg {
    fn default() -> Self {
        Self {
            count: 8,
            max_depth: 3,
            max_extent: 12,
        }
    }
}

impl RandomSceneCfg {
    pub fn validate(&self) -> ShapeResult<()> {
        if self.max_extent == 0 {
            return Err(InvalidArgument::params("max_extent must be > 0"));
        }
        if i32::try_from(self.max_depth).is_err() {
            return Err(InvalidArgument::params("max_depth must fit in i32"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn cell<R: Rng>(rng: &mut R) -> Vector2<f64> {
    Vector2::new(
        rng.gen_range(0..WIDTH) as f64,
        rng.gen_range(0..HEIGHT) as f64,
    )
}

/// Draw one valid shape. Fails only on invalid `cfg`.
pub fn random_shape<R: Rng>(cfg: &RandomSceneCfg, rng: &mut R) -> ShapeResult<Shape> {
    cfg.validate()?;
    let depth = rng.gen_range(0..=cfg.max_depth) as i32;
    let at = cell(rng);
    let p = Point::with_depth(at.x, at.y, depth)?;
    let len = f64::from(rng.gen_range(1..=cfg.max_extent));
    let shape = match rng.gen_range(0..4u8) {
        0 => Shape::from(p),
        1 => {
            let q = if rng.gen_bool(0.5) {
                Point::with_depth(at.x + len, at.y, depth)?
            } else {
                Point::with_depth(at.x, at.y + len, depth)?
            };
            Shape::from(LineSegment::new(p, q)?)
        }
        2 => {
            let h = f64::from(rng.gen_range(1..=cfg.max_extent));
            let q = Point::with_depth(at.x + len, at.y + h, depth)?;
            Shape::from(Rectangle::new(p, q)?)
        }
        _ => Shape::from(Circle::new(p, len)?),
    };
    Ok(shape)
}

/// Regenerate shape `tok.index` of the scene seeded with `tok.seed`.
pub fn replay_shape(cfg: &RandomSceneCfg, tok: ReplayToken) -> ShapeResult<Shape> {
    random_shape(cfg, &mut tok.to_std_rng())
}

/// Build a scene of `cfg.count` shapes; same `seed` gives the same scene.
pub fn random_scene(cfg: &RandomSceneCfg, seed: u64) -> ShapeResult<Scene> {
    cfg.validate()?;
    let mut scene = Scene::new();
    for index in 0..cfg.count as u64 {
        let shape = replay_shape(cfg, ReplayToken { seed, index })?;
        scene.add_object(shape.shared());
    }
    debug!(seed, count = cfg.count, "random_scene");
    Ok(scene)
}
