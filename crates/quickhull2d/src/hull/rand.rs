//! Random planar point clouds (uniform in an axis-aligned box).
//!
//! Purpose
//! - Provide a small, deterministic sampler for test inputs, benches, and
//!   the scatter example. Seeded `StdRng`, sequential ids, cleared flags.
//!
//! Code cross-refs: `types::{Point, PointId}`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, PointId};

/// Uniform box sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        // 100 points over roughly [0, 909): integer lattice 0..=1_000_000
        // scaled by 1/1100, the cloud the interactive frontend renders.
        let side = 1_000_000.0 / 1100.0;
        Self {
            count: 100,
            min: Vector2::zeros(),
            max: Vector2::new(side, side),
        }
    }
}

/// Draw `cfg.count` points uniformly in the box, deterministically per seed.
pub fn scatter(cfg: &ScatterCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cfg.count)
        .map(|i| {
            let x = rng.gen_range(cfg.min.x..=cfg.max.x);
            let y = rng.gen_range(cfg.min.y..=cfg.max.y);
            Point::new(PointId(i as u32), x, y)
        })
        .collect()
}
