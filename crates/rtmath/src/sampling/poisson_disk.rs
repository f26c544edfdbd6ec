//! Poisson-disk sampling of a disk (Bridson 2007).
use std::f32::consts::{SQRT_2, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::linalg::Vec2;
use crate::sampling::{Prng, Sampling2d};

/// Candidates tried around an active sample before it is retired.
pub const DEFAULT_K: usize = 30;

/// Poisson-disk sampling inside the disk of radius `disk_radius` centred at the origin.
///
/// Every pair of emitted samples is at least `min_dist` apart. The number of samples
/// depends on the seed and is not fixed in advance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonDiskSampling {
    pub seed: i64,
    pub disk_radius: f32,
    /// Minimum distance between any two samples.
    pub min_dist: f32,
    /// Attempts per active sample.
    pub k: usize,
}

impl PoissonDiskSampling {
    pub fn new(seed: i64, disk_radius: f32, min_dist: f32) -> Self {
        Self {
            seed,
            disk_radius,
            min_dist,
            k: DEFAULT_K,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.disk_radius.is_finite() || self.disk_radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "disk_radius must be finite and > 0".into(),
            ));
        }
        if !self.min_dist.is_finite() || self.min_dist <= 0.0 {
            return Err(Error::InvalidConfig("min_dist must be finite and > 0".into()));
        }
        if self.k == 0 {
            return Err(Error::InvalidConfig("k must be > 0".into()));
        }
        Ok(())
    }
}

impl Sampling2d for PoissonDiskSampling {
    type Samples = PoissonDiskSamples;

    fn samples(&self) -> Self::Samples {
        let usable = self.disk_radius.is_finite()
            && self.disk_radius > 0.0
            && self.min_dist.is_finite()
            && self.min_dist > 0.0;
        if !usable {
            warn!(
                "Poisson disk sampling needs a positive disk_radius and min_dist (got {} and {}); no samples.",
                self.disk_radius, self.min_dist
            );
            return PoissonDiskSamples::exhausted();
        }
        PoissonDiskSamples::new(self)
    }
}

/// Lazy Poisson-disk sample stream. Each call to `next` grows the pattern by one point.
#[derive(Debug, Clone)]
pub struct PoissonDiskSamples {
    rng: Prng,
    radius: f32,
    min_dist: f32,
    k: usize,
    cell_size: f32,
    num_cells: usize,
    grid: Vec<Option<Vec2<f32>>>,
    active: Vec<Vec2<f32>>,
    started: bool,
    finished: bool,
    emitted: usize,
}

impl PoissonDiskSamples {
    fn new(config: &PoissonDiskSampling) -> Self {
        let cell_size = config.min_dist / SQRT_2;
        let num_cells = (2.0 * config.disk_radius / cell_size) as usize + 1;
        Self {
            rng: Prng::new(config.seed),
            radius: config.disk_radius,
            min_dist: config.min_dist,
            k: config.k,
            cell_size,
            num_cells,
            grid: vec![None; num_cells * num_cells],
            active: Vec::new(),
            started: false,
            finished: false,
            emitted: 0,
        }
    }

    fn exhausted() -> Self {
        Self {
            rng: Prng::new(0),
            radius: 0.0,
            min_dist: 0.0,
            k: 0,
            cell_size: 1.0,
            num_cells: 0,
            grid: Vec::new(),
            active: Vec::new(),
            started: true,
            finished: true,
            emitted: 0,
        }
    }

    #[inline]
    fn cell(&self, v: f32) -> usize {
        (((v + self.radius) / self.cell_size) as usize).min(self.num_cells - 1)
    }

    fn has_neighbour_within(&self, p: Vec2<f32>) -> bool {
        let (cx, cy) = (self.cell(p.x), self.cell(p.y));
        let min_dist2 = self.min_dist * self.min_dist;
        let rows = cy.saturating_sub(2)..(cy + 3).min(self.num_cells);
        for y in rows {
            for x in cx.saturating_sub(2)..(cx + 3).min(self.num_cells) {
                if let Some(q) = self.grid[y * self.num_cells + x] {
                    if q.distance_squared(p) < min_dist2 {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn add(&mut self, p: Vec2<f32>) {
        let idx = self.cell(p.y) * self.num_cells + self.cell(p.x);
        self.grid[idx] = Some(p);
        self.active.push(p);
        self.emitted += 1;
    }

    fn initial(&mut self) -> Vec2<f32> {
        let r2 = self.radius * self.radius;
        loop {
            let x = (self.rng.next_float() * 2.0 - 1.0) * self.radius;
            let y = (self.rng.next_float() * 2.0 - 1.0) * self.radius;
            if x * x + y * y <= r2 {
                return Vec2::new(x, y);
            }
        }
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            debug!("Poisson disk sampling finished with {} samples.", self.emitted);
        }
    }
}

impl Iterator for PoissonDiskSamples {
    type Item = Vec2<f32>;

    fn next(&mut self) -> Option<Vec2<f32>> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            let p = self.initial();
            self.add(p);
            return Some(p);
        }
        let r2 = self.radius * self.radius;
        while !self.active.is_empty() {
            let i = self.rng.next_int(self.active.len() as i32) as usize;
            let center = self.active[i];
            for _ in 0..self.k {
                let angle = self.rng.next_float() * TAU;
                let dist = self.min_dist * (self.rng.next_float() + 1.0);
                let (sin, cos) = angle.sin_cos();
                let c = Vec2::new(center.x + cos * dist, center.y + sin * dist);
                if c.length_squared() > r2 || self.has_neighbour_within(c) {
                    continue;
                }
                self.add(c);
                return Some(c);
            }
            self.active.swap_remove(i);
        }
        self.finish();
        None
    }
}
