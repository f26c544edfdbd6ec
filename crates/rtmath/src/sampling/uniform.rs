//! Independent uniform samples in the unit disk and on the unit sphere.
use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Vec2, Vec3};
use crate::sampling::{Prng, Sampling2d, Sampling3d};

/// Polar sample in the unit disk. `centered` uses the radius directly, concentrating
/// points near the origin; otherwise the density is uniform over the area.
pub(crate) fn disk_point(rng: &mut Prng, centered: bool) -> Vec2<f32> {
    let u = rng.next_float();
    let r = if centered { u } else { u.sqrt() };
    let (sin, cos) = (rng.next_float() * TAU).sin_cos();
    Vec2::new(r * cos, r * sin)
}

/// Uniform point on the unit sphere (Marsaglia 1972).
pub(crate) fn sphere_point(rng: &mut Prng) -> Vec3<f32> {
    loop {
        let x1 = rng.next_float() * 2.0 - 1.0;
        let x2 = rng.next_float() * 2.0 - 1.0;
        let sqr = x1 * x1 + x2 * x2;
        if sqr >= 1.0 {
            continue;
        }
        let s = (1.0 - sqr).sqrt();
        return Vec3::new(2.0 * x1 * s, 2.0 * x2 * s, 1.0 - 2.0 * sqr);
    }
}

/// Uniformly distributed points in the unit disk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformDiskSampling {
    pub seed: i64,
    pub num_samples: usize,
    /// Use `r = u` instead of `r = sqrt(u)`.
    pub centered: bool,
}

impl UniformDiskSampling {
    pub fn new(seed: i64, num_samples: usize) -> Self {
        Self {
            seed,
            num_samples,
            centered: false,
        }
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }
}

impl Sampling2d for UniformDiskSampling {
    type Samples = UniformDiskSamples;

    fn samples(&self) -> Self::Samples {
        UniformDiskSamples {
            rng: Prng::new(self.seed),
            remaining: self.num_samples,
            centered: self.centered,
        }
    }
}

/// Iterator returned by [`UniformDiskSampling::samples`](Sampling2d::samples).
#[derive(Debug, Clone)]
pub struct UniformDiskSamples {
    rng: Prng,
    remaining: usize,
    centered: bool,
}

impl Iterator for UniformDiskSamples {
    type Item = Vec2<f32>;

    fn next(&mut self) -> Option<Vec2<f32>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(disk_point(&mut self.rng, self.centered))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UniformDiskSamples {}

/// Uniformly distributed points on the unit sphere.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformSphereSampling {
    pub seed: i64,
    pub num_samples: usize,
}

impl UniformSphereSampling {
    pub fn new(seed: i64, num_samples: usize) -> Self {
        Self { seed, num_samples }
    }
}

impl Sampling3d for UniformSphereSampling {
    type Samples = UniformSphereSamples;

    fn samples(&self) -> Self::Samples {
        UniformSphereSamples {
            rng: Prng::new(self.seed),
            remaining: self.num_samples,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UniformSphereSamples {
    rng: Prng,
    remaining: usize,
}

impl Iterator for UniformSphereSamples {
    type Item = Vec3<f32>;

    fn next(&mut self) -> Option<Vec3<f32>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(sphere_point(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UniformSphereSamples {}
