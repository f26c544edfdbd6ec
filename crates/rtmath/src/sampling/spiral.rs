//! Samples along an Archimedean spiral, optionally jittered radially.
use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::linalg::Vec2;
use crate::sampling::{Prng, Sampling2d};

/// `num_samples` points on a spiral with `num_rotations` turns, from the origin out to
/// `radius`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiralSampling {
    pub seed: i64,
    pub radius: f32,
    pub num_rotations: f32,
    pub num_samples: usize,
    /// Radial jitter as a fraction of the spacing between turns. `0` draws no random
    /// numbers at all.
    pub jitter: f32,
}

impl SpiralSampling {
    pub fn new(seed: i64, radius: f32, num_rotations: f32, num_samples: usize) -> Self {
        Self {
            seed,
            radius,
            num_rotations,
            num_samples,
            jitter: 0.0,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::InvalidConfig("radius must be finite and >= 0".into()));
        }
        if !self.num_rotations.is_finite() || self.num_rotations <= 0.0 {
            return Err(Error::InvalidConfig(
                "num_rotations must be finite and > 0".into(),
            ));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(Error::InvalidConfig("jitter must be finite and >= 0".into()));
        }
        Ok(())
    }
}

impl Sampling2d for SpiralSampling {
    type Samples = SpiralSamples;

    fn samples(&self) -> Self::Samples {
        let count = match self.validate() {
            Ok(()) => self.num_samples,
            Err(e) => {
                warn!("Spiral sampling disabled: {}", e);
                0
            }
        };
        SpiralSamples {
            rng: Prng::new(self.seed),
            radius: self.radius,
            rotations: self.num_rotations,
            jitter: self.jitter,
            count,
            index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpiralSamples {
    rng: Prng,
    radius: f32,
    rotations: f32,
    jitter: f32,
    count: usize,
    index: usize,
}

impl Iterator for SpiralSamples {
    type Item = Vec2<f32>;

    fn next(&mut self) -> Option<Vec2<f32>> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index as f32;
        self.index += 1;
        if self.count == 1 {
            return Some(Vec2::zero());
        }
        let n = self.count as f32;
        let angle = TAU * (i * self.rotations) / n;
        let mut r = self.radius * i / (n - 1.0);
        if self.jitter > 0.0 {
            let spacing = self.radius / self.rotations;
            r += (self.rng.next_float() * 2.0 - 1.0) * spacing * self.jitter;
        }
        let (sin, cos) = angle.sin_cos();
        Some(Vec2::new(r * cos, r * sin))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpiralSamples {}
