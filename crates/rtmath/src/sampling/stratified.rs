//! Jittered grid (stratified) sampling of the square `[-1, 1]^2`.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::linalg::Vec2;
use crate::sampling::{Prng, Sampling2d};

/// One sample per cell of an `n x n` grid over `[-1, 1]^2`, emitted row by row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StratifiedSampling {
    pub seed: i64,
    /// Cells per axis.
    pub n: usize,
    /// With `Some(c)`, jitter is confined to the central `1 - c` of each cell;
    /// `Some(1.0)` puts every sample at its cell centre.
    pub centering: Option<f32>,
}

impl StratifiedSampling {
    pub fn new(seed: i64, n: usize) -> Self {
        Self {
            seed,
            n,
            centering: None,
        }
    }

    pub fn with_centering(mut self, centering: f32) -> Self {
        self.centering = Some(centering);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n.checked_mul(self.n).is_none() {
            return Err(Error::InvalidConfig(format!(
                "n * n overflows usize, got n = {}",
                self.n
            )));
        }
        if let Some(c) = self.centering {
            if !(0.0..=1.0).contains(&c) {
                return Err(Error::InvalidConfig(format!(
                    "centering must be within [0, 1], got {c}"
                )));
            }
        }
        Ok(())
    }
}

impl Sampling2d for StratifiedSampling {
    type Samples = StratifiedSamples;

    fn samples(&self) -> Self::Samples {
        let (start, span) = match self.centering {
            Some(c) => {
                if !(0.0..=1.0).contains(&c) {
                    warn!("Stratified centering {} is outside [0, 1]; clamping.", c);
                }
                let c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
                (c * 0.5, 1.0 - c)
            }
            None => (0.0, 1.0),
        };
        StratifiedSamples {
            rng: Prng::new(self.seed),
            n: self.n,
            total: self.n.saturating_mul(self.n),
            start,
            span,
            index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StratifiedSamples {
    rng: Prng,
    n: usize,
    total: usize,
    start: f32,
    span: f32,
    index: usize,
}

impl StratifiedSamples {
    #[inline]
    fn coord(&mut self, cell: usize) -> f32 {
        let n = self.n as f32;
        let jitter = self.start + self.rng.next_float() * self.span;
        (jitter / n + cell as f32 / n) * 2.0 - 1.0
    }
}

impl Iterator for StratifiedSamples {
    type Item = Vec2<f32>;

    fn next(&mut self) -> Option<Vec2<f32>> {
        if self.index >= self.total {
            return None;
        }
        let (row, col) = (self.index / self.n, self.index % self.n);
        self.index += 1;
        let x = self.coord(col);
        let y = self.coord(row);
        Some(Vec2::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StratifiedSamples {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_of(v: f32, n: usize) -> usize {
        (((v + 1.0) * 0.5 * n as f32) as usize).min(n - 1)
    }

    #[test]
    fn one_sample_per_cell_in_row_major_order() {
        let points: Vec<_> = StratifiedSampling::new(42, 4).samples().collect();
        assert_eq!(points.len(), 16);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(cell_of(p.x, 4), i % 4, "x of sample {i}");
            assert_eq!(cell_of(p.y, 4), i / 4, "y of sample {i}");
        }
    }

    #[test]
    fn full_centering_hits_cell_centres() {
        let points: Vec<_> = StratifiedSampling::new(1, 2)
            .with_centering(1.0)
            .samples()
            .collect();
        assert_eq!(
            points,
            vec![
                Vec2::new(-0.5, -0.5),
                Vec2::new(0.5, -0.5),
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, 0.5),
            ]
        );
    }

    #[test]
    fn partial_centering_keeps_away_from_cell_edges() {
        let n = 8;
        let cell = 2.0 / n as f32;
        for p in StratifiedSampling::new(3, n).with_centering(0.5).samples() {
            for v in [p.x, p.y] {
                let offset = (v + 1.0) / cell - ((v + 1.0) / cell).floor();
                assert!((0.25 - 1e-4..=0.75 + 1e-4).contains(&offset), "{offset}");
            }
        }
    }

    #[test]
    fn deterministic_and_validated() {
        let s = StratifiedSampling::new(5, 3);
        assert_eq!(
            s.samples().collect::<Vec<_>>(),
            s.samples().collect::<Vec<_>>()
        );
        assert!(s.validate().is_ok());
        assert!(s.clone().with_centering(1.5).validate().is_err());
        assert_eq!(StratifiedSampling::new(5, 0).samples().count(), 0);
    }

    #[test]
    fn out_of_range_centering_is_clamped_not_dropped() {
        let over: Vec<_> = StratifiedSampling::new(1, 2)
            .with_centering(3.0)
            .samples()
            .collect();
        let full: Vec<_> = StratifiedSampling::new(1, 2)
            .with_centering(1.0)
            .samples()
            .collect();
        assert_eq!(over.len(), 4);
        assert_eq!(over, full);
        assert_eq!(
            StratifiedSampling::new(1, 3)
                .with_centering(f32::NAN)
                .samples()
                .count(),
            9
        );
    }

    #[test]
    fn huge_grids_do_not_overflow() {
        let s = StratifiedSampling::new(1, usize::MAX);
        assert!(matches!(s.validate(), Err(Error::InvalidConfig(_))));
        let mut samples = s.samples();
        assert_eq!(samples.size_hint(), (usize::MAX, Some(usize::MAX)));
        let first = samples.next().expect("first sample");
        assert!(first.is_finite());
    }
}
