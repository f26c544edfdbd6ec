//! Best-candidate (Mitchell's) blue-noise sampling.
//!
//! Each new sample is the one, out of `num_candidates` random candidates, that lies
//! farthest from every sample emitted so far. Nearest-neighbour distances come from a
//! [`QuadTree`] (2D) or an [`Octree`] (3D); the search is cut short as soon as a
//! candidate is known to be no better than the current best.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::linalg::{Vec2, Vec3};
use crate::sampling::uniform::{disk_point, sphere_point};
use crate::sampling::{Octree, Prng, QuadTree};

/// Candidates drawn per sample unless configured otherwise.
pub const DEFAULT_NUM_CANDIDATES: usize = 60;

/// Configuration for best-candidate sampling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BestCandidateSampling {
    pub seed: i64,
    /// Number of samples to emit.
    pub num_samples: usize,
    /// Random trials per sample. Higher values give better blue noise at higher cost.
    pub num_candidates: usize,
    /// Restrict [`sphere`](Self::sphere) to the `z >= 0` hemisphere.
    pub on_hemisphere: bool,
}

impl BestCandidateSampling {
    pub fn new(seed: i64, num_samples: usize) -> Self {
        Self {
            seed,
            num_samples,
            num_candidates: DEFAULT_NUM_CANDIDATES,
            on_hemisphere: false,
        }
    }

    pub fn with_num_candidates(mut self, num_candidates: usize) -> Self {
        self.num_candidates = num_candidates;
        self
    }

    pub fn with_hemisphere(mut self, on_hemisphere: bool) -> Self {
        self.on_hemisphere = on_hemisphere;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_candidates == 0 {
            return Err(Error::InvalidConfig("num_candidates must be > 0".into()));
        }
        Ok(())
    }

    fn candidates(&self) -> usize {
        if self.num_candidates == 0 {
            debug!("num_candidates is 0; using a single candidate per sample.");
        }
        self.num_candidates.max(1)
    }

    /// Samples in the unit disk.
    pub fn disk(&self) -> BestCandidate2d {
        BestCandidate2d::new(self, Domain2d::Disk)
    }

    /// Samples in the square `[-1, 1]^2`.
    pub fn quad(&self) -> BestCandidate2d {
        BestCandidate2d::new(self, Domain2d::Quad)
    }

    /// Samples in the cube `[-1, 1]^3`.
    pub fn cube(&self) -> BestCandidate3d {
        BestCandidate3d::new(self, Domain3d::Cube)
    }

    /// Samples on the unit sphere, or its upper half when `on_hemisphere` is set.
    ///
    /// Candidates are compared by chord length, which orders them the same way as
    /// great-circle distance.
    pub fn sphere(&self) -> BestCandidate3d {
        let domain = if self.on_hemisphere {
            Domain3d::Hemisphere
        } else {
            Domain3d::Sphere
        };
        BestCandidate3d::new(self, domain)
    }
}

#[derive(Debug, Clone, Copy)]
enum Domain2d {
    Disk,
    Quad,
}

#[derive(Debug, Clone, Copy)]
enum Domain3d {
    Cube,
    Sphere,
    Hemisphere,
}

/// Lazily generated 2D best-candidate samples.
#[derive(Debug, Clone)]
pub struct BestCandidate2d {
    rng: Prng,
    tree: QuadTree,
    domain: Domain2d,
    candidates: usize,
    remaining: usize,
}

impl BestCandidate2d {
    fn new(config: &BestCandidateSampling, domain: Domain2d) -> Self {
        Self {
            rng: Prng::new(config.seed),
            tree: QuadTree::new(-1.0, -1.0, 2.0),
            domain,
            candidates: config.candidates(),
            remaining: config.num_samples,
        }
    }

    fn candidate(&mut self) -> Vec2<f32> {
        match self.domain {
            Domain2d::Disk => disk_point(&mut self.rng, false),
            Domain2d::Quad => Vec2::new(
                self.rng.next_float() * 2.0 - 1.0,
                self.rng.next_float() * 2.0 - 1.0,
            ),
        }
    }
}

impl Iterator for BestCandidate2d {
    type Item = Vec2<f32>;

    fn next(&mut self) -> Option<Vec2<f32>> {
        if self.remaining == 0 {
            return None;
        }
        let mut best = Vec2::zero();
        let mut best_dist = 0.0_f32;
        for _ in 0..self.candidates {
            let c = self.candidate();
            let d = self.tree.nearest_bounded(c.x, c.y, best_dist, f32::INFINITY);
            if d > best_dist {
                best_dist = d;
                best = c;
            }
        }
        self.tree.insert(best);
        self.remaining -= 1;
        Some(best)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BestCandidate2d {}

/// Lazily generated 3D best-candidate samples.
#[derive(Debug, Clone)]
pub struct BestCandidate3d {
    rng: Prng,
    tree: Octree,
    domain: Domain3d,
    candidates: usize,
    remaining: usize,
}

impl BestCandidate3d {
    fn new(config: &BestCandidateSampling, domain: Domain3d) -> Self {
        Self {
            rng: Prng::new(config.seed),
            tree: Octree::new(-1.0, -1.0, -1.0, 2.0),
            domain,
            candidates: config.candidates(),
            remaining: config.num_samples,
        }
    }

    fn candidate(&mut self) -> Vec3<f32> {
        match self.domain {
            Domain3d::Cube => Vec3::new(
                self.rng.next_float() * 2.0 - 1.0,
                self.rng.next_float() * 2.0 - 1.0,
                self.rng.next_float() * 2.0 - 1.0,
            ),
            Domain3d::Sphere => sphere_point(&mut self.rng),
            Domain3d::Hemisphere => {
                let mut p = sphere_point(&mut self.rng);
                p.z = p.z.abs();
                p
            }
        }
    }
}

impl Iterator for BestCandidate3d {
    type Item = Vec3<f32>;

    fn next(&mut self) -> Option<Vec3<f32>> {
        if self.remaining == 0 {
            return None;
        }
        let mut best = Vec3::zero();
        let mut best_dist = 0.0_f32;
        for _ in 0..self.candidates {
            let c = self.candidate();
            let d = self
                .tree
                .nearest_bounded(c.x, c.y, c.z, best_dist, f32::INFINITY);
            if d > best_dist {
                best_dist = d;
                best = c;
            }
        }
        self.tree.insert(best);
        self.remaining -= 1;
        Some(best)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BestCandidate3d {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{SampleStream2d, Sampling2d, UniformDiskSampling};

    fn min_pairwise<P: Copy>(points: &[P], dist: impl Fn(P, P) -> f32) -> f32 {
        let mut min = f32::INFINITY;
        for (i, &a) in points.iter().enumerate() {
            for &b in &points[i + 1..] {
                min = min.min(dist(a, b));
            }
        }
        min
    }

    #[test]
    fn disk_samples_are_deterministic_and_inside() {
        let config = BestCandidateSampling::new(42, 200);
        let a: Vec<_> = config.disk().collect();
        let b: Vec<_> = config.disk().collect();
        assert_eq!(a.len(), 200);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.length() <= 1.0 + 1e-6));
    }

    #[test]
    fn spreads_better_than_white_noise() {
        let n = 150;
        let blue: Vec<_> = BestCandidateSampling::new(7, n).disk().collect();
        let white: Vec<_> = UniformDiskSampling::new(7, n).samples().collect();
        let d = |a: Vec2<f32>, b: Vec2<f32>| a.distance(b);
        assert!(min_pairwise(&blue, d) > 2.0 * min_pairwise(&white, d));
    }

    #[test]
    fn quad_and_cube_stay_in_bounds() {
        let config = BestCandidateSampling::new(3, 100).with_num_candidates(20);
        for p in config.quad() {
            assert!(p.x >= -1.0 && p.x < 1.0 && p.y >= -1.0 && p.y < 1.0);
        }
        let cube: Vec<_> = config.cube().collect();
        assert_eq!(cube.len(), 100);
        for p in cube {
            assert!(p.to_array().iter().all(|c| (-1.0..1.0).contains(c)));
        }
    }

    #[test]
    fn sphere_and_hemisphere() {
        let sphere: Vec<_> = BestCandidateSampling::new(5, 80).sphere().collect();
        assert!(sphere.iter().all(|p| (p.length() - 1.0).abs() < 1e-5));
        assert!(sphere.iter().any(|p| p.z < 0.0));

        let upper: Vec<_> = BestCandidateSampling::new(5, 80)
            .with_hemisphere(true)
            .sphere()
            .collect();
        assert!(upper.iter().all(|p| p.z >= 0.0));
    }

    #[test]
    fn degenerate_counts() {
        assert_eq!(BestCandidateSampling::new(1, 0).disk().count(), 0);

        let single = BestCandidateSampling::new(1, 10).with_num_candidates(0);
        assert!(single.validate().is_err());
        let mut seen: Vec<Vec2<f32>> = Vec::new();
        assert_eq!(single.quad().emit(&mut seen), 10);
        assert_eq!(seen.len(), 10);
    }
}
