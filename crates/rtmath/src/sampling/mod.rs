//! Deterministic point-set generators for the unit disk, square, cube and sphere.
//!
//! Every sampler is a small configuration struct carrying its own seed. Calling
//! [`Sampling2d::samples`] (or [`Sampling3d::samples`]) produces a lazy iterator that
//! draws from a fresh [`Prng`], so the same configuration always yields the same
//! points. Results can be consumed as an iterator, pushed into a [`Callback2d`] /
//! [`Callback3d`], or packed into a flat `f32` buffer.
use crate::error::{Error, Result};
use crate::linalg::{Vec2, Vec3};

pub mod best_candidate;
pub mod callback;
pub mod convolution;
pub mod octree;
pub mod poisson_disk;
pub mod quadtree;
pub mod random;
pub mod spiral;
pub mod stratified;
pub mod uniform;

pub use best_candidate::{BestCandidate2d, BestCandidate3d, BestCandidateSampling};
pub use callback::{Callback2d, Callback3d};
pub use convolution::{gaussian_kernel, gaussian_kernel_vec};
pub use octree::Octree;
pub use poisson_disk::{PoissonDiskSamples, PoissonDiskSampling};
pub use quadtree::QuadTree;
pub use random::Prng;
pub use spiral::{SpiralSamples, SpiralSampling};
pub use stratified::{StratifiedSamples, StratifiedSampling};
pub use uniform::{UniformDiskSampling, UniformSphereSampling};

/// A sampler producing points in the plane.
pub trait Sampling2d {
    type Samples: Iterator<Item = Vec2<f32>>;

    /// Starts a new, independent run.
    fn samples(&self) -> Self::Samples;

    /// Feeds every sample to `callback` and returns how many were produced.
    fn generate<C: Callback2d + ?Sized>(&self, callback: &mut C) -> usize {
        self.samples().emit(callback)
    }

    /// Writes samples as consecutive `x, y` pairs and returns the number of samples.
    fn generate_into(&self, dest: &mut [f32]) -> Result<usize> {
        self.samples().write_into(dest)
    }
}

/// A sampler producing points in space.
pub trait Sampling3d {
    type Samples: Iterator<Item = Vec3<f32>>;

    /// Starts a new, independent run.
    fn samples(&self) -> Self::Samples;

    /// Feeds every sample to `callback` and returns how many were produced.
    fn generate<C: Callback3d + ?Sized>(&self, callback: &mut C) -> usize {
        self.samples().emit(callback)
    }

    /// Writes samples as consecutive `x, y, z` triples and returns the number of samples.
    fn generate_into(&self, dest: &mut [f32]) -> Result<usize> {
        self.samples().write_into(dest)
    }
}

/// Consumers for any iterator of 2D samples.
pub trait SampleStream2d: Iterator<Item = Vec2<f32>> + Sized {
    fn emit<C: Callback2d + ?Sized>(self, callback: &mut C) -> usize {
        let mut count = 0;
        for p in self {
            callback.on_new_sample(p.x, p.y);
            count += 1;
        }
        count
    }

    fn write_into(self, dest: &mut [f32]) -> Result<usize> {
        write_packed(self.map(Vec2::to_array), dest)
    }
}

impl<I: Iterator<Item = Vec2<f32>>> SampleStream2d for I {}

/// Consumers for any iterator of 3D samples.
pub trait SampleStream3d: Iterator<Item = Vec3<f32>> + Sized {
    fn emit<C: Callback3d + ?Sized>(self, callback: &mut C) -> usize {
        let mut count = 0;
        for p in self {
            callback.on_new_sample(p.x, p.y, p.z);
            count += 1;
        }
        count
    }

    fn write_into(self, dest: &mut [f32]) -> Result<usize> {
        write_packed(self.map(Vec3::to_array), dest)
    }
}

impl<I: Iterator<Item = Vec3<f32>>> SampleStream3d for I {}

/// Packs fixed-size samples into `dest`. When `dest` runs out, the rest of the stream
/// is drained to report how much room a full run needs.
fn write_packed<const N: usize>(
    mut samples: impl Iterator<Item = [f32; N]>,
    dest: &mut [f32],
) -> Result<usize> {
    let mut written = 0;
    while let Some(sample) = samples.next() {
        let end = (written + 1) * N;
        if end > dest.len() {
            return Err(Error::BufferTooSmall {
                required: (written + 1 + samples.by_ref().count()) * N,
                available: dest.len(),
            });
        }
        dest[written * N..end].copy_from_slice(&sample);
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        count: usize,
    }

    impl Sampling2d for Line {
        type Samples = std::vec::IntoIter<Vec2<f32>>;

        fn samples(&self) -> Self::Samples {
            (0..self.count)
                .map(|i| Vec2::new(i as f32, -(i as f32)))
                .collect::<Vec<_>>()
                .into_iter()
        }
    }

    #[test]
    fn generate_counts_and_forwards_samples() {
        let mut seen = Vec::new();
        let n = Line { count: 3 }.generate(&mut |x: f32, y: f32| seen.push((x, y)));
        assert_eq!(n, 3);
        assert_eq!(seen, vec![(0.0, 0.0), (1.0, -1.0), (2.0, -2.0)]);
    }

    #[test]
    fn generate_into_packs_pairs() {
        let mut buf = [9.0; 7];
        let n = Line { count: 3 }.generate_into(&mut buf).expect("fits");
        assert_eq!(n, 3);
        assert_eq!(buf, [0.0, 0.0, 1.0, -1.0, 2.0, -2.0, 9.0]);
    }

    #[test]
    fn generate_into_reports_required_size() {
        let mut buf = [0.0; 5];
        let err = Line { count: 4 }.generate_into(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferTooSmall {
                required: 8,
                available: 5
            }
        ));
        assert_eq!(&buf[..4], &[0.0, 0.0, 1.0, -1.0]);
    }

    #[test]
    fn streams_pack_triples() {
        let points = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let mut buf = [0.0; 6];
        assert_eq!(points.into_iter().write_into(&mut buf).expect("fits"), 2);
        assert_eq!(buf, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
