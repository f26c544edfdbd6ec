#![forbid(unsafe_code)]
//! rtmath: linear algebra and deterministic point sampling for real-time graphics.
//!
//! Modules:
//! - linalg: vectors, column-major matrices, quaternions, bounding boxes and frustum culling
//! - sampling: seeded blue-noise, stratified, spiral and uniform samplers, plus Gaussian kernels
//! - error: the crate-wide error type
//!
//! Matrices follow OpenGL conventions (right-handed, clip-space depth in `[-1, 1]`) and
//! convert losslessly to and from `glam` and `mint` types.
pub mod error;
pub mod linalg;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use rtmath::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::linalg::{
        Aabb, AxisAngle, FrustumIntersection, Intersection, Mat2, Mat3, Mat4, Mat4x3, Plane,
        PlaneMask, Quat, Scalar, Vec2, Vec3, Vec4,
    };
    pub use crate::sampling::{
        gaussian_kernel, gaussian_kernel_vec, BestCandidateSampling, Callback2d, Callback3d,
        PoissonDiskSampling, Prng, SampleStream2d, SampleStream3d, Sampling2d, Sampling3d,
        SpiralSampling, StratifiedSampling, UniformDiskSampling, UniformSphereSampling,
    };
}
