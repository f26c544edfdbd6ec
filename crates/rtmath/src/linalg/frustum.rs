//! View-frustum culling against the clip planes of a projection matrix.
//!
//! Planes are extracted with the Gribb/Hartmann method and normalised so that
//! evaluating a plane at a point gives its signed distance. Points on the positive
//! side of every plane are inside the frustum.
use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Aabb, Mat4, Scalar, Vec3, Vec4};

/// One of the six frustum planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Plane {
    /// `x = -1` in clip space.
    NX,
    /// `x = +1` in clip space.
    PX,
    NY,
    PY,
    /// Near plane.
    NZ,
    /// Far plane.
    PZ,
}

impl Plane {
    /// All planes in testing order.
    pub const ALL: [Plane; 6] = [
        Plane::NX,
        Plane::PX,
        Plane::NY,
        Plane::PY,
        Plane::NZ,
        Plane::PZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn mask(self) -> PlaneMask {
        PlaneMask::from_bits_truncate(1 << self.index())
    }
}

bitflags! {
    /// Selects the planes considered by [`FrustumIntersection::intersect_aab_masked`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlaneMask: u8 {
        const NX = 1 << 0;
        const PX = 1 << 1;
        const NY = 1 << 2;
        const PY = 1 << 3;
        const NZ = 1 << 4;
        const PZ = 1 << 5;
    }
}

/// Result of classifying a volume against the frustum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intersection {
    /// Fully inside every tested plane.
    Inside,
    /// Straddles at least one plane.
    Intersect,
    /// Rejected by the given plane.
    Outside(Plane),
}

impl Intersection {
    /// `true` unless the volume was rejected.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Intersection::Outside(_))
    }
}

/// The six clip planes of a projection or combined projection-view matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrustumIntersection<T> {
    planes: [Vec4<T>; 6],
}

impl<T: Scalar> FrustumIntersection<T> {
    pub fn new(m: &Mat4<T>) -> Self {
        let mut f = Self {
            planes: [Vec4::zero(); 6],
        };
        f.set(m);
        f
    }

    /// Re-extracts the planes from `m`.
    pub fn set(&mut self, m: &Mat4<T>) {
        let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));
        self.planes = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r3 + r2, r3 - r2].map(|p| {
            let inv = p.truncate().length().recip();
            p * inv
        });
    }

    /// The plane as `(nx, ny, nz, d)` with a unit normal pointing inwards.
    #[inline]
    pub fn plane(&self, plane: Plane) -> Vec4<T> {
        self.planes[plane.index()]
    }

    #[inline]
    fn distance(&self, plane: Plane, p: Vec3<T>) -> T {
        let pl = self.planes[plane.index()];
        pl.truncate().dot(p) + pl.w
    }

    pub fn test_point(&self, p: Vec3<T>) -> bool {
        Plane::ALL
            .iter()
            .all(|&plane| self.distance(plane, p) >= T::zero())
    }

    /// Conservative: may report `true` for spheres just outside a frustum corner.
    pub fn test_sphere(&self, center: Vec3<T>, radius: T) -> bool {
        Plane::ALL
            .iter()
            .all(|&plane| self.distance(plane, center) >= -radius)
    }

    /// Conservative box test using the corner farthest along each plane normal.
    pub fn test_aab(&self, min: Vec3<T>, max: Vec3<T>) -> bool {
        Plane::ALL
            .iter()
            .all(|&plane| self.distance(plane, self.p_vertex(plane, min, max)) >= T::zero())
    }

    pub fn test_aabb(&self, aabb: &Aabb<T>) -> bool {
        self.test_aab(aabb.min, aabb.max)
    }

    pub fn intersect_sphere(&self, center: Vec3<T>, radius: T) -> Intersection {
        let mut inside = true;
        for plane in Plane::ALL {
            let dist = self.distance(plane, center);
            if dist < -radius {
                return Intersection::Outside(plane);
            }
            inside &= dist >= radius;
        }
        if inside {
            Intersection::Inside
        } else {
            Intersection::Intersect
        }
    }

    pub fn intersect_aab(&self, min: Vec3<T>, max: Vec3<T>) -> Intersection {
        self.intersect_aab_masked(min, max, PlaneMask::all())
    }

    pub fn intersect_aabb(&self, aabb: &Aabb<T>) -> Intersection {
        self.intersect_aab(aabb.min, aabb.max)
    }

    /// Like [`intersect_aab`](Self::intersect_aab) but skips planes not in `mask`.
    pub fn intersect_aab_masked(
        &self,
        min: Vec3<T>,
        max: Vec3<T>,
        mask: PlaneMask,
    ) -> Intersection {
        let mut inside = true;
        for plane in Plane::ALL {
            if !mask.contains(plane.mask()) {
                continue;
            }
            if self.distance(plane, self.p_vertex(plane, min, max)) < T::zero() {
                return Intersection::Outside(plane);
            }
            inside &= self.distance(plane, self.n_vertex(plane, min, max)) >= T::zero();
        }
        if inside {
            Intersection::Inside
        } else {
            Intersection::Intersect
        }
    }

    fn p_vertex(&self, plane: Plane, min: Vec3<T>, max: Vec3<T>) -> Vec3<T> {
        let n = self.planes[plane.index()];
        Vec3::new(
            if n.x < T::zero() { min.x } else { max.x },
            if n.y < T::zero() { min.y } else { max.y },
            if n.z < T::zero() { min.z } else { max.z },
        )
    }

    fn n_vertex(&self, plane: Plane, min: Vec3<T>, max: Vec3<T>) -> Vec3<T> {
        let n = self.planes[plane.index()];
        Vec3::new(
            if n.x < T::zero() { max.x } else { min.x },
            if n.y < T::zero() { max.y } else { min.y },
            if n.z < T::zero() { max.z } else { min.z },
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn frustum() -> FrustumIntersection<f32> {
        let proj = Mat4::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        FrustumIntersection::new(&proj)
    }

    #[test]
    fn planes_are_normalised() {
        let f = frustum();
        for plane in Plane::ALL {
            assert_abs_diff_eq!(f.plane(plane).truncate().length(), 1.0, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(f.plane(Plane::NZ).w, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn points() {
        let f = frustum();
        assert!(f.test_point(Vec3::new(0.0, 0.0, -10.0)));
        assert!(!f.test_point(Vec3::new(0.0, 0.0, 10.0)));
        assert!(!f.test_point(Vec3::new(0.0, 0.0, -0.5)));
        assert!(!f.test_point(Vec3::new(20.0, 0.0, -10.0)));
    }

    #[test]
    fn spheres() {
        let f = frustum();
        assert_eq!(
            f.intersect_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0),
            Intersection::Inside
        );
        assert_eq!(
            f.intersect_sphere(Vec3::new(0.0, 0.0, -1.0), 1.0),
            Intersection::Intersect
        );
        assert_eq!(
            f.intersect_sphere(Vec3::new(-50.0, 0.0, -10.0), 1.0),
            Intersection::Outside(Plane::NX)
        );
        assert_eq!(
            f.intersect_sphere(Vec3::new(0.0, 0.0, -200.0), 1.0),
            Intersection::Outside(Plane::PZ)
        );
        assert!(f.test_sphere(Vec3::new(0.0, 0.0, -0.5), 1.0));
        assert!(!f.test_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0));
    }

    #[test]
    fn boxes() {
        let f = frustum();
        let inside = Aabb::new(Vec3::new(-1.0, -1.0, -12.0), Vec3::new(1.0, 1.0, -10.0));
        let straddling = Aabb::new(Vec3::new(-1.0, -1.0, -110.0), Vec3::new(1.0, 1.0, -90.0));
        let behind = Aabb::new(Vec3::new(-5.0, -5.0, 2.0), Vec3::new(5.0, 5.0, 4.0));
        assert_eq!(f.intersect_aabb(&inside), Intersection::Inside);
        assert_eq!(f.intersect_aabb(&straddling), Intersection::Intersect);
        assert_eq!(f.intersect_aabb(&behind), Intersection::Outside(Plane::NZ));
        assert!(f.test_aabb(&inside));
        assert!(f.test_aabb(&straddling));
        assert!(!f.test_aabb(&behind));
        assert!(!Intersection::Outside(Plane::PX).is_visible());
    }

    #[test]
    fn masked_planes_are_skipped() {
        let f = frustum();
        let far = Aabb::new(Vec3::new(-1.0, -1.0, -300.0), Vec3::new(1.0, 1.0, -200.0));
        assert_eq!(f.intersect_aabb(&far), Intersection::Outside(Plane::PZ));
        let without_far = PlaneMask::all() - PlaneMask::PZ;
        assert_eq!(
            f.intersect_aab_masked(far.min, far.max, without_far),
            Intersection::Inside
        );
        assert_eq!(
            f.intersect_aab_masked(far.min, far.max, PlaneMask::empty()),
            Intersection::Inside
        );
        assert_eq!(Plane::NY.mask(), PlaneMask::NY);
    }

    #[test]
    fn view_projection_culls_in_world_space() {
        let proj = Mat4::perspective(1.0_f64, 1.0, 0.1, 50.0);
        let view = Mat4::look_at(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let f = FrustumIntersection::new(&(proj * view));
        assert!(f.test_point(Vec3::zero()));
        assert!(!f.test_point(Vec3::new(0.0, 0.0, 20.0)));
    }
}
