//! Axis-aligned bounding boxes.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Mat4, Scalar, Vec3};

/// An axis-aligned box spanning `min..=max`.
///
/// A box with `min > max` on any axis is empty; [`Aabb::empty`] is the neutral element
/// of [`Aabb::union`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb<T> {
    pub min: Vec3<T>,
    pub max: Vec3<T>,
}

impl<T: Scalar> Aabb<T> {
    /// Creates the box spanned by two opposite corners in any order.
    pub fn new(a: Vec3<T>, b: Vec3<T>) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(T::infinity()),
            max: Vec3::splat(T::neg_infinity()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vec3<T> {
        (self.min + self.max) * T::lit(0.5)
    }

    /// Half the size along each axis.
    pub fn extent(&self) -> Vec3<T> {
        (self.max - self.min) * T::lit(0.5)
    }

    pub fn union_point(&self, p: Vec3<T>) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The overlap of both boxes, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let out = Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        };
        (!out.is_empty()).then_some(out)
    }

    pub fn contains_point(&self, p: Vec3<T>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn intersects_aabb(&self, other: &Self) -> bool {
        self.max.x >= other.min.x
            && self.max.y >= other.min.y
            && self.max.z >= other.min.z
            && self.min.x <= other.max.x
            && self.min.y <= other.max.y
            && self.min.z <= other.max.z
    }

    /// Whether the sphere at `center` with `radius` touches the box.
    pub fn intersects_sphere(&self, center: Vec3<T>, radius: T) -> bool {
        let closest = center.max(self.min).min(self.max);
        closest.distance_squared(center) <= radius * radius
    }

    /// The smallest box containing this box after transforming it by `m`.
    pub fn transform(&self, m: &Mat4<T>) -> Self {
        if self.is_empty() {
            return *self;
        }
        let translation = m.w_axis.truncate();
        let mut min = translation;
        let mut max = translation;
        for (col, (lo, hi)) in [
            (m.x_axis.truncate(), (self.min.x, self.max.x)),
            (m.y_axis.truncate(), (self.min.y, self.max.y)),
            (m.z_axis.truncate(), (self.min.z, self.max.z)),
        ] {
            let a = col * lo;
            let b = col * hi;
            min += a.min(b);
            max += a.max(b);
        }
        Self { min, max }
    }
}

impl<T: Scalar> Default for Aabb<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::linalg::Quat;

    fn unit() -> Aabb<f32> {
        Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0))
    }

    #[test]
    fn corners_are_sorted() {
        let b = unit();
        assert_eq!(b.min, Vec3::splat(-1.0));
        assert_eq!(b.max, Vec3::splat(1.0));
        assert_eq!(b.center(), Vec3::zero());
        assert_eq!(b.extent(), Vec3::one());
    }

    #[test]
    fn union_starts_from_empty() {
        let e = Aabb::<f32>::empty();
        assert!(e.is_empty());
        let b = e
            .union_point(Vec3::new(1.0, 2.0, 3.0))
            .union_point(Vec3::new(-1.0, 0.0, 5.0));
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, 3.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 5.0));
        assert_eq!(e.union(&unit()), unit());
    }

    #[test]
    fn intersection_of_disjoint_boxes_is_none() {
        let a = unit();
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(3.0));
        let c = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
        assert_eq!(
            a.intersection(&b),
            Some(Aabb::new(Vec3::splat(0.5), Vec3::splat(1.0)))
        );
        assert!(a.intersects_aabb(&b));
        assert!(a.intersection(&c).is_none());
        assert!(!a.intersects_aabb(&c));
    }

    #[test]
    fn point_and_sphere_tests() {
        let b = unit();
        assert!(b.contains_point(Vec3::new(1.0, 0.0, -1.0)));
        assert!(!b.contains_point(Vec3::new(1.1, 0.0, 0.0)));
        assert!(b.intersects_sphere(Vec3::new(2.0, 0.0, 0.0), 1.0));
        assert!(!b.intersects_sphere(Vec3::new(2.0, 2.0, 0.0), 1.0));
    }

    #[test]
    fn transform_bounds_every_corner() {
        let b = Aabb::new(Vec3::new(-1.0_f64, -2.0, 0.0), Vec3::new(3.0, 1.0, 2.0));
        let m = Mat4::from_rotation_translation(
            Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalize(), 0.8),
            Vec3::new(5.0, -1.0, 2.0),
        );
        let t = b.transform(&m);
        let mut expected = Aabb::empty();
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { b.min.x } else { b.max.x },
                if i & 2 == 0 { b.min.y } else { b.max.y },
                if i & 4 == 0 { b.min.z } else { b.max.z },
            );
            expected = expected.union_point(m.transform_point3(corner));
        }
        assert_abs_diff_eq!(t.min, expected.min, epsilon = 1e-12);
        assert_abs_diff_eq!(t.max, expected.max, epsilon = 1e-12);
    }
}
