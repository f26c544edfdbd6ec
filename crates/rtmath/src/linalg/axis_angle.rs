//! Axis-angle rotations.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Mat3, Quat, Scalar, Vec3};

/// A rotation of `angle` radians around `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisAngle<T> {
    pub axis: Vec3<T>,
    pub angle: T,
}

impl<T: Scalar> AxisAngle<T> {
    pub fn new(axis: Vec3<T>, angle: T) -> Self {
        Self { axis, angle }
    }

    /// Returns the same rotation with a unit-length axis.
    ///
    /// A zero axis is replaced by `+z`.
    pub fn normalize(self) -> Self {
        let axis = self
            .axis
            .try_normalize()
            .unwrap_or_else(|| Vec3::new(T::zero(), T::zero(), T::one()));
        Self::new(axis, self.angle)
    }

    /// Reduces the angle to `[0, 2*pi)`.
    pub fn wrap_angle(self) -> Self {
        let two_pi = T::lit(std::f64::consts::TAU);
        let mut angle = self.angle % two_pi;
        if angle < T::zero() {
            angle = angle + two_pi;
        }
        Self::new(self.axis, angle)
    }

    pub fn to_quat(self) -> Quat<T> {
        Quat::from_axis_angle(self.axis, self.angle)
    }

    pub fn to_mat3(self) -> Mat3<T> {
        Mat3::from_axis_angle(self.axis, self.angle)
    }

    pub fn transform(self, v: Vec3<T>) -> Vec3<T> {
        self.to_quat().mul_vec3(v)
    }
}

impl<T: Scalar> Default for AxisAngle<T> {
    fn default() -> Self {
        Self::new(Vec3::new(T::zero(), T::zero(), T::one()), T::zero())
    }
}

impl<T: Scalar> From<Quat<T>> for AxisAngle<T> {
    /// Converts a unit quaternion. The identity maps to a zero angle around `+z`.
    fn from(q: Quat<T>) -> Self {
        let w = q.w.max(-T::one()).min(T::one());
        let angle = T::lit(2.0) * w.acos();
        let s = (T::one() - w * w).sqrt();
        let axis = if s > T::lit(1e-12) {
            Vec3::new(q.x, q.y, q.z) * s.recip()
        } else {
            Vec3::new(T::zero(), T::zero(), T::one())
        };
        Self::new(axis, angle)
    }
}

impl<T: Scalar> From<AxisAngle<T>> for Quat<T> {
    fn from(aa: AxisAngle<T>) -> Self {
        aa.to_quat()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn quaternion_round_trip() {
        let aa = AxisAngle::new(Vec3::new(0.0_f64, 0.6, 0.8), 1.3);
        let back = AxisAngle::from(aa.to_quat());
        assert_abs_diff_eq!(back.axis, aa.axis, epsilon = 1e-12);
        assert_abs_diff_eq!(back.angle, aa.angle, epsilon = 1e-12);
    }

    #[test]
    fn identity_quaternion_gives_zero_angle() {
        let aa = AxisAngle::from(Quat::<f32>::identity());
        assert_eq!(aa.angle, 0.0);
        assert_eq!(aa.axis, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn transform_matches_matrix() {
        let aa = AxisAngle::new(Vec3::new(1.0_f64, 1.0, 1.0), 2.0).normalize();
        let v = Vec3::new(3.0, -1.0, 0.5);
        assert_abs_diff_eq!(aa.transform(v), aa.to_mat3() * v, epsilon = 1e-12);
    }

    #[test]
    fn wrap_angle_into_full_turn() {
        let aa = AxisAngle::new(Vec3::new(0.0_f64, 0.0, 1.0), -0.5).wrap_angle();
        assert_abs_diff_eq!(aa.angle, std::f64::consts::TAU - 0.5, epsilon = 1e-12);
        assert_eq!(
            AxisAngle::new(Vec3::<f32>::zero(), 1.0).normalize().axis,
            Vec3::new(0.0, 0.0, 1.0)
        );
    }
}
