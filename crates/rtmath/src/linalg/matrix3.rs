//! 3x3 matrices.
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Quat, Scalar, Vec3};

/// A column-major 3x3 matrix, typically a rotation and/or scale.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat3<T> {
    pub x_axis: Vec3<T>,
    pub y_axis: Vec3<T>,
    pub z_axis: Vec3<T>,
}

impl_matrix_common!(
    Mat3,
    Vec3,
    Vec3,
    ColumnMatrix3,
    3,
    3,
    (x_axis, x, 0),
    (y_axis, y, 1),
    (z_axis, z, 2)
);

impl<T: Scalar> Mat3<T> {
    pub fn identity() -> Self {
        Self::from_diagonal(Vec3::one())
    }

    pub fn from_diagonal(diagonal: Vec3<T>) -> Self {
        let z = T::zero();
        Self::from_cols(
            Vec3::new(diagonal.x, z, z),
            Vec3::new(z, diagonal.y, z),
            Vec3::new(z, z, diagonal.z),
        )
    }

    pub fn from_scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale)
    }

    /// Rotation of `angle` radians around the x axis.
    pub fn from_rotation_x(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (z, o) = (T::zero(), T::one());
        Self::from_cols(
            Vec3::new(o, z, z),
            Vec3::new(z, cos, sin),
            Vec3::new(z, -sin, cos),
        )
    }

    /// Rotation of `angle` radians around the y axis.
    pub fn from_rotation_y(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (z, o) = (T::zero(), T::one());
        Self::from_cols(
            Vec3::new(cos, z, -sin),
            Vec3::new(z, o, z),
            Vec3::new(sin, z, cos),
        )
    }

    /// Rotation of `angle` radians around the z axis.
    pub fn from_rotation_z(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (z, o) = (T::zero(), T::one());
        Self::from_cols(
            Vec3::new(cos, sin, z),
            Vec3::new(-sin, cos, z),
            Vec3::new(z, z, o),
        )
    }

    /// Rotation of `angle` radians around the unit vector `axis`.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let c = T::one() - cos;
        let Vec3 { x, y, z } = axis;
        Self::from_cols(
            Vec3::new(c * x * x + cos, c * x * y + sin * z, c * x * z - sin * y),
            Vec3::new(c * x * y - sin * z, c * y * y + cos, c * y * z + sin * x),
            Vec3::new(c * x * z + sin * y, c * y * z - sin * x, c * z * z + cos),
        )
    }

    /// Rotation matrix of a unit quaternion.
    pub fn from_quat(q: Quat<T>) -> Self {
        let two = T::lit(2.0);
        let (xx, yy, zz) = (q.x * q.x, q.y * q.y, q.z * q.z);
        let (xy, xz, yz) = (q.x * q.y, q.x * q.z, q.y * q.z);
        let (wx, wy, wz) = (q.w * q.x, q.w * q.y, q.w * q.z);
        let o = T::one();
        Self::from_cols(
            Vec3::new(o - two * (yy + zz), two * (xy + wz), two * (xz - wy)),
            Vec3::new(two * (xy - wz), o - two * (xx + zz), two * (yz + wx)),
            Vec3::new(two * (xz + wy), two * (yz - wx), o - two * (xx + yy)),
        )
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    pub fn determinant(&self) -> T {
        let [m00, m01, m02] = self.x_axis.to_array();
        let [m10, m11, m12] = self.y_axis.to_array();
        let [m20, m21, m22] = self.z_axis.to_array();
        (m00 * m11 - m01 * m10) * m22 + (m02 * m10 - m00 * m12) * m21 + (m01 * m12 - m02 * m11) * m20
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return None;
        }
        let s = det.recip();
        let [m00, m01, m02] = self.x_axis.to_array();
        let [m10, m11, m12] = self.y_axis.to_array();
        let [m20, m21, m22] = self.z_axis.to_array();
        Some(Self::from_cols(
            Vec3::new(
                (m11 * m22 - m21 * m12) * s,
                (m21 * m02 - m01 * m22) * s,
                (m01 * m12 - m11 * m02) * s,
            ),
            Vec3::new(
                (m20 * m12 - m10 * m22) * s,
                (m00 * m22 - m20 * m02) * s,
                (m10 * m02 - m00 * m12) * s,
            ),
            Vec3::new(
                (m10 * m21 - m20 * m11) * s,
                (m20 * m01 - m00 * m21) * s,
                (m00 * m11 - m10 * m01) * s,
            ),
        ))
    }

    #[inline]
    pub fn mul_vec3(&self, v: Vec3<T>) -> Vec3<T> {
        self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z
    }

    #[inline]
    pub fn mul_mat3(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.mul_vec3(rhs.x_axis),
            self.mul_vec3(rhs.y_axis),
            self.mul_vec3(rhs.z_axis),
        )
    }
}

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat3(&rhs)
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.mul_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn sample() -> Mat3<f64> {
        Mat3::from_cols_array(&[2.0, 0.5, -1.0, 1.0, 3.0, 0.25, -0.5, 1.5, 4.0])
    }

    #[test]
    fn inverse_matches_glam() {
        let m = sample();
        let ours = m.inverse().expect("invertible");
        let reference = glam::DMat3::from_cols_array(&m.to_cols_array()).inverse();
        assert_abs_diff_eq!(
            ours.to_cols_array().as_slice(),
            reference.to_cols_array().as_slice(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(ours * m, Mat3::identity(), epsilon = 1e-12);
        let reference_det = glam::DMat3::from_cols_array(&m.to_cols_array()).determinant();
        assert_abs_diff_eq!(m.determinant(), reference_det, epsilon = 1e-12);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Mat3::from_cols(
            Vec3::new(1.0_f32, 2.0, 3.0),
            Vec3::new(2.0, 4.0, 6.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn rotations_agree_with_axis_angle() {
        let angle = 0.7_f32;
        assert_abs_diff_eq!(
            Mat3::from_rotation_x(angle),
            Mat3::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), angle),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Mat3::from_rotation_y(angle),
            Mat3::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), angle),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Mat3::from_rotation_z(angle),
            Mat3::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), angle),
            epsilon = 1e-6
        );
    }

    #[test]
    fn quaternion_rotation_matches_axis_angle() {
        let axis = Vec3::new(1.0_f32, 2.0, -0.5).normalize();
        let q = Quat::from_axis_angle(axis, 1.1);
        assert_abs_diff_eq!(
            Mat3::from_quat(q),
            Mat3::from_axis_angle(axis, 1.1),
            epsilon = 1e-6
        );
    }

    #[test]
    fn transpose_is_an_involution() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(1), m.col(1));
    }

    #[test]
    fn multiplication_matches_glam() {
        let a = sample();
        let b = Mat3::from_rotation_y(0.3);
        let ga = glam::DMat3::from_cols_array(&a.to_cols_array());
        let gb = glam::DMat3::from_cols_array(&b.to_cols_array());
        assert_abs_diff_eq!(
            (a * b).to_cols_array().as_slice(),
            (ga * gb).to_cols_array().as_slice(),
            epsilon = 1e-12
        );
    }
}
