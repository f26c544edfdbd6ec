//! Affine transforms stored as four columns of three rows.
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Mat3, Mat4, Quat, Scalar, Vec3, Vec4};

/// An affine transform: a 3x3 linear part (`x_axis`, `y_axis`, `z_axis`) plus a
/// translation column (`w_axis`). The implicit bottom row is `(0, 0, 0, 1)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat4x3<T> {
    pub x_axis: Vec3<T>,
    pub y_axis: Vec3<T>,
    pub z_axis: Vec3<T>,
    pub w_axis: Vec3<T>,
}

impl_matrix_common!(
    Mat4x3,
    Vec3,
    Vec4,
    ColumnMatrix3x4,
    4,
    3,
    (x_axis, x, 0),
    (y_axis, y, 1),
    (z_axis, z, 2),
    (w_axis, w, 3)
);

impl<T: Scalar> Mat4x3<T> {
    pub fn identity() -> Self {
        Self::from_mat3_translation(Mat3::identity(), Vec3::zero())
    }

    pub fn from_mat3_translation(linear: Mat3<T>, translation: Vec3<T>) -> Self {
        Self::from_cols(linear.x_axis, linear.y_axis, linear.z_axis, translation)
    }

    pub fn from_translation(translation: Vec3<T>) -> Self {
        Self::from_mat3_translation(Mat3::identity(), translation)
    }

    pub fn from_scale(scale: Vec3<T>) -> Self {
        Self::from_mat3_translation(Mat3::from_scale(scale), Vec3::zero())
    }

    pub fn from_quat(rotation: Quat<T>) -> Self {
        Self::from_mat3_translation(Mat3::from_quat(rotation), Vec3::zero())
    }

    pub fn from_rotation_translation(rotation: Quat<T>, translation: Vec3<T>) -> Self {
        Self::from_mat3_translation(Mat3::from_quat(rotation), translation)
    }

    /// Drops the bottom row of `m`. Only meaningful when that row is `(0, 0, 0, 1)`.
    pub fn from_mat4(m: &Mat4<T>) -> Self {
        Self::from_cols(
            m.x_axis.truncate(),
            m.y_axis.truncate(),
            m.z_axis.truncate(),
            m.w_axis.truncate(),
        )
    }

    pub fn to_mat4(&self) -> Mat4<T> {
        let z = T::zero();
        Mat4::from_cols(
            self.x_axis.extend(z),
            self.y_axis.extend(z),
            self.z_axis.extend(z),
            self.w_axis.extend(T::one()),
        )
    }

    /// The linear part.
    pub fn matrix3(&self) -> Mat3<T> {
        Mat3::from_cols(self.x_axis, self.y_axis, self.z_axis)
    }

    pub fn translation(&self) -> Vec3<T> {
        self.w_axis
    }

    /// Determinant of the linear part, which equals that of the full 4x4 matrix.
    pub fn determinant(&self) -> T {
        self.matrix3().determinant()
    }

    /// Returns the inverse transform, or `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        let linear = self.matrix3().inverse()?;
        let translation = -(linear.mul_vec3(self.w_axis));
        Some(Self::from_mat3_translation(linear, translation))
    }

    /// Composes two affine transforms: `self` applied after `rhs`.
    pub fn mul_affine(&self, rhs: &Self) -> Self {
        let linear = self.matrix3();
        Self::from_cols(
            linear.mul_vec3(rhs.x_axis),
            linear.mul_vec3(rhs.y_axis),
            linear.mul_vec3(rhs.z_axis),
            self.transform_point3(rhs.w_axis),
        )
    }

    #[inline]
    pub fn transform_point3(&self, p: Vec3<T>) -> Vec3<T> {
        self.x_axis * p.x + self.y_axis * p.y + self.z_axis * p.z + self.w_axis
    }

    #[inline]
    pub fn transform_vector3(&self, v: Vec3<T>) -> Vec3<T> {
        self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z
    }
}

impl<T: Scalar> Mul for Mat4x3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_affine(&rhs)
    }
}
