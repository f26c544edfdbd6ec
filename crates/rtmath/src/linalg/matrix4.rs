//! 4x4 matrices: projections, views and general homogeneous transforms.
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Mat3, Quat, Scalar, Vec3, Vec4};

/// A column-major 4x4 matrix.
///
/// Projection constructors follow OpenGL conventions: right-handed view space and
/// clip-space depth in `[-1, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat4<T> {
    pub x_axis: Vec4<T>,
    pub y_axis: Vec4<T>,
    pub z_axis: Vec4<T>,
    pub w_axis: Vec4<T>,
}

impl_matrix_common!(
    Mat4,
    Vec4,
    Vec4,
    ColumnMatrix4,
    4,
    4,
    (x_axis, x, 0),
    (y_axis, y, 1),
    (z_axis, z, 2),
    (w_axis, w, 3)
);

impl<T: Scalar> Mat4<T> {
    pub fn identity() -> Self {
        Self::from_diagonal(Vec4::one())
    }

    pub fn from_diagonal(diagonal: Vec4<T>) -> Self {
        let z = T::zero();
        Self::from_cols(
            Vec4::new(diagonal.x, z, z, z),
            Vec4::new(z, diagonal.y, z, z),
            Vec4::new(z, z, diagonal.z, z),
            Vec4::new(z, z, z, diagonal.w),
        )
    }

    pub fn from_translation(translation: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m.w_axis = translation.extend(T::one());
        m
    }

    pub fn from_scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale.extend(T::one()))
    }

    /// Embeds a 3x3 linear transform.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let z = T::zero();
        Self::from_cols(
            m.x_axis.extend(z),
            m.y_axis.extend(z),
            m.z_axis.extend(z),
            Vec4::new(z, z, z, T::one()),
        )
    }

    pub fn from_quat(rotation: Quat<T>) -> Self {
        Self::from_mat3(Mat3::from_quat(rotation))
    }

    /// Rotation followed by translation.
    pub fn from_rotation_translation(rotation: Quat<T>, translation: Vec3<T>) -> Self {
        let mut m = Self::from_quat(rotation);
        m.w_axis = translation.extend(T::one());
        m
    }

    /// Scale, then rotation, then translation.
    pub fn from_scale_rotation_translation(
        scale: Vec3<T>,
        rotation: Quat<T>,
        translation: Vec3<T>,
    ) -> Self {
        let r = Mat3::from_quat(rotation);
        Self::from_cols(
            (r.x_axis * scale.x).extend(T::zero()),
            (r.y_axis * scale.y).extend(T::zero()),
            (r.z_axis * scale.z).extend(T::zero()),
            translation.extend(T::one()),
        )
    }

    /// Symmetric perspective projection with vertical field of view `fov_y` radians.
    pub fn perspective(fov_y: T, aspect: T, z_near: T, z_far: T) -> Self {
        let z = T::zero();
        let two = T::lit(2.0);
        let h = (fov_y * T::lit(0.5)).tan();
        let nf = (z_near - z_far).recip();
        Self::from_cols(
            Vec4::new((h * aspect).recip(), z, z, z),
            Vec4::new(z, h.recip(), z, z),
            Vec4::new(z, z, (z_far + z_near) * nf, -T::one()),
            Vec4::new(z, z, two * z_far * z_near * nf, z),
        )
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x [-near, -far]`.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Self {
        let z = T::zero();
        let two = T::lit(2.0);
        Self::from_cols(
            Vec4::new(two / (right - left), z, z, z),
            Vec4::new(z, two / (top - bottom), z, z),
            Vec4::new(z, z, two / (z_near - z_far), z),
            Vec4::new(
                (right + left) / (left - right),
                (top + bottom) / (bottom - top),
                (z_far + z_near) / (z_near - z_far),
                T::one(),
            ),
        )
    }

    /// View transform of a camera at `eye` looking at `center`.
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let dir = (eye - center).normalize();
        let left = up.cross(dir).normalize();
        let upn = dir.cross(left);
        let z = T::zero();
        Self::from_cols(
            Vec4::new(left.x, upn.x, dir.x, z),
            Vec4::new(left.y, upn.y, dir.y, z),
            Vec4::new(left.z, upn.z, dir.z, z),
            Vec4::new(-left.dot(eye), -upn.dot(eye), -dir.dot(eye), T::one()),
        )
    }

    /// The upper-left 3x3 block.
    pub fn to_mat3(&self) -> Mat3<T> {
        Mat3::from_cols(
            self.x_axis.truncate(),
            self.y_axis.truncate(),
            self.z_axis.truncate(),
        )
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    pub fn determinant(&self) -> T {
        let [m00, m01, m02, m03] = self.x_axis.to_array();
        let [m10, m11, m12, m13] = self.y_axis.to_array();
        let [m20, m21, m22, m23] = self.z_axis.to_array();
        let [m30, m31, m32, m33] = self.w_axis.to_array();
        (m00 * m11 - m01 * m10) * (m22 * m33 - m23 * m32)
            + (m02 * m10 - m00 * m12) * (m21 * m33 - m23 * m31)
            + (m00 * m13 - m03 * m10) * (m21 * m32 - m22 * m31)
            + (m01 * m12 - m02 * m11) * (m20 * m33 - m23 * m30)
            + (m03 * m11 - m01 * m13) * (m20 * m32 - m22 * m30)
            + (m02 * m13 - m03 * m12) * (m20 * m31 - m21 * m30)
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let [m00, m01, m02, m03] = self.x_axis.to_array();
        let [m10, m11, m12, m13] = self.y_axis.to_array();
        let [m20, m21, m22, m23] = self.z_axis.to_array();
        let [m30, m31, m32, m33] = self.w_axis.to_array();
        let a = m00 * m11 - m01 * m10;
        let b = m00 * m12 - m02 * m10;
        let c = m00 * m13 - m03 * m10;
        let d = m01 * m12 - m02 * m11;
        let e = m01 * m13 - m03 * m11;
        let f = m02 * m13 - m03 * m12;
        let g = m20 * m31 - m21 * m30;
        let h = m20 * m32 - m22 * m30;
        let i = m20 * m33 - m23 * m30;
        let j = m21 * m32 - m22 * m31;
        let k = m21 * m33 - m23 * m31;
        let l = m22 * m33 - m23 * m32;
        let det = a * l - b * k + c * j + d * i - e * h + f * g;
        if det == T::zero() {
            return None;
        }
        let s = det.recip();
        Some(Self::from_cols(
            Vec4::new(
                (m11 * l - m12 * k + m13 * j) * s,
                (-m01 * l + m02 * k - m03 * j) * s,
                (m31 * f - m32 * e + m33 * d) * s,
                (-m21 * f + m22 * e - m23 * d) * s,
            ),
            Vec4::new(
                (-m10 * l + m12 * i - m13 * h) * s,
                (m00 * l - m02 * i + m03 * h) * s,
                (-m30 * f + m32 * c - m33 * b) * s,
                (m20 * f - m22 * c + m23 * b) * s,
            ),
            Vec4::new(
                (m10 * k - m11 * i + m13 * g) * s,
                (-m00 * k + m01 * i - m03 * g) * s,
                (m30 * e - m31 * c + m33 * a) * s,
                (-m20 * e + m21 * c - m23 * a) * s,
            ),
            Vec4::new(
                (-m10 * j + m11 * h - m12 * g) * s,
                (m00 * j - m01 * h + m02 * g) * s,
                (-m30 * d + m31 * b - m32 * a) * s,
                (m20 * d - m21 * b + m22 * a) * s,
            ),
        ))
    }

    #[inline]
    pub fn mul_vec4(&self, v: Vec4<T>) -> Vec4<T> {
        self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z + self.w_axis * v.w
    }

    #[inline]
    pub fn mul_mat4(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.mul_vec4(rhs.x_axis),
            self.mul_vec4(rhs.y_axis),
            self.mul_vec4(rhs.z_axis),
            self.mul_vec4(rhs.w_axis),
        )
    }

    /// Transforms a point (`w = 1`) and applies the perspective divide.
    pub fn project_point3(&self, p: Vec3<T>) -> Vec3<T> {
        let r = self.mul_vec4(p.extend(T::one()));
        r.truncate() * r.w.recip()
    }

    /// Transforms a point (`w = 1`) ignoring the bottom row.
    #[inline]
    pub fn transform_point3(&self, p: Vec3<T>) -> Vec3<T> {
        (self.x_axis * p.x + self.y_axis * p.y + self.z_axis * p.z + self.w_axis).truncate()
    }

    /// Transforms a direction (`w = 0`).
    #[inline]
    pub fn transform_vector3(&self, v: Vec3<T>) -> Vec3<T> {
        (self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z).truncate()
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat4(&rhs)
    }
}

impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    #[inline]
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.mul_vec4(rhs)
    }
}
