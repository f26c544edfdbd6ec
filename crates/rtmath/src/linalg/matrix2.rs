//! 2x2 matrices.
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Scalar, Vec2};

/// A column-major 2x2 matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat2<T> {
    pub x_axis: Vec2<T>,
    pub y_axis: Vec2<T>,
}

impl_matrix_common!(Mat2, Vec2, Vec2, ColumnMatrix2, 2, 2, (x_axis, x, 0), (y_axis, y, 1));

impl<T: Scalar> Mat2<T> {
    pub fn identity() -> Self {
        Self::from_diagonal(Vec2::one())
    }

    pub fn from_diagonal(diagonal: Vec2<T>) -> Self {
        Self::from_cols(
            Vec2::new(diagonal.x, T::zero()),
            Vec2::new(T::zero(), diagonal.y),
        )
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn from_angle(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(Vec2::new(cos, sin), Vec2::new(-sin, cos))
    }

    pub fn from_scale(scale: Vec2<T>) -> Self {
        Self::from_diagonal(scale)
    }

    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec2::new(self.x_axis.x, self.y_axis.x),
            Vec2::new(self.x_axis.y, self.y_axis.y),
        )
    }

    pub fn determinant(&self) -> T {
        self.x_axis.x * self.y_axis.y - self.x_axis.y * self.y_axis.x
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return None;
        }
        let s = det.recip();
        Some(Self::from_cols(
            Vec2::new(self.y_axis.y * s, -self.x_axis.y * s),
            Vec2::new(-self.y_axis.x * s, self.x_axis.x * s),
        ))
    }

    #[inline]
    pub fn mul_vec2(&self, v: Vec2<T>) -> Vec2<T> {
        self.x_axis * v.x + self.y_axis * v.y
    }

    #[inline]
    pub fn mul_mat2(&self, rhs: &Self) -> Self {
        Self::from_cols(self.mul_vec2(rhs.x_axis), self.mul_vec2(rhs.y_axis))
    }
}

impl<T: Scalar> Mul for Mat2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat2(&rhs)
    }
}

impl<T: Scalar> Mul<Vec2<T>> for Mat2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn mul(self, rhs: Vec2<T>) -> Vec2<T> {
        self.mul_vec2(rhs)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rotation_turns_x_into_y() {
        let r = Mat2::from_angle(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(r * Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Mat2::from_cols(Vec2::new(4.0_f64, 2.0), Vec2::new(7.0, 6.0));
        let inv = m.inverse().expect("invertible");
        assert_abs_diff_eq!(inv * m, Mat2::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.determinant(), 10.0);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Mat2::from_cols(Vec2::new(1.0_f32, 2.0), Vec2::new(2.0, 4.0));
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn storage_orders() {
        let m = Mat2::from_cols_array(&[1.0_f32, 2.0, 3.0, 4.0]);
        assert_eq!(m.col(1), Vec2::new(3.0, 4.0));
        assert_eq!(m.row(0), Vec2::new(1.0, 3.0));
        assert_eq!(m.to_rows_array(), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.transpose().transpose(), m);
    }
}
