//! Column-major linear algebra for real-time graphics.
//!
//! All types are generic over their scalar. Vectors accept any numeric type (`i32`
//! included); matrices, quaternions and the geometric helpers require a [`Scalar`]
//! (`f32` or `f64`).
//!
//! Matrices store columns (`x_axis`, `y_axis`, ...). Flat arrays produced by
//! `to_cols_array` are column-major, `to_rows_array` is row-major.
use std::fmt::Debug;

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;

/// Implements storage conversions, element access, tolerance comparisons and the
/// component-wise operators shared by every matrix type.
///
/// Each column is given as `(field, mint_field, index)`.
macro_rules! impl_matrix_common {
    ($mat:ident, $col:ident, $row:ident, $mint:ident, $cols:literal, $rows:literal,
     $(($axis:ident, $mf:ident, $idx:literal)),+) => {
        impl<T: Scalar> $mat<T> {
            /// Number of columns.
            pub const COLS: usize = $cols;
            /// Number of rows.
            pub const ROWS: usize = $rows;

            /// Creates a matrix from its columns.
            #[inline]
            pub fn from_cols($($axis: $col<T>),+) -> Self {
                Self { $($axis),+ }
            }

            /// Creates a matrix with every element set to zero.
            #[inline]
            pub fn zero() -> Self {
                Self { $($axis: $col::zero()),+ }
            }

            /// Creates a matrix from a column-major array.
            pub fn from_cols_array(m: &[T; $cols * $rows]) -> Self {
                Self {
                    $($axis: $col::from_slice(&m[$idx * $rows..($idx + 1) * $rows])),+
                }
            }

            /// Creates a matrix from a column-major slice holding at least `COLS * ROWS` values.
            pub fn from_cols_slice(m: &[T]) -> crate::error::Result<Self> {
                crate::error::ensure_capacity($cols * $rows, m.len())?;
                Ok(Self {
                    $($axis: $col::from_slice(&m[$idx * $rows..($idx + 1) * $rows])),+
                })
            }

            /// Returns the elements in column-major order.
            pub fn to_cols_array(&self) -> [T; $cols * $rows] {
                let mut out = [T::zero(); $cols * $rows];
                $(out[$idx * $rows..($idx + 1) * $rows].copy_from_slice(&self.$axis.to_array());)+
                out
            }

            /// Returns the elements in row-major order.
            pub fn to_rows_array(&self) -> [T; $cols * $rows] {
                let cols = self.to_cols_array();
                let mut out = [T::zero(); $cols * $rows];
                for r in 0..$rows {
                    for c in 0..$cols {
                        out[r * $cols + c] = cols[c * $rows + r];
                    }
                }
                out
            }

            /// Writes the elements into `dest` in column-major order.
            pub fn write_cols_to_slice(&self, dest: &mut [T]) -> crate::error::Result<()> {
                crate::error::ensure_capacity($cols * $rows, dest.len())?;
                dest[..$cols * $rows].copy_from_slice(&self.to_cols_array());
                Ok(())
            }

            /// Writes the elements into `dest` in row-major order.
            pub fn write_rows_to_slice(&self, dest: &mut [T]) -> crate::error::Result<()> {
                crate::error::ensure_capacity($cols * $rows, dest.len())?;
                dest[..$cols * $rows].copy_from_slice(&self.to_rows_array());
                Ok(())
            }

            /// Returns column `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= COLS`.
            #[inline]
            pub fn col(&self, index: usize) -> $col<T> {
                match index {
                    $($idx => self.$axis,)+
                    _ => panic!("column index {index} out of bounds"),
                }
            }

            /// Returns row `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= ROWS`.
            #[inline]
            pub fn row(&self, index: usize) -> $row<T> {
                $row::new($(self.$axis[index]),+)
            }

            /// Returns the element at `col`, `row`.
            #[inline]
            pub fn element(&self, col: usize, row: usize) -> T {
                self.col(col)[row]
            }

            /// Returns `true` if all elements are finite.
            pub fn is_finite(&self) -> bool {
                $(self.$axis.is_finite())&&+
            }
        }

        impl<T: Scalar> Default for $mat<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: Scalar> std::ops::Add for $mat<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis + rhs.$axis),+ }
            }
        }

        impl<T: Scalar> std::ops::Sub for $mat<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis - rhs.$axis),+ }
            }
        }

        impl<T: Scalar> std::ops::Neg for $mat<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($axis: -self.$axis),+ }
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $mat<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($axis: self.$axis * rhs),+ }
            }
        }

        impl<T: Scalar> approx::AbsDiffEq for $mat<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                <T as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$axis, &other.$axis, epsilon))&&+
            }
        }

        impl<T: Scalar> approx::RelativeEq for $mat<T> {
            fn default_max_relative() -> T {
                <T as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$axis, &other.$axis, epsilon, max_relative))&&+
            }
        }

        impl<T> From<mint::$mint<T>> for $mat<T> {
            fn from(m: mint::$mint<T>) -> Self {
                Self { $($axis: m.$mf.into()),+ }
            }
        }

        impl<T> From<$mat<T>> for mint::$mint<T> {
            fn from(m: $mat<T>) -> Self {
                Self { $($mf: m.$axis.into()),+ }
            }
        }
    };
}

pub mod aabb;
pub mod axis_angle;
pub mod frustum;
mod interop;
pub mod matrix2;
pub mod matrix3;
pub mod matrix4;
pub mod matrix4x3;
pub mod quaternion;
pub mod vector;

pub use aabb::Aabb;
pub use axis_angle::AxisAngle;
pub use frustum::{FrustumIntersection, Intersection, Plane, PlaneMask};
pub use matrix2::Mat2;
pub use matrix3::Mat3;
pub use matrix4::Mat4;
pub use matrix4x3::Mat4x3;
pub use quaternion::Quat;
pub use vector::{Vec2, Vec3, Vec4};

/// Floating-point scalar usable by matrices, quaternions and geometric tests.
pub trait Scalar:
    Float
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Converts a literal constant into this scalar type.
    fn lit(v: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn lit(v: f64) -> Self {
        v
    }
}

pub type Mat2f = Mat2<f32>;
pub type Mat2d = Mat2<f64>;
pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;
pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;
pub type Mat4x3f = Mat4x3<f32>;
pub type Mat4x3d = Mat4x3<f64>;
pub type Quatf = Quat<f32>;
pub type Quatd = Quat<f64>;
