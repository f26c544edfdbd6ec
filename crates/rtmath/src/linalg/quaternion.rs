//! Rotation quaternions.
use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::{Mat3, Mat4, Scalar, Vec3, Vec4};

/// A quaternion `x*i + y*j + z*k + w`. Rotations are represented by unit quaternions.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quat<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Quat<T> {
    #[inline]
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_xyzw(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle` radians around the unit vector `axis`.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (s, c) = (angle * T::lit(0.5)).sin_cos();
        Self::from_xyzw(axis.x * s, axis.y * s, axis.z * s, c)
    }

    pub fn from_rotation_x(angle: T) -> Self {
        let (s, c) = (angle * T::lit(0.5)).sin_cos();
        Self::from_xyzw(s, T::zero(), T::zero(), c)
    }

    pub fn from_rotation_y(angle: T) -> Self {
        let (s, c) = (angle * T::lit(0.5)).sin_cos();
        Self::from_xyzw(T::zero(), s, T::zero(), c)
    }

    pub fn from_rotation_z(angle: T) -> Self {
        let (s, c) = (angle * T::lit(0.5)).sin_cos();
        Self::from_xyzw(T::zero(), T::zero(), s, c)
    }

    /// Extracts the rotation of an orthonormal matrix.
    pub fn from_mat3(m: &Mat3<T>) -> Self {
        let [m00, m01, m02] = m.x_axis.to_array();
        let [m10, m11, m12] = m.y_axis.to_array();
        let [m20, m21, m22] = m.z_axis.to_array();
        let half = T::lit(0.5);
        let tr = m00 + m11 + m22;
        if tr >= T::zero() {
            let t = (tr + T::one()).sqrt();
            let w = t * half;
            let t = half / t;
            Self::from_xyzw((m12 - m21) * t, (m20 - m02) * t, (m01 - m10) * t, w)
        } else if m00 >= m11 && m00 >= m22 {
            let t = (m00 - (m11 + m22) + T::one()).sqrt();
            let x = t * half;
            let t = half / t;
            Self::from_xyzw(x, (m10 + m01) * t, (m02 + m20) * t, (m12 - m21) * t)
        } else if m11 > m22 {
            let t = (m11 - (m22 + m00) + T::one()).sqrt();
            let y = t * half;
            let t = half / t;
            Self::from_xyzw((m10 + m01) * t, y, (m21 + m12) * t, (m20 - m02) * t)
        } else {
            let t = (m22 - (m00 + m11) + T::one()).sqrt();
            let z = t * half;
            let t = half / t;
            Self::from_xyzw((m02 + m20) * t, (m21 + m12) * t, z, (m01 - m10) * t)
        }
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn from_vec4(v: Vec4<T>) -> Self {
        Self::from_xyzw(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.to_vec4().dot(rhs.to_vec4())
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    pub fn normalize(self) -> Self {
        Self::from_vec4(self.to_vec4().normalize())
    }

    pub fn is_normalized(self) -> bool {
        self.to_vec4().is_normalized()
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, or `None` for the zero quaternion.
    pub fn inverse(self) -> Option<Self> {
        let n = self.length_squared();
        if n == T::zero() {
            return None;
        }
        let inv = n.recip();
        let c = self.conjugate();
        Some(Self::from_xyzw(c.x * inv, c.y * inv, c.z * inv, c.w * inv))
    }

    /// Hamilton product: the rotation `rhs` followed by `self`.
    pub fn mul_quat(self, rhs: Self) -> Self {
        let Self { x: x1, y: y1, z: z1, w: w1 } = self;
        let Self { x: x2, y: y2, z: z2, w: w2 } = rhs;
        Self::from_xyzw(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }

    /// Rotates `v` by this unit quaternion.
    pub fn mul_vec3(self, v: Vec3<T>) -> Vec3<T> {
        let u = Vec3::new(self.x, self.y, self.z);
        let two = T::lit(2.0);
        let t = u.cross(v) * two;
        v + t * self.w + u.cross(t)
    }

    pub fn to_mat3(self) -> Mat3<T> {
        Mat3::from_quat(self)
    }

    pub fn to_mat4(self) -> Mat4<T> {
        Mat4::from_quat(self)
    }

    /// Spherical interpolation along the shorter arc. Falls back to a linear blend
    /// when the inputs are nearly parallel.
    pub fn slerp(self, target: Self, alpha: T) -> Self {
        let cosom = self.dot(target);
        let absom = cosom.abs();
        let (scale0, mut scale1) = if T::one() - absom > T::lit(1e-6) {
            let sin_sqr = T::one() - absom * absom;
            let sinom = sin_sqr.sqrt().recip();
            let omega = (sin_sqr * sinom).atan2(absom);
            (
                ((T::one() - alpha) * omega).sin() * sinom,
                (alpha * omega).sin() * sinom,
            )
        } else {
            (T::one() - alpha, alpha)
        };
        if cosom < T::zero() {
            scale1 = -scale1;
        }
        Self::from_vec4(self.to_vec4() * scale0 + target.to_vec4() * scale1)
    }

    /// Normalized linear interpolation along the shorter arc.
    pub fn nlerp(self, target: Self, alpha: T) -> Self {
        let scale0 = T::one() - alpha;
        let scale1 = if self.dot(target) >= T::zero() {
            alpha
        } else {
            -alpha
        };
        Self::from_vec4(self.to_vec4() * scale0 + target.to_vec4() * scale1).normalize()
    }
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_quat(rhs)
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.mul_vec3(rhs)
    }
}

impl<T: Scalar> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> AbsDiffEq for Quat<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        <T as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.to_vec4().abs_diff_eq(&other.to_vec4(), epsilon)
    }
}

impl<T: Scalar> RelativeEq for Quat<T> {
    fn default_max_relative() -> T {
        <T as RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.to_vec4()
            .relative_eq(&other.to_vec4(), epsilon, max_relative)
    }
}

impl<T> From<mint::Quaternion<T>> for Quat<T> {
    fn from(q: mint::Quaternion<T>) -> Self {
        Self {
            x: q.v.x,
            y: q.v.y,
            z: q.v.z,
            w: q.s,
        }
    }
}

impl<T> From<Quat<T>> for mint::Quaternion<T> {
    fn from(q: Quat<T>) -> Self {
        Self {
            v: mint::Vector3 {
                x: q.x,
                y: q.y,
                z: q.z,
            },
            s: q.w,
        }
    }
}
