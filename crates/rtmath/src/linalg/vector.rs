//! Two-, three- and four-component vectors.
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Num;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::linalg::Scalar;

macro_rules! define_vector {
    ($(#[$meta:meta])* $name:ident, $mint:ident, $n:literal, $(($field:ident, $idx:literal)),+) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<T> {
            $(pub $field: T),+
        }

        impl<T> $name<T> {
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Copy> $name<T> {
            /// Creates a vector with all components set to `v`.
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($field: v),+ }
            }

            /// Creates a vector from the first components of `s`.
            ///
            /// # Panics
            ///
            /// Panics if `s` is shorter than the vector.
            #[inline]
            pub fn from_slice(s: &[T]) -> Self {
                Self { $($field: s[$idx]),+ }
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }
        }

        impl<T: Num + Copy> $name<T> {
            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            #[inline]
            pub fn one() -> Self {
                Self::splat(T::one())
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                let mut acc = T::zero();
                $(acc = acc + self.$field * rhs.$field;)+
                acc
            }

            /// Component-wise product.
            #[inline]
            pub fn mul_elem(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }

            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }
        }

        impl<T: Num + Copy + PartialOrd> $name<T> {
            /// Component-wise minimum.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: if rhs.$field < self.$field { rhs.$field } else { self.$field }),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: if rhs.$field > self.$field { rhs.$field } else { self.$field }),+ }
            }
        }

        impl<T: Scalar> $name<T> {
            #[inline]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            #[inline]
            pub fn distance(self, rhs: Self) -> T {
                (self - rhs).length()
            }

            #[inline]
            pub fn distance_squared(self, rhs: Self) -> T {
                (self - rhs).length_squared()
            }

            /// Scales the vector to unit length.
            ///
            /// A zero vector produces non-finite components; use
            /// [`Self::try_normalize`] when the input may be degenerate.
            #[inline]
            pub fn normalize(self) -> Self {
                self * self.length().recip()
            }

            /// Scales the vector to unit length, or returns `None` if its length is
            /// zero or not finite.
            #[inline]
            pub fn try_normalize(self) -> Option<Self> {
                let recip = self.length().recip();
                if recip.is_finite() && recip > T::zero() {
                    Some(self * recip)
                } else {
                    None
                }
            }

            /// Returns `true` if the length is one within a small tolerance.
            #[inline]
            pub fn is_normalized(self) -> bool {
                (self.length_squared() - T::one()).abs() <= T::lit(2e-4)
            }

            /// Linear interpolation, `t == 0` yields `self`.
            #[inline]
            pub fn lerp(self, rhs: Self, t: T) -> Self {
                self + (rhs - self) * t
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                $(self.$field.is_finite())&&+
            }
        }

        impl<T: Num + Copy> Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Num + Copy> Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Num + Copy> Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Num + Copy> Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Num + Copy + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Num + Copy> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Num + Copy> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Num + Copy> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Num + Copy> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("vector index {index} out of bounds"),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("vector index {index} out of bounds"),
                }
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(a: [T; $n]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                [$(v.$field),+]
            }
        }

        impl<T> From<mint::$mint<T>> for $name<T> {
            #[inline]
            fn from(v: mint::$mint<T>) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl<T> From<$name<T>> for mint::$mint<T> {
            #[inline]
            fn from(v: $name<T>) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl<T: Scalar> AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                <T as AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T: Scalar> RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                <T as RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        impl_scalar_lhs_mul!($name, f32, f64, i32);
    };
}

macro_rules! impl_scalar_lhs_mul {
    ($name:ident, $($t:ty),+) => {
        $(
            impl Mul<$name<$t>> for $t {
                type Output = $name<$t>;

                #[inline]
                fn mul(self, rhs: $name<$t>) -> $name<$t> {
                    rhs * self
                }
            }
        )+
    };
}

define_vector!(
    /// A two-component vector.
    Vec2, Vector2, 2, (x, 0), (y, 1)
);
define_vector!(
    /// A three-component vector.
    Vec3, Vector3, 3, (x, 0), (y, 1), (z, 2)
);
define_vector!(
    /// A four-component vector.
    Vec4, Vector4, 4, (x, 0), (y, 1), (z, 2), (w, 3)
);

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec3i = Vec3<i32>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;
pub type Vec4i = Vec4<i32>;

impl<T: Num + Copy> Vec2<T> {
    /// Extends to a [`Vec3`] with the given `z`.
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }

    /// The z component of the 3D cross product of `self` and `rhs`.
    #[inline]
    pub fn perp_dot(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl<T: Num + Copy + Neg<Output = T>> Vec2<T> {
    /// Rotates the vector by 90 degrees counter-clockwise.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: Num + Copy> Vec3<T> {
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Extends to a [`Vec4`] with the given `w`.
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drops `z`.
    #[inline]
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
}

impl<T: Scalar> Vec3<T> {
    /// Angle between two vectors in radians.
    pub fn angle_between(self, rhs: Self) -> T {
        let denom = (self.length_squared() * rhs.length_squared()).sqrt();
        let cos = (self.dot(rhs) / denom).max(-T::one()).min(T::one());
        cos.acos()
    }
}

impl<T: Num + Copy> Vec4<T> {
    /// Drops `w`.
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}
