//! Conversions to and from `glam` for the concrete `f32` and `f64` types.
use crate::linalg::{Mat2, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

macro_rules! vector_conversions {
    ($ours:ident, $t:ty, $glam:ty, $($f:ident),+) => {
        impl From<$glam> for $ours<$t> {
            #[inline]
            fn from(v: $glam) -> Self {
                Self { $($f: v.$f),+ }
            }
        }

        impl From<$ours<$t>> for $glam {
            #[inline]
            fn from(v: $ours<$t>) -> Self {
                <$glam>::new($(v.$f),+)
            }
        }
    };
}

macro_rules! matrix_conversions {
    ($ours:ident, $t:ty, $glam:ty) => {
        impl From<$glam> for $ours<$t> {
            fn from(m: $glam) -> Self {
                Self::from_cols_array(&m.to_cols_array())
            }
        }

        impl From<$ours<$t>> for $glam {
            fn from(m: $ours<$t>) -> Self {
                <$glam>::from_cols_array(&m.to_cols_array())
            }
        }
    };
}

macro_rules! quat_conversions {
    ($t:ty, $glam:ty) => {
        impl From<$glam> for Quat<$t> {
            fn from(q: $glam) -> Self {
                Self::from_xyzw(q.x, q.y, q.z, q.w)
            }
        }

        impl From<Quat<$t>> for $glam {
            fn from(q: Quat<$t>) -> Self {
                <$glam>::from_xyzw(q.x, q.y, q.z, q.w)
            }
        }
    };
}

vector_conversions!(Vec2, f32, glam::Vec2, x, y);
vector_conversions!(Vec3, f32, glam::Vec3, x, y, z);
vector_conversions!(Vec4, f32, glam::Vec4, x, y, z, w);
vector_conversions!(Vec2, f64, glam::DVec2, x, y);
vector_conversions!(Vec3, f64, glam::DVec3, x, y, z);
vector_conversions!(Vec4, f64, glam::DVec4, x, y, z, w);
vector_conversions!(Vec2, i32, glam::IVec2, x, y);
vector_conversions!(Vec3, i32, glam::IVec3, x, y, z);

matrix_conversions!(Mat2, f32, glam::Mat2);
matrix_conversions!(Mat3, f32, glam::Mat3);
matrix_conversions!(Mat4, f32, glam::Mat4);
matrix_conversions!(Mat2, f64, glam::DMat2);
matrix_conversions!(Mat3, f64, glam::DMat3);
matrix_conversions!(Mat4, f64, glam::DMat4);

quat_conversions!(f32, glam::Quat);
quat_conversions!(f64, glam::DQuat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_keep_components() {
        let v: Vec3<f32> = glam::Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let g: glam::DVec2 = Vec2::new(4.0_f64, 5.0).into();
        assert_eq!(g, glam::DVec2::new(4.0, 5.0));
        let i: glam::IVec3 = Vec3::new(1, -2, 3).into();
        assert_eq!(i.y, -2);
    }

    #[test]
    fn matrices_keep_column_order() {
        let g = glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let m: Mat4<f32> = g.into();
        assert_eq!(m.w_axis, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(glam::Mat4::from(m), g);
    }

    #[test]
    fn quaternions_keep_scalar_last() {
        let g = glam::DQuat::from_rotation_y(0.5);
        let q: Quat<f64> = g.into();
        assert_eq!(q.w, g.w);
        assert_eq!(glam::DQuat::from(q), g);
    }
}
