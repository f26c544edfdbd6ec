//! Sinks receiving samples as they are generated.
use crate::linalg::{Vec2, Vec3};

/// Receives 2D samples in generation order.
pub trait Callback2d {
    fn on_new_sample(&mut self, x: f32, y: f32);
}

/// Receives 3D samples in generation order.
pub trait Callback3d {
    fn on_new_sample(&mut self, x: f32, y: f32, z: f32);
}

impl<F> Callback2d for F
where
    F: FnMut(f32, f32),
{
    #[inline]
    fn on_new_sample(&mut self, x: f32, y: f32) {
        self(x, y)
    }
}

impl<F> Callback3d for F
where
    F: FnMut(f32, f32, f32),
{
    #[inline]
    fn on_new_sample(&mut self, x: f32, y: f32, z: f32) {
        self(x, y, z)
    }
}

impl Callback2d for Vec<Vec2<f32>> {
    #[inline]
    fn on_new_sample(&mut self, x: f32, y: f32) {
        self.push(Vec2::new(x, y));
    }
}

impl Callback3d for Vec<Vec3<f32>> {
    #[inline]
    fn on_new_sample(&mut self, x: f32, y: f32, z: f32) {
        self.push(Vec3::new(x, y, z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed2(sink: &mut dyn Callback2d) {
        sink.on_new_sample(1.0, 2.0);
        sink.on_new_sample(3.0, 4.0);
    }

    #[test]
    fn vec_collects_in_order() {
        let mut points: Vec<Vec2<f32>> = Vec::new();
        feed2(&mut points);
        assert_eq!(points, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);

        let mut points3: Vec<Vec3<f32>> = Vec::new();
        Callback3d::on_new_sample(&mut points3, 1.0, 2.0, 3.0);
        assert_eq!(points3, vec![Vec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn closures_are_callbacks() {
        let mut sum = 0.0;
        feed2(&mut |x: f32, y: f32| sum += x * y);
        assert_eq!(sum, 14.0);

        let mut count = 0;
        let mut cb = |_x: f32, _y: f32, _z: f32| count += 1;
        Callback3d::on_new_sample(&mut cb, 0.0, 0.0, 0.0);
        assert_eq!(count, 1);
    }
}
