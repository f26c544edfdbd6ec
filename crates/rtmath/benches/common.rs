use std::time::Duration;

use criterion::{Criterion, Throughput};
use rtmath::linalg::{Mat4, Quat, Vec3};
use rtmath::sampling::Prng;

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

#[allow(dead_code)]
/// Random rigid transforms with a uniform scale, all invertible.
pub fn random_transforms(seed: i64, count: usize) -> Vec<Mat4<f32>> {
    let mut rng = Prng::new(seed);
    let mut unit = move || rng.next_float() * 2.0 - 1.0;
    (0..count)
        .map(|_| {
            let axis = Vec3::new(unit(), unit(), 1.0).normalize();
            let rotation = Quat::from_axis_angle(axis, unit() * 3.0);
            let scale = 1.5 + unit();
            let translation = Vec3::new(unit(), unit(), unit()) * 10.0;
            Mat4::from_scale_rotation_translation(Vec3::new(scale, scale, scale), rotation, translation)
        })
        .collect()
}
