use rtmath::prelude::*;

const SEED: i64 = 42;

fn min_distance(points: &[Vec2<f32>]) -> f32 {
    let mut min = f32::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            min = min.min(a.distance(*b));
        }
    }
    min
}

#[test]
fn every_sampler_is_reproducible_from_its_seed() {
    let poisson = PoissonDiskSampling::new(SEED, 1.0, 0.1);
    let best = BestCandidateSampling::new(SEED, 64);
    let stratified = StratifiedSampling::new(SEED, 8);
    let spiral = SpiralSampling::new(SEED, 1.0, 5.0, 64).with_jitter(0.3);
    let disk = UniformDiskSampling::new(SEED, 64);
    let sphere = UniformSphereSampling::new(SEED, 64);

    assert_eq!(poisson.samples().collect::<Vec<_>>(), poisson.samples().collect::<Vec<_>>());
    assert_eq!(best.disk().collect::<Vec<_>>(), best.disk().collect::<Vec<_>>());
    assert_eq!(best.sphere().collect::<Vec<_>>(), best.sphere().collect::<Vec<_>>());
    assert_eq!(stratified.samples().collect::<Vec<_>>(), stratified.samples().collect::<Vec<_>>());
    assert_eq!(spiral.samples().collect::<Vec<_>>(), spiral.samples().collect::<Vec<_>>());
    assert_eq!(disk.samples().collect::<Vec<_>>(), disk.samples().collect::<Vec<_>>());
    assert_eq!(sphere.samples().collect::<Vec<_>>(), sphere.samples().collect::<Vec<_>>());
}

#[test]
fn blue_noise_beats_white_noise_on_the_disk() {
    let poisson: Vec<_> = PoissonDiskSampling::new(SEED, 1.0, 0.15).samples().collect();
    let n = poisson.len();
    let best: Vec<_> = BestCandidateSampling::new(SEED, n).disk().collect();
    let white: Vec<_> = UniformDiskSampling::new(SEED, n).samples().collect();

    assert!(min_distance(&poisson) >= 0.15);
    assert!(min_distance(&best) > min_distance(&white));
    assert!(min_distance(&poisson) > min_distance(&white));
}

#[test]
fn callbacks_and_flat_buffers_see_the_same_points() {
    let sampling = StratifiedSampling::new(SEED, 5).with_centering(0.2);

    let mut via_closure = Vec::new();
    let count = sampling.generate(&mut |x: f32, y: f32| via_closure.push(Vec2::new(x, y)));
    assert_eq!(count, 25);

    let mut collected: Vec<Vec2<f32>> = Vec::new();
    sampling.generate(&mut collected);
    assert_eq!(collected, via_closure);

    let mut flat = vec![0.0; 50];
    assert_eq!(sampling.generate_into(&mut flat).expect("fits"), 25);
    let unpacked: Vec<_> = flat.chunks(2).map(|c| Vec2::new(c[0], c[1])).collect();
    assert_eq!(unpacked, via_closure);

    let err = sampling.generate_into(&mut [0.0; 10]).unwrap_err();
    assert!(matches!(err, Error::BufferTooSmall { required: 50, available: 10 }));
}

#[test]
fn sphere_samples_pack_as_triples() {
    let sampling = BestCandidateSampling::new(SEED, 32).with_hemisphere(true);
    let mut flat = vec![0.0; 32 * 3];
    assert_eq!(sampling.sphere().write_into(&mut flat).expect("fits"), 32);
    for p in flat.chunks(3) {
        let v = Vec3::new(p[0], p[1], p[2]);
        assert!((v.length() - 1.0).abs() < 1e-5);
        assert!(v.z >= 0.0);
    }

    let mut count = 0;
    UniformSphereSampling::new(SEED, 10).generate(&mut |_: f32, _: f32, _: f32| count += 1);
    assert_eq!(count, 10);
}

#[test]
fn misconfigured_samplers_produce_nothing() {
    assert_eq!(PoissonDiskSampling::new(SEED, 0.0, 0.1).samples().count(), 0);
    assert_eq!(SpiralSampling::new(SEED, 1.0, -2.0, 10).samples().count(), 0);
    assert_eq!(StratifiedSampling::new(SEED, 0).samples().count(), 0);
    assert!(StratifiedSampling::new(SEED, 4).with_centering(-0.1).validate().is_err());
}

#[test]
fn gaussian_kernel_blurs_without_changing_brightness() {
    let kernel = gaussian_kernel_vec(3, 3, 0.8).expect("valid kernel");
    let image = [[1.0f32; 5]; 5];
    let mut blurred = 0.0;
    for (i, w) in kernel.iter().enumerate() {
        blurred += w * image[1 + i / 3][1 + i % 3];
    }
    assert!((blurred - 1.0).abs() < 1e-5);
    assert!(matches!(gaussian_kernel_vec(2, 3, 1.0), Err(Error::InvalidArgument(_))));
}

#[test]
fn poisson_end_to_end_seed_42() {
    let sampling = PoissonDiskSampling::new(42, 1.0, 0.1).with_k(20);
    sampling.validate().expect("valid config");

    let mut points: Vec<Vec2<f32>> = Vec::new();
    let count = sampling.generate(&mut points);
    assert_eq!(count, points.len());
    assert!(count > 100, "only {count} samples");
    assert!(points.iter().all(|p| p.x * p.x + p.y * p.y <= 1.0));
    assert!(min_distance(&points) >= 0.1);

    let mut again: Vec<Vec2<f32>> = Vec::new();
    sampling.generate(&mut again);
    assert_eq!(points, again);
}
