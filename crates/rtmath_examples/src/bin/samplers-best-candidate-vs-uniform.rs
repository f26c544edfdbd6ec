use rtmath::prelude::*;
use rtmath_examples::{init_tracing, render_layers_to_png, PointLayer, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let count = 1500;
    let config = RenderConfig::new((800, 800), 1.05);
    let style = PointStyle::new([40, 40, 40], 2);

    // Blue noise: each sample is the best of 60 candidates
    let best = BestCandidateSampling::new(7, count).with_num_candidates(60);
    best.validate()?;
    render_layers_to_png(
        &[PointLayer::new(best.disk(), style)],
        &config,
        "samplers-best-candidate-disk.png",
    )?;
    render_layers_to_png(
        &[PointLayer::new(best.quad(), style)],
        &config,
        "samplers-best-candidate-quad.png",
    )?;

    // White noise with the same count for comparison
    let uniform = UniformDiskSampling::new(7, count);
    render_layers_to_png(
        &[PointLayer::new(uniform.samples(), style)],
        &config,
        "samplers-uniform-disk.png",
    )?;

    // Upper hemisphere seen from above, as used for ambient-occlusion kernels
    let hemisphere = BestCandidateSampling::new(7, 256).with_hemisphere(true);
    let projected = hemisphere.sphere().map(|p| Vec2::new(p.x, p.y));
    render_layers_to_png(
        &[PointLayer::new(projected, PointStyle::new([20, 120, 60], 4))],
        &config,
        "samplers-best-candidate-hemisphere.png",
    )?;
    Ok(())
}
