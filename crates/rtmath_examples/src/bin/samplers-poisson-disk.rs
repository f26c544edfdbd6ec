use glam::Vec2;
use rtmath::prelude::*;
use rtmath_examples::{init_tracing, render_layers_to_png, PointLayer, PointStyle, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    // Unit disk, samples at least 0.04 apart
    let sampling = PoissonDiskSampling::new(42, 1.0, 0.04).with_k(30);
    sampling.validate()?;

    let layer = PointLayer::new(sampling.samples(), PointStyle::new([30, 90, 160], 3));
    info!("poisson disk: {} samples", layer.points.len());

    let config = RenderConfig::new((1000, 1000), 1.05);
    let out = "samplers-poisson-disk.png";
    let mut canvas = render_layers_to_png(&[layer], &config, out)?;
    canvas.stroke_circle(Vec2::ZERO, 1.0, [200, 40, 40]);
    canvas.save(out)?;
    Ok(())
}
