use rtmath::prelude::*;
use rtmath_examples::{init_tracing, render_layers_to_png, PointLayer, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = RenderConfig::new((512, 512), 1.05).with_background([0, 0, 0]);
    let points = PoissonDiskSampling::new(11, 1.0, 0.12).samples();
    let mut canvas = render_layers_to_png(
        &[PointLayer::new(points, PointStyle::new([255, 220, 120], 3))],
        &config,
        "kernels-gaussian-sharp.png",
    )?;

    let (rows, cols, sigma) = (9, 9, 2.5);
    let kernel = gaussian_kernel_vec(rows, cols, sigma)?;
    canvas.convolve(&kernel, rows, cols);
    canvas.save("kernels-gaussian-blurred.png")?;
    Ok(())
}
