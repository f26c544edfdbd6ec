use rtmath::prelude::*;
use rtmath_examples::{init_tracing, render_layers_to_png, PointLayer, PointStyle, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = RenderConfig::new((800, 800), 1.05);

    let jittered = StratifiedSampling::new(3, 24);
    let centred = StratifiedSampling::new(3, 24).with_centering(0.6);
    centred.validate()?;
    render_layers_to_png(
        &[
            PointLayer::new(jittered.samples(), PointStyle::new([190, 60, 40], 4)),
            PointLayer::new(centred.samples(), PointStyle::new([40, 60, 190], 2)),
        ],
        &config,
        "samplers-stratified.png",
    )?;

    let spiral = SpiralSampling::new(3, 1.0, 7.0, 400);
    let jittered_spiral = SpiralSampling::new(3, 1.0, 7.0, 400).with_jitter(0.4);
    jittered_spiral.validate()?;
    render_layers_to_png(
        &[
            PointLayer::new(spiral.samples(), PointStyle::new([120, 120, 120], 2)),
            PointLayer::new(jittered_spiral.samples(), PointStyle::new([20, 130, 90], 3)),
        ],
        &config,
        "samplers-spiral.png",
    )?;
    Ok(())
}
