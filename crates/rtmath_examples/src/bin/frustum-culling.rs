use glam::Vec2 as GVec2;
use rtmath::prelude::*;
use rtmath_examples::{init_tracing, Canvas, RenderConfig};
use tracing::info;

const VISIBLE: [u8; 3] = [40, 160, 70];
const PARTIAL: [u8; 3] = [230, 170, 30];
const CULLED: [u8; 3] = [200, 200, 200];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let eye = Vec3::new(0.0_f32, 2.0, 20.0);
    let view = Mat4::look_at(eye, Vec3::new(10.0, 0.0, -20.0), Vec3::new(0.0, 1.0, 0.0));
    let proj = Mat4::perspective(50f32.to_radians(), 16.0 / 9.0, 0.5, 60.0);
    let culler = FrustumIntersection::new(&(proj * view));

    // Top-down view over x/z; world -z is drawn upwards
    let config = RenderConfig::new((900, 900), 50.0).with_background([255, 255, 255]);
    let mut canvas = Canvas::new(&config);

    // Scatter crates with a stratified grid so the layout is stable between runs
    let cell = 100.0 / 20.0;
    let mut counts = [0usize; 3];
    for p in StratifiedSampling::new(5, 20).with_centering(0.5).samples() {
        let center = Vec3::new(p.x * 50.0, 0.5, p.y * 50.0);
        let half = Vec3::new(cell * 0.2, 0.5, cell * 0.2);
        let aabb = Aabb::new(center - half, center + half);
        let (color, slot) = match culler.intersect_aabb(&aabb) {
            Intersection::Inside => (VISIBLE, 0),
            Intersection::Intersect => (PARTIAL, 1),
            Intersection::Outside(_) => (CULLED, 2),
        };
        counts[slot] += 1;
        canvas.fill_rect(
            GVec2::new(aabb.min.x, -aabb.min.z),
            GVec2::new(aabb.max.x, -aabb.max.z),
            color,
        );
    }
    canvas.fill_rect(
        GVec2::new(eye.x - 0.6, -eye.z - 0.6),
        GVec2::new(eye.x + 0.6, -eye.z + 0.6),
        [200, 30, 30],
    );

    info!(
        "frustum culling: {} inside, {} intersecting, {} culled",
        counts[0], counts[1], counts[2]
    );
    canvas.save("frustum-culling.png")?;
    Ok(())
}
