use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber. `RUST_LOG` overrides the default of `info`
/// everywhere and `debug` for `rtmath`. Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rtmath=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Image size, background and the square region of the plane that is drawn.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    /// Lower-left corner of the visible region.
    pub view_min: Vec2,
    /// Upper-right corner of the visible region.
    pub view_max: Vec2,
}

impl RenderConfig {
    /// Renders the square `[-half_extent, half_extent]^2`.
    pub fn new(image_size: (u32, u32), half_extent: f32) -> Self {
        Self {
            image_size,
            background: [245, 245, 245],
            view_min: Vec2::splat(-half_extent),
            view_max: Vec2::splat(half_extent),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_view(mut self, min: Vec2, max: Vec2) -> Self {
        self.view_min = min;
        self.view_max = max;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PointStyle {
    pub color: [u8; 3],
    pub radius: u32,
}

impl PointStyle {
    pub fn new(color: [u8; 3], radius: u32) -> Self {
        Self { color, radius }
    }
}

/// A batch of points drawn with one style.
#[derive(Debug, Clone)]
pub struct PointLayer {
    pub points: Vec<Vec2>,
    pub style: PointStyle,
}

impl PointLayer {
    /// Collects any stream of sample points, converting them to `glam` vectors.
    pub fn new<P: Into<Vec2>>(points: impl IntoIterator<Item = P>, style: PointStyle) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            style,
        }
    }
}

/// RGB raster with a world-to-pixel mapping.
pub struct Canvas {
    image: RgbImage,
    view_min: Vec2,
    view_size: Vec2,
}

impl Canvas {
    pub fn new(config: &RenderConfig) -> Self {
        let (w, h) = config.image_size;
        Self {
            image: RgbImage::from_pixel(w, h, Rgb(config.background)),
            view_min: config.view_min,
            view_size: config.view_max - config.view_min,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Maps a world position to pixel coordinates with `y` pointing up.
    pub fn to_pixel(&self, p: Vec2) -> Vec2 {
        let t = (p - self.view_min) / self.view_size;
        Vec2::new(
            t.x * self.width() as f32,
            (1.0 - t.y) * self.height() as f32,
        )
    }

    pub fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64 {
            self.image.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, style: PointStyle) {
        let c = self.to_pixel(center);
        let (cx, cy) = (c.x.round() as i64, c.y.round() as i64);
        let r = style.radius as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put(cx + dx, cy + dy, style.color);
                }
            }
        }
    }

    /// Outline of a circle given in world units.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3]) {
        let steps = 720;
        for i in 0..steps {
            let a = i as f32 / steps as f32 * std::f32::consts::TAU;
            let p = self.to_pixel(center + Vec2::from_angle(a) * radius);
            self.put(p.x.round() as i64, p.y.round() as i64, color);
        }
    }

    pub fn fill_rect(&mut self, min: Vec2, max: Vec2, color: [u8; 3]) {
        let a = self.to_pixel(min);
        let b = self.to_pixel(max);
        let (x0, x1) = (a.x.min(b.x) as i64, a.x.max(b.x) as i64);
        let (y0, y1) = (a.y.min(b.y) as i64, a.y.max(b.y) as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Convolves every channel with a row-major `rows x cols` kernel, clamping at the
    /// image border.
    pub fn convolve(&mut self, kernel: &[f32], rows: usize, cols: usize) {
        let (w, h) = (self.width() as i64, self.height() as i64);
        let (half_r, half_c) = ((rows / 2) as i64, (cols / 2) as i64);
        let src = self.image.clone();
        for y in 0..h {
            for x in 0..w {
                let mut acc = [0.0f32; 3];
                for (i, k) in kernel.iter().take(rows * cols).enumerate() {
                    let sy = (y + i as i64 / cols as i64 - half_r).clamp(0, h - 1);
                    let sx = (x + i as i64 % cols as i64 - half_c).clamp(0, w - 1);
                    let px = src.get_pixel(sx as u32, sy as u32);
                    for (a, &c) in acc.iter_mut().zip(px.0.iter()) {
                        *a += k * c as f32;
                    }
                }
                let out = acc.map(|v| v.round().clamp(0.0, 255.0) as u8);
                self.image.put_pixel(x as u32, y as u32, Rgb(out));
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Draws each layer in order onto a fresh canvas and writes it as PNG.
pub fn render_layers_to_png(
    layers: &[PointLayer],
    config: &RenderConfig,
    out: impl AsRef<Path>,
) -> anyhow::Result<Canvas> {
    let mut canvas = Canvas::new(config);
    for layer in layers {
        for &p in &layer.points {
            canvas.fill_circle(p, layer.style);
        }
    }
    canvas.save(out)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::info!("subscriber installed");
    }

    #[test]
    fn world_to_pixel_flips_y() {
        let canvas = Canvas::new(&RenderConfig::new((100, 100), 1.0));
        assert_eq!(canvas.to_pixel(Vec2::new(-1.0, 1.0)), Vec2::new(0.0, 0.0));
        assert_eq!(canvas.to_pixel(Vec2::new(1.0, -1.0)), Vec2::new(100.0, 100.0));
    }
}
