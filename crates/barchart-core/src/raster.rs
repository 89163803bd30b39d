// File: crates/barchart-core/src/raster.rs
// Summary: Skia CPU raster implementation of the drawing surface, with PNG export.

use anyhow::Result;
use skia_safe as skia;

use crate::color::Rgba;
use crate::error::{ChartError, ChartResult};
use crate::geometry::Rect;
use crate::surface::{DrawingSurface, SurfaceProvider, TextAlign, TextBaseline};
use crate::text::TextShaper;
use crate::types::FontSpec;

/// Bar outline width in pixels.
const BAR_STROKE_WIDTH: f32 = 1.0;

impl From<Rgba> for skia::Color {
    fn from(c: Rgba) -> Self {
        skia::Color::from_argb(c.a, c.r, c.g, c.b)
    }
}

/// Raster surface backed by Skia's CPU rasterizer.
pub struct SkiaSurface {
    surface: skia::Surface,
    background: Rgba,
    shaper: TextShaper,
}

impl SkiaSurface {
    /// Allocate a `width` x `height` surface (rounded up to whole pixels) cleared to `background`.
    pub fn new(width: f64, height: f64, background: Rgba) -> ChartResult<Self> {
        let (w, h) = (width.ceil() as i32, height.ceil() as i32);
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {w}x{h} raster surface")))?;
        let mut s = Self { surface, background, shaper: TextShaper::new() };
        s.clear();
        Ok(s)
    }

    /// Pixel size of the raster.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    /// Encode the current contents as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current contents as PNG at `path`, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote PNG");
        Ok(())
    }

    fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(skia::Color::from(color));
        paint
    }
}

impl DrawingSurface for SkiaSurface {
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba, width: f64) {
        let paint = Self::stroke_paint(color, width as f32);
        self.surface
            .canvas()
            .draw_line((x0 as f32, y0 as f32), (x1 as f32, y1 as f32), &paint);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Rgba, stroke: Rgba) {
        let r = Rect::from_xywh(x, y, w, h).normalized();
        let rect = skia::Rect::from_ltrb(r.left() as f32, r.top() as f32, r.right() as f32, r.bottom() as f32);

        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(skia::Color::from(fill));

        let canvas = self.surface.canvas();
        canvas.draw_rect(rect, &body);
        canvas.draw_rect(rect, &Self::stroke_paint(stroke, BAR_STROKE_WIDTH));
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        align: TextAlign,
        baseline: TextBaseline,
        font: &FontSpec,
        color: Rgba,
    ) {
        let canvas = self.surface.canvas();
        self.shaper
            .draw(canvas, text, x as f32, y as f32, align, baseline, font, skia::Color::from(color));
    }

    fn clear(&mut self) {
        let bg = skia::Color::from(self.background);
        self.surface.canvas().clear(bg);
    }
}

/// Mounts Skia raster surfaces; the container id only labels the mount in logs.
#[derive(Clone, Copy, Debug)]
pub struct SkiaProvider {
    pub background: Rgba,
}

impl Default for SkiaProvider {
    fn default() -> Self {
        Self { background: Rgba::rgb(255, 255, 255) }
    }
}

impl SurfaceProvider for SkiaProvider {
    type Surface = SkiaSurface;

    fn mount(&mut self, container: &str, width: f64, height: f64) -> ChartResult<SkiaSurface> {
        tracing::debug!(container, width, height, "mounting raster surface");
        SkiaSurface::new(width, height, self.background)
    }
}
