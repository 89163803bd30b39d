// File: crates/barchart-core/src/surface.rs
// Summary: Drawing surface contract consumed by the render pipeline, plus a recording implementation.

use crate::color::Rgba;
use crate::error::{ChartError, ChartResult};
use crate::types::FontSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the top of the text box.
    Top,
    /// `y` is the alphabetic baseline.
    Alphabetic,
}

/// Primitive 2-D drawing operations. Coordinates are surface pixels, y down.
pub trait DrawingSurface {
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba, width: f64);

    /// Fill then outline a rectangle. `h` may be negative (extends upward from `y`).
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Rgba, stroke: Rgba);

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        align: TextAlign,
        baseline: TextBaseline,
        font: &FontSpec,
        color: Rgba,
    );

    /// Erase everything drawn so far.
    fn clear(&mut self);
}

/// Canvas provider: allocates a surface for a container.
pub trait SurfaceProvider {
    type Surface: DrawingSurface;

    /// Mounting a container again replaces its previous surface.
    fn mount(&mut self, container: &str, width: f64, height: f64) -> ChartResult<Self::Surface>;
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Line { x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba, width: f64 },
    Rect { x: f64, y: f64, w: f64, h: f64, fill: Rgba, stroke: Rgba },
    Text {
        text: String,
        x: f64,
        y: f64,
        align: TextAlign,
        baseline: TextBaseline,
        font: FontSpec,
        color: Rgba,
    },
}

/// Surface that records draw calls instead of rasterizing.
///
/// `clear()` drops the recorded calls and leaves a single [`DrawCall::Clear`] marker,
/// so the log always reflects what is visible.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    pub fn size(&self) -> (f64, f64) { (self.width, self.height) }

    pub fn calls(&self) -> &[DrawCall] { &self.calls }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Text { .. }))
    }
}

impl DrawingSurface for RecordingSurface {
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba, width: f64) {
        self.calls.push(DrawCall::Line { x0, y0, x1, y1, color, width });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Rgba, stroke: Rgba) {
        self.calls.push(DrawCall::Rect { x, y, w, h, fill, stroke });
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
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            align,
            baseline,
            font: font.clone(),
            color,
        });
    }

    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }
}

/// Provider handing out recording surfaces; remembers which containers were mounted.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    mounted: Vec<String>,
}

impl RecordingProvider {
    pub fn new() -> Self { Self::default() }

    /// Container ids in mount order, one entry per mount.
    pub fn mounted(&self) -> &[String] { &self.mounted }
}

impl SurfaceProvider for RecordingProvider {
    type Surface = RecordingSurface;

    fn mount(&mut self, container: &str, width: f64, height: f64) -> ChartResult<RecordingSurface> {
        if container.trim().is_empty() {
            return Err(ChartError::Surface("container id must not be empty".to_string()));
        }
        tracing::debug!(container, width, height, "mounting recording surface");
        self.mounted.push(container.to_string());
        Ok(RecordingSurface::new(width, height))
    }
}
