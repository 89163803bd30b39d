// File: crates/barchart-core/src/render.rs
// Summary: Render pipeline; issues the draw calls for axes, labels, gridlines and bars in a fixed order.
// Notes:
// - Bars are drawn last so they cover the gridlines inside their footprint.
// - Every stage reads the immutable layout; none of them can fail.

use crate::color::{ColorProvider, BAR_FILL_OPACITY};
use crate::config::ChartConfig;
use crate::data::NormalizedData;
use crate::layout::LayoutDescriptor;
use crate::surface::{DrawingSurface, TextAlign, TextBaseline};

/// Draw stages in the order the pipeline runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    VerticalAxis,
    HorizontalAxis,
    ValueLabels,
    CategoryLabels,
    HorizontalGuidelines,
    VerticalGuidelines,
    Bars,
}

impl Stage {
    pub const ORDER: [Stage; 7] = [
        Stage::VerticalAxis,
        Stage::HorizontalAxis,
        Stage::ValueLabels,
        Stage::CategoryLabels,
        Stage::HorizontalGuidelines,
        Stage::VerticalGuidelines,
        Stage::Bars,
    ];
}

/// Everything a stage needs besides the surface and the colour source.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    pub config: &'a ChartConfig,
    pub data: &'a NormalizedData,
    pub layout: &'a LayoutDescriptor,
}

/// Run every stage once, in [`Stage::ORDER`]. Does not clear the surface.
pub fn render(frame: Frame<'_>, surface: &mut dyn DrawingSurface, colors: &mut dyn ColorProvider) {
    for stage in Stage::ORDER {
        let calls = draw_stage(stage, frame, surface, colors);
        tracing::trace!(?stage, calls, "stage drawn");
    }
}

/// Draw one stage and return how many draw calls it issued.
pub fn draw_stage(
    stage: Stage,
    frame: Frame<'_>,
    surface: &mut dyn DrawingSurface,
    colors: &mut dyn ColorProvider,
) -> usize {
    match stage {
        Stage::VerticalAxis => draw_vertical_axis(frame, surface),
        Stage::HorizontalAxis => draw_horizontal_axis(frame, surface),
        Stage::ValueLabels => draw_value_labels(frame, surface),
        Stage::CategoryLabels => draw_category_labels(frame, surface),
        Stage::HorizontalGuidelines => draw_horizontal_guidelines(frame, surface),
        Stage::VerticalGuidelines => draw_vertical_guidelines(frame, surface),
        Stage::Bars => draw_bars(frame, surface, colors),
    }
}

fn draw_vertical_axis(f: Frame<'_>, surface: &mut dyn DrawingSurface) -> usize {
    let l = f.layout;
    let x = l.margins.horizontal;
    surface.stroke_line(x, l.margins.vertical, x, l.baseline_y(), f.config.style.axis_color, f.config.style.axis_width);
    1
}

fn draw_horizontal_axis(f: Frame<'_>, surface: &mut dyn DrawingSurface) -> usize {
    let l = f.layout;
    let y = l.baseline_y();
    surface.stroke_line(
        l.margins.horizontal,
        y,
        l.width - l.margins.horizontal,
        y,
        f.config.style.axis_color,
        f.config.style.axis_width,
    );
    1
}

fn draw_value_labels(f: Frame<'_>, surface: &mut dyn DrawingSurface) -> usize {
    let l = f.layout;
    let font = f.config.value_label_font();
    let x = l.value_label_x();
    for i in 0..=l.item_count {
        surface.draw_text(
            &l.value_tick_label(i),
            x,
            l.value_tick_y(i),
            TextAlign::End,
            TextBaseline::Alphabetic,
            &font,
            f.config.style.font_color,
        );
    }
    l.item_count + 1
}

fn draw_category_labels(f: Frame<'_>, surface: &mut dyn DrawingSurface) -> usize {
    let l = f.layout;
    let font = f.config.category_label_font();
    let y = l.category_label_y();
    for (i, label) in f.data.labels().iter().enumerate() {
        surface.draw_text(
            label,
            l.category_center_x(i),
            y,
            TextAlign::Center,
            TextBaseline::Top,
            &font,
            f.config.style.font_color,
        );
    }
    f.data.item_count()
}

fn draw_horizontal_guidelines(f: Frame<'_>, surface: &mut dyn DrawingSurface) -> usize {
    let l = f.layout;
    let (start, end) = (l.margins.horizontal, l.margins.horizontal + l.plottable_width);
    let ys = l.value_tick_ys();
    for &y in &ys {
        surface.stroke_line(start, y, end, y, f.config.style.guideline_color, f.config.style.guideline_width);
    }
    ys.len()
}

fn draw_vertical_guidelines(f: Frame<'_>, surface: &mut dyn DrawingSurface) -> usize {
    let l = f.layout;
    let (bottom, top) = (l.baseline_y(), l.margins.vertical);
    let xs = l.category_left_xs();
    for &x in &xs {
        surface.stroke_line(x, bottom, x, top, f.config.style.guideline_color, f.config.style.guideline_width);
    }
    xs.len()
}

fn draw_bars(f: Frame<'_>, surface: &mut dyn DrawingSurface, colors: &mut dyn ColorProvider) -> usize {
    for (i, &value) in f.data.values().iter().enumerate() {
        let border = colors.next_color().opaque();
        let fill = border.with_opacity(BAR_FILL_OPACITY);
        let bar = f.layout.bar_rect(i, value);
        surface.fill_rect(bar.x, bar.y, bar.width, bar.height, fill, border);
    }
    f.data.item_count()
}
