// File: crates/barchart-core/src/layout.rs
// Summary: Layout engine; turns a resolved config and normalized data into pixel geometry.
// Notes:
// - The value axis rounds up to a fixed unit of 10. For data far outside roughly
//   10..1000 this gives coarse or crowded tick labels; that is a known limitation.
// - Tick count follows item count: the value axis always has `item_count + 1` labels.

use crate::config::ChartConfig;
use crate::data::NormalizedData;
use crate::error::{ChartError, ChartResult};
use crate::geometry::Rect;
use crate::grid::{format_tick, linspace};
use crate::types::Margins;

/// Value-axis rounding unit.
pub const ROUNDING_UNIT: f64 = 10.0;

/// Geometry shared by every draw stage. Computed once per dataset, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutDescriptor {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    /// Inset divisor for label offsets and bar padding (the margin ratio).
    pub inset_divisor: f64,
    pub item_count: usize,
    pub value_max: f64,
    pub value_min: f64,
    /// Smallest positive multiple of [`ROUNDING_UNIT`] that is >= `value_max`.
    pub axis_upper_bound: f64,
    pub value_tick_step: f64,
    pub plottable_width: f64,
    pub plottable_height: f64,
    /// Pixel width of one category: bar plus its inset on both sides.
    pub category_slot_width: f64,
    /// Pixels per data unit.
    pub value_scale: f64,
}

impl LayoutDescriptor {
    /// Pure and deterministic; identical inputs give identical descriptors.
    pub fn compute(config: &ChartConfig, data: &NormalizedData) -> ChartResult<Self> {
        let item_count = data.item_count();
        if item_count == 0 {
            return Err(ChartError::EmptyDataset);
        }
        let n = item_count as f64;

        let plottable_width = config.width - config.margins.hsum();
        let plottable_height = config.height - config.margins.vsum();
        if plottable_width <= 0.0 || plottable_height <= 0.0 {
            return Err(ChartError::DegenerateLayout(format!(
                "plot area {plottable_width}x{plottable_height} with margin ratio {}%",
                config.margin_ratio
            )));
        }

        let axis_upper_bound = upper_bound(data.value_max());
        let value_tick_step = axis_upper_bound / n;
        let category_slot_width = plottable_width / n;
        let value_scale = plottable_height / axis_upper_bound;

        let layout = Self {
            width: config.width,
            height: config.height,
            margins: config.margins,
            inset_divisor: config.margin_ratio,
            item_count,
            value_max: data.value_max(),
            value_min: data.value_min(),
            axis_upper_bound,
            value_tick_step,
            plottable_width,
            plottable_height,
            category_slot_width,
            value_scale,
        };

        if layout.bar_width() <= 0.0 {
            return Err(ChartError::DegenerateLayout(format!(
                "bar width {} in a {category_slot_width}px slot; margin ratio {}% must exceed 2",
                layout.bar_width(),
                config.margin_ratio
            )));
        }

        tracing::debug!(
            items = item_count,
            upper = axis_upper_bound,
            step = value_tick_step,
            slot = category_slot_width,
            scale = value_scale,
            "layout computed"
        );
        Ok(layout)
    }

    /// The plot area inside the margins.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_xywh(self.margins.horizontal, self.margins.vertical, self.plottable_width, self.plottable_height)
    }

    /// y of the category axis; bars grow upward from here.
    pub fn baseline_y(&self) -> f64 {
        self.height - self.margins.vertical
    }

    /// y of the `i`-th value tick, `i` in `0..=item_count`, top to bottom.
    /// Ticks split the plot height into `item_count` equal bands.
    pub fn value_tick_y(&self, i: usize) -> f64 {
        let band = (self.baseline_y() - self.margins.vertical) / self.item_count as f64;
        self.margins.vertical + band * i as f64
    }

    /// y of every value tick. The first is the plot top, the last the baseline.
    pub fn value_tick_ys(&self) -> Vec<f64> {
        linspace(self.margins.vertical, self.baseline_y(), self.item_count + 1)
    }

    /// Value printed next to the `i`-th tick.
    pub fn value_tick_value(&self, i: usize) -> f64 {
        self.axis_upper_bound - i as f64 * self.value_tick_step
    }

    pub fn value_tick_label(&self, i: usize) -> String {
        format_tick(self.value_tick_value(i))
    }

    /// x of the right edge of value-axis labels.
    pub fn value_label_x(&self) -> f64 {
        self.margins.horizontal - self.margins.horizontal / self.inset_divisor
    }

    /// y of the top of category labels.
    pub fn category_label_y(&self) -> f64 {
        self.baseline_y() + self.margins.vertical / self.inset_divisor
    }

    /// Left edge of the `i`-th category slot.
    pub fn category_left_x(&self, i: usize) -> f64 {
        self.margins.horizontal + i as f64 * self.category_slot_width
    }

    /// Left edge of every slot, in category order.
    pub fn category_left_xs(&self) -> Vec<f64> {
        let right = self.margins.horizontal + self.plottable_width;
        let mut xs = linspace(self.margins.horizontal, right, self.item_count + 1);
        xs.pop();
        xs
    }

    pub fn category_center_x(&self, i: usize) -> f64 {
        self.category_left_x(i) + self.category_slot_width / 2.0
    }

    /// Padding on each side of a bar within its slot.
    pub fn bar_inset(&self) -> f64 {
        self.category_slot_width / self.inset_divisor
    }

    pub fn bar_width(&self) -> f64 {
        self.category_slot_width - 2.0 * self.bar_inset()
    }

    /// Bar for `value` in slot `i`. Height is negative: the bar grows up from the baseline.
    pub fn bar_rect(&self, i: usize, value: f64) -> Rect {
        Rect::from_xywh(
            self.category_left_x(i) + self.bar_inset(),
            self.baseline_y(),
            self.bar_width(),
            -self.value_scale * value,
        )
    }
}

fn upper_bound(value_max: f64) -> f64 {
    let bound = (value_max / ROUNDING_UNIT).ceil() * ROUNDING_UNIT;
    if bound > 0.0 { bound } else { ROUNDING_UNIT }
}
