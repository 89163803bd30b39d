// File: crates/barchart-core/tests/properties.rs
// Purpose: Property checks for the layout engine and pipeline over generated datasets.

use barchart_core::geometry::Rect;
use barchart_core::{BarChart, ChartOverrides, DataPoint, DrawCall, RandomColors, RecordingSurface};
use proptest::prelude::*;

/// Values in hundredths so none sits a rounding error above a multiple of ten.
fn dataset() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(0u32..1_000_000, 1..40).prop_map(|cents| {
        cents
            .into_iter()
            .enumerate()
            .map(|(i, c)| DataPoint::new(format!("c{i}"), f64::from(c) / 100.0))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_plot_area_is_surface_minus_margins(
        w in 50.0f64..4000.0,
        h in 50.0f64..4000.0,
        ratio in 3.0f64..49.0,
        data in dataset(),
    ) {
        let overrides = ChartOverrides { margin_ratio: Some(ratio), ..Default::default() };
        let chart = BarChart::new(w, h, &data, &overrides).unwrap();
        let l = chart.layout();
        prop_assert_eq!(l.plottable_width, w - 2.0 * l.margins.horizontal);
        prop_assert_eq!(l.plottable_height, h - 2.0 * l.margins.vertical);
        prop_assert!(l.plottable_width > 0.0 && l.plottable_height > 0.0);
        prop_assert!(l.bar_width() > 0.0);
    }

    #[test]
    fn prop_statistics_match_input(data in dataset()) {
        let chart = BarChart::new(600.0, 450.0, &data, &ChartOverrides::default()).unwrap();
        let l = chart.layout();
        let max = data.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
        let min = data.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        prop_assert_eq!(l.item_count, data.len());
        prop_assert_eq!(l.value_max, max);
        prop_assert_eq!(l.value_min, min);
        prop_assert_eq!(chart.data().labels().len(), data.len());
    }

    #[test]
    fn prop_upper_bound_is_round_and_covers_max(data in dataset()) {
        let chart = BarChart::new(600.0, 450.0, &data, &ChartOverrides::default()).unwrap();
        let l = chart.layout();
        prop_assert!(l.axis_upper_bound >= l.value_max);
        prop_assert!(l.axis_upper_bound > 0.0);
        prop_assert_eq!((l.axis_upper_bound / 10.0).fract(), 0.0);
        // all-zero data still gets one rounding unit of headroom
        prop_assert!(l.axis_upper_bound - l.value_max < 10.0 || l.value_max == 0.0);
    }

    #[test]
    fn prop_slots_fill_the_plot_width(w in 100.0f64..3000.0, data in dataset()) {
        let chart = BarChart::new(w, 400.0, &data, &ChartOverrides::default()).unwrap();
        let l = chart.layout();
        let total: f64 = (0..l.item_count).map(|_| l.category_slot_width).sum();
        prop_assert!((total - l.plottable_width).abs() <= 1e-9 * l.plottable_width.max(1.0));
    }

    #[test]
    fn prop_pipeline_emits_fixed_call_count_inside_plot(data in dataset(), seed in any::<u64>()) {
        let chart = BarChart::new(800.0, 500.0, &data, &ChartOverrides::default()).unwrap();
        let mut surface = RecordingSurface::new(800.0, 500.0);
        chart.render(&mut surface, &mut RandomColors::with_seed(seed));

        let n = data.len();
        prop_assert_eq!(surface.calls().len(), 4 * n + 5);
        prop_assert_eq!(surface.rects().count(), n);

        let plot = chart.layout().plot_rect();
        for call in surface.rects() {
            if let DrawCall::Rect { x, y, w, h, .. } = call {
                let bar = Rect::from_xywh(*x, *y, *w, *h);
                prop_assert!(plot.contains_rect(&bar, 1e-6));
            }
        }
    }

    #[test]
    fn prop_render_is_idempotent_for_a_fixed_seed(data in dataset(), seed in any::<u64>()) {
        let chart = BarChart::new(640.0, 480.0, &data, &ChartOverrides::default()).unwrap();
        let mut a = RecordingSurface::new(640.0, 480.0);
        let mut b = RecordingSurface::new(640.0, 480.0);
        chart.render(&mut a, &mut RandomColors::with_seed(seed));
        chart.render(&mut b, &mut RandomColors::with_seed(seed));
        prop_assert_eq!(a.calls(), b.calls());

        let again = BarChart::new(640.0, 480.0, &data, &ChartOverrides::default()).unwrap();
        prop_assert_eq!(chart.layout(), again.layout());
    }
}
