// File: crates/barchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart (fixed palette, text suppressed) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden comparison to ease first run.
// - Bar interiors are always checked against the layout, golden or not.
#![cfg(feature = "skia")]

use barchart_core::color::BAR_FILL_OPACITY;
use barchart_core::{
    BarChart, ChartOverrides, DataPoint, DrawingSurface, FixedColors, FontSpec, Rgba, SkiaSurface, TextAlign,
    TextBaseline,
};

/// Forwards everything except text, which varies with installed fonts.
struct NoText<'a>(&'a mut SkiaSurface);

impl DrawingSurface for NoText<'_> {
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba, width: f64) {
        self.0.stroke_line(x0, y0, x1, y1, color, width)
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Rgba, stroke: Rgba) {
        self.0.fill_rect(x, y, w, h, fill, stroke)
    }
    fn draw_text(&mut self, _: &str, _: f64, _: f64, _: TextAlign, _: TextBaseline, _: &FontSpec, _: Rgba) {}
    fn clear(&mut self) {
        self.0.clear()
    }
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

const PALETTE: [Rgba; 3] = [
    Rgba { r: 64, g: 160, b: 255, a: 255 },
    Rgba { r: 40, g: 200, b: 120, a: 255 },
    Rgba { r: 220, g: 80, b: 80, a: 255 },
];

fn render_bytes(points: &[DataPoint]) -> Vec<u8> {
    let chart = BarChart::new(480.0, 320.0, points, &ChartOverrides::default()).expect("valid chart");
    let mut surface = SkiaSurface::new(480.0, 320.0, Rgba::rgb(255, 255, 255)).expect("raster surface");
    let mut colors = FixedColors::new(PALETTE.to_vec());
    chart.render(&mut NoText(&mut surface), &mut colors);
    let bytes = surface.png_bytes().expect("encode png");
    assert_bar_fills(&chart, &bytes);
    bytes
}

/// Each bar's interior shows its palette colour at bar-fill opacity over the white background.
/// Sampled at the slot centre, halfway between the lowest tick line and the baseline.
fn assert_bar_fills(chart: &BarChart, bytes: &[u8]) {
    let img = image::load_from_memory(bytes).expect("decode").to_rgba8();
    let l = chart.layout();
    let y = (l.value_tick_y(l.item_count - 1) + l.baseline_y()) / 2.0;
    let alpha = f64::from(PALETTE[0].with_opacity(BAR_FILL_OPACITY).a) / 255.0;
    for (i, &value) in chart.data().values().iter().enumerate() {
        let bar = l.bar_rect(i, value).normalized();
        if bar.top() > y - 2.0 {
            continue;
        }
        let x = l.category_center_x(i);
        let px = img.get_pixel(x as u32, y as u32).0;
        let c = PALETTE[i % PALETTE.len()];
        for (got, want) in px.iter().zip([c.r, c.g, c.b]) {
            let want = f64::from(want) * alpha + 255.0 * (1.0 - alpha);
            assert!((f64::from(*got) - want).abs() <= 3.0, "bar {i} at ({x},{y}): {px:?}, want ~{want}");
        }
        assert_eq!(px[3], 255);
    }
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_months_chart() {
    let points = vec![
        DataPoint::new("Jan", 50.0),
        DataPoint::new("Feb", 150.0),
        DataPoint::new("Mar", 80.0),
        DataPoint::new("Apr", 200.0),
        DataPoint::new("May", 30.0),
    ];
    write_or_compare(&snapshot_path("months.png"), &render_bytes(&points));
}

#[test]
fn golden_single_bar() {
    write_or_compare(&snapshot_path("single_bar.png"), &render_bytes(&[DataPoint::new("X", 10.0)]));
}

#[test]
fn rendering_is_pixel_stable() {
    let points = vec![DataPoint::new("a", 3.0), DataPoint::new("b", 17.0)];
    let a = image::load_from_memory(&render_bytes(&points)).expect("decode").to_rgba8();
    let b = image::load_from_memory(&render_bytes(&points)).expect("decode").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
