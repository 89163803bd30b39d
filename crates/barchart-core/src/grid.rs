// File: crates/barchart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Values at or above this magnitude carry no representable cents and print as-is.
const ROUNDING_LIMIT: f64 = 1e15;

/// Format a tick value: integers without a fraction, others with at most two decimals.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 || value.abs() >= ROUNDING_LIMIT {
        return format!("{value}");
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format!("{rounded}");
    }
    let s = format!("{rounded:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
