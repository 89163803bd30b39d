// File: crates/demo/src/main.rs
// Summary: Demo loads a label/value CSV (or a built-in sample), applies optional JSON style overrides, and renders a bar chart PNG.

use anyhow::{Context, Result};
use barchart_core::types::{HEIGHT, WIDTH};
use barchart_core::{create_chart, ChartOverrides, DataPoint, SkiaProvider};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: barchart-demo [data.csv] [overrides.json]
    let mut args = std::env::args().skip(1);
    let data_arg = args.next();
    let overrides_arg = args.next();

    let (points, stem) = match data_arg.as_deref() {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            tracing::info!(path = %path.display(), "using input file");
            if used_alt {
                tracing::info!("extension swapped between .csv/.cvs");
            }
            let points = load_points_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (points, stem)
        }
        None => {
            tracing::info!("no input file given; rendering the built-in monthly sample");
            (sample_points(), "sample".to_string())
        }
    };
    tracing::info!(rows = points.len(), "loaded data points");

    let overrides = match overrides_arg {
        Some(p) => load_overrides(Path::new(&p))?,
        None => ChartOverrides::default(),
    };

    let mut provider = SkiaProvider::default();
    let handle = create_chart(&mut provider, &stem, WIDTH, HEIGHT, &points, &overrides)
        .context("chart rejected its input")?;
    let layout = handle.chart().layout();
    tracing::info!(
        upper = layout.axis_upper_bound,
        step = layout.value_tick_step,
        slot = layout.category_slot_width,
        "layout"
    );

    let out = out_name(&stem);
    handle.into_surface().save_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Five months of sample values, in the shape of the canvas example page.
fn sample_points() -> Vec<DataPoint> {
    [("Jan", 50.0), ("Feb", 150.0), ("March", 80.0), ("April", 200.0), ("May", 30.0)]
        .into_iter()
        .map(DataPoint::from)
        .collect()
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/bar_chart_<stem>.png
fn out_name(stem: &str) -> PathBuf {
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push("bar_chart.png");
    } else {
        out.push(format!("bar_chart_{short}.png"));
    }
    out
}

fn load_overrides(path: &Path) -> Result<ChartOverrides> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading overrides {}", path.display()))?;
    let overrides = serde_json::from_str(&text)
        .with_context(|| format!("parsing overrides {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded style overrides");
    Ok(overrides)
}

/// Load `label,value` rows; rows whose value does not parse are skipped with a warning.
fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "category"]).unwrap_or(0);
    let i_value = idx(&["value", "amount", "count"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).map(str::trim).unwrap_or_default();
        match rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(value) => out.push(DataPoint::new(label, value)),
            None => tracing::warn!(row = row + 1, label, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
