use barchart_core::{BarChart, ChartOverrides, DataPoint, FixedColors, RecordingSurface, Rgba};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_points(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint::new(format!("c{i}"), (i as f64 * 0.37).sin().abs() * 180.0 + 5.0))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[5usize, 50, 500] {
        let data = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &data, |b, d| {
            b.iter(|| black_box(BarChart::new(800.0, 500.0, d, &ChartOverrides::default())));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_recording");
    for &n in &[5usize, 50, 500] {
        let chart = BarChart::new(800.0, 500.0, &gen_points(n), &ChartOverrides::default()).expect("valid chart");
        group.bench_function(format!("n{n}"), |b| {
            let mut surface = RecordingSurface::new(800.0, 500.0);
            let mut colors = FixedColors::new(vec![Rgba::rgb(64, 160, 255)]);
            b.iter(|| {
                chart.render(&mut surface, &mut colors);
                black_box(surface.calls().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_pipeline);
criterion_main!(benches);
