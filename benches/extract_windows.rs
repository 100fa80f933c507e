use criterion::{black_box, criterion_group, criterion_main, Criterion};

use heliograph::extractor::extract;
use heliograph::samples::DaySeries;

/// One-minute grid over a synthetic single-peak day: -50 degrees at local
/// midnight, +30 at noon.
fn minute_series() -> DaySeries {
    let n = 1440;
    let times: Vec<String> = (0..n).map(|m| format!("{:02}:{:02}", m / 60, m % 60)).collect();
    let epochs: Vec<f64> = (0..n).map(|m| 60000.0 + m as f64 / 1440.0).collect();
    let altitudes: Vec<f64> = epochs
        .iter()
        .map(|mjd| -40.0 * (std::f64::consts::TAU * mjd.fract()).cos() - 10.0)
        .collect();
    DaySeries::try_new(times, altitudes, epochs).unwrap()
}

fn bench_extract(c: &mut Criterion) {
    let series = minute_series();
    c.bench_function("extract_minute_grid", |b| {
        b.iter(|| extract(black_box(&series)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
