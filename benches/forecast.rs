//! Run these benches with `cargo bench --bench forecast -- --verbose`

use criterion::{criterion_group, criterion_main, Criterion};
use location_forecast::{period_rain, GeoPoint, LocationForecastBuilder, ModelConfig};
use metfor::Meters;

mod utils;

criterion_main!(forecast_benches);

criterion_group!(
    forecast_benches,
    period_rain_bench,
    build_bench,
    build_batch_bench
);

fn period_rain_bench(c: &mut Criterion) {
    let run = utils::model_run();

    c.bench_function("period_rain", |b| {
        b.iter(|| {
            let _x = period_rain(&run);
        });
    });
}

fn build_bench(c: &mut Criterion) {
    let run = utils::model_run();
    let builder = LocationForecastBuilder::new(ModelConfig::default());

    c.bench_function("build", |b| {
        b.iter(|| {
            for &lon in &[-180.0, -90.0, 0.0, 90.0] {
                let _x = builder.build(GeoPoint::new(45.0, lon), Meters(500.0), &run);
            }
        });
    });
}

fn build_batch_bench(c: &mut Criterion) {
    let points = utils::grid(256);
    let builder = LocationForecastBuilder::new(ModelConfig::default());

    c.bench_function("build_batch", |b| {
        b.iter(|| {
            let _x = builder.build_batch(&points);
        });
    });
}
