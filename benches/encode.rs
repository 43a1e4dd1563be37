//! Run these benches with `cargo bench --bench encode -- --verbose`

use criterion::{criterion_group, criterion_main, Criterion};
use location_forecast::{to_json, write_json, LocationForecastBuilder, ModelConfig};

mod utils;

criterion_main!(encode_benches);

criterion_group!(encode_benches, to_json_bench, write_json_bench);

fn to_json_bench(c: &mut Criterion) {
    let builder = LocationForecastBuilder::new(ModelConfig::default());
    let forecasts = builder.build_batch(&utils::grid(16));

    c.bench_function("to_json", |b| {
        b.iter(|| {
            for fc in &forecasts {
                let _x = to_json(fc).expect("oops");
            }
        });
    });
}

fn write_json_bench(c: &mut Criterion) {
    let builder = LocationForecastBuilder::new(ModelConfig::default());
    let forecasts = builder.build_batch(&utils::grid(16));
    let mut buf: Vec<u8> = Vec::with_capacity(1 << 16);

    c.bench_function("write_json", |b| {
        b.iter(|| {
            buf.clear();
            for fc in &forecasts {
                write_json(fc, &mut buf).expect("oops");
            }
        });
    });
}
