use location_forecast::{doctest::sample_on, GeoPoint, HourlySample, PointSamples};
use metfor::Mm;

/// Five days of 3 hourly samples with rain accumulating through the run.
pub fn model_run() -> Vec<HourlySample> {
    let mut samples = Vec::with_capacity(40);
    let mut total = 0.0;

    for day in 1..=5 {
        for hour in (0..24).step_by(3) {
            let mut sample = sample_on(2024, 6, day, hour);
            total += 0.25 * f64::from(hour % 9);
            sample.rain.total = Mm(total);
            sample.rain.convective = Mm(total / 3.0);
            samples.push(sample);
        }
    }

    samples
}

/// A band of points around the globe, all with the same run.
pub fn grid(count: usize) -> Vec<PointSamples> {
    let run = model_run();
    let step = 360.0 / count as f64;

    (0..count)
        .map(|i| PointSamples::new(GeoPoint::new(45.0, -180.0 + step * i as f64), run.clone()))
        .collect()
}
