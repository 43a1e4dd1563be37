//! Synthetic samples used in tests.

pub use crate::sample::doctest::{level, sample_at, sample_on};

use crate::{
    forecast::ForecastHour,
    sample::{HourlySample, PeriodRain, PressureColumn},
};
use chrono::Duration;
use metfor::{JpKg, Mm, Quantity};

/// `count` samples every 3 hours starting at midnight UTC of the given day.
pub fn run_from(year: i32, month: u32, day: u32, count: usize) -> Vec<HourlySample> {
    let first = sample_on(year, month, day, 0);

    (0..count)
        .map(|i| {
            let mut sample = first.clone();
            sample.time = first.time + Duration::hours(3 * i as i64);
            sample
        })
        .collect()
}

/// Morning, noon and afternoon hours at the prime meridian with the same CAPE, morning heat flux
/// and humidity at every pressure level.
pub fn day_hours(cape: f64, heat: f64, humidity: f64) -> Vec<ForecastHour> {
    [9, 12, 15]
        .iter()
        .map(|&hour| {
            let mut sample = sample_at(hour);
            sample.cape = JpKg(cape);
            sample.sensible_heat_flux = heat;
            sample.pressure_levels = PressureColumn::new(
                sample
                    .pressure_levels
                    .levels()
                    .iter()
                    .map(|lvl| {
                        level(
                            lvl.pressure.unpack(),
                            lvl.height.unpack(),
                            lvl.temperature.unpack(),
                            humidity,
                        )
                    })
                    .collect(),
            )
            .unwrap();

            ForecastHour::new(
                sample,
                PeriodRain {
                    total: Mm(0.0),
                    convective: Mm(0.0),
                },
            )
        })
        .collect()
}
