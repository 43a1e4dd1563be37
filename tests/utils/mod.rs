use chrono::{TimeZone, Utc};
use location_forecast::{
    BoundaryLayer, CloudCover, CumulativeRain, HourlySample, PressureColumn, PressureLevel,
    Surface,
};
use metfor::{Celsius, HectoPascal, JpKg, Meters, MetersPSec, Mm, WindUV};

#[allow(unused_macros)] // False alarm
macro_rules! check_relevant_hours {
    ($test_name:ident, $lon:expr, $hours:expr) => {
        #[test]
        fn $test_name() {
            let cfg = location_forecast::ModelConfig::default();
            let builder = location_forecast::LocationForecastBuilder::new(cfg);
            let samples = utils::run(2024, 6, 1, 24);

            let fc = builder.build(
                location_forecast::GeoPoint::new(0.0, $lon),
                metfor::Meters(0.0),
                &samples,
            );
            let expected: &[u32] = &$hours;

            let full: Vec<_> = fc.days().iter().filter(|d| d.hours().len() == 3).collect();
            assert!(!full.is_empty());
            for day in full {
                let mut hours: Vec<u32> = day
                    .hours()
                    .iter()
                    .map(|h| chrono::Timelike::hour(&h.time()))
                    .collect();
                hours.sort_unstable();
                assert_eq!(hours, expected);
            }
        }
    };
}

pub fn level(pressure: f64, height: f64, temperature: f64, rh: f64) -> PressureLevel {
    PressureLevel {
        pressure: HectoPascal(pressure),
        height: Meters(height),
        temperature: Celsius(temperature),
        relative_humidity: rh,
        wind: WindUV {
            u: MetersPSec(5.0),
            v: MetersPSec(-2.5),
        },
    }
}

pub fn column() -> PressureColumn {
    PressureColumn::new(vec![
        level(850.0, 1500.0, 12.0, 70.0),
        level(700.0, 3000.0, 4.0, 90.0),
        level(500.0, 5600.0, -12.5, 40.0),
    ])
    .unwrap()
}

/// A sample at an elevation of 500 m with cumulative rain `total` and `convective`.
pub fn sample(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    total: f64,
    convective: f64,
) -> HourlySample {
    HourlySample {
        time: Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
        elevation: Meters(500.0),
        boundary_layer: BoundaryLayer {
            height: Meters(1200.0),
            wind: WindUV {
                u: MetersPSec(2.0),
                v: MetersPSec(-3.0),
            },
        },
        cloud_cover: CloudCover {
            entire: 62.5,
            low: 30.0,
            middle: 20.0,
            high: 12.5,
            convective: 25.0,
            boundary: 15.0,
        },
        surface: Surface {
            temperature: Celsius(22.5),
            relative_humidity: 55.0,
            wind: WindUV {
                u: MetersPSec(1.0),
                v: MetersPSec(1.0),
            },
        },
        isotherm_zero: Meters(2950.4),
        mslp: HectoPascal(1016.25),
        cape: JpKg(400.0),
        sensible_heat_flux: 80.0,
        rain: CumulativeRain {
            total: Mm(total),
            convective: Mm(convective),
        },
        pressure_levels: column(),
    }
}

/// `count` dry samples every 3 hours from midnight UTC.
pub fn run(year: i32, month: u32, day: u32, count: u32) -> Vec<HourlySample> {
    let start = sample(year, month, day, 0, 0.0, 0.0);

    (0..count)
        .map(|i| {
            let mut snd = start.clone();
            snd.time = start.time + chrono::Duration::hours(3 * i64::from(i));
            snd
        })
        .collect()
}
