//! Data types for one model time step at one geographic point.

use crate::layers::{convective_clouds, ConvectiveClouds, ProfilePoint};
use chrono::{DateTime, Utc};
use metfor::{Celsius, HectoPascal, JpKg, Meters, MetersPSec, Mm, Quantity, WindUV};

pub use self::pressure_column::{PressureColumn, PressureLevel};

/// A geographic point, longitude in `[-180, 180)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, wrapping the longitude into `[-180, 180)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use location_forecast::GeoPoint;
    ///
    /// assert_eq!(GeoPoint::new(45.0, 180.0).longitude(), -180.0);
    /// assert_eq!(GeoPoint::new(45.0, 350.0).longitude(), -10.0);
    /// assert_eq!(GeoPoint::new(45.0, -190.0).longitude(), 170.0);
    /// ```
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude: (longitude + 180.0).rem_euclid(360.0) - 180.0,
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Rain totals accumulated since the model was initialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeRain {
    /// All rain.
    pub total: Mm,
    /// Rain from the convective scheme.
    pub convective: Mm,
}

/// Rain fallen since the previous sample. May be negative if the cumulative totals are not
/// monotonic in the source data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodRain {
    /// All rain.
    pub total: Mm,
    /// Rain from the convective scheme.
    pub convective: Mm,
}

/// Cloud cover in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CloudCover {
    /// Whole atmosphere
    pub entire: f64,
    /// Low clouds
    pub low: f64,
    /// Middle clouds
    pub middle: f64,
    /// High clouds
    pub high: f64,
    /// Convective clouds
    pub convective: f64,
    /// Boundary layer clouds
    pub boundary: f64,
}

/// Depth and mean wind of the boundary layer.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryLayer {
    /// Depth above ground.
    pub height: Meters,
    /// Wind
    pub wind: WindUV<MetersPSec>,
}

/// Values near the ground (2 m temperature and humidity, 10 m wind).
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    /// Temperature in C
    pub temperature: Celsius,
    /// Relative humidity, as a fraction or in percent
    pub relative_humidity: f64,
    /// Wind
    pub wind: WindUV<MetersPSec>,
}

impl Surface {
    /// Dew point near the ground.
    #[inline]
    pub fn dew_point(&self) -> Celsius {
        crate::moisture::dew_point(self.temperature, self.relative_humidity)
    }
}

/// One time-stamped model record for one point, as produced by the decoder.
#[derive(Debug, Clone)]
pub struct HourlySample {
    /// Valid time
    pub time: DateTime<Utc>,
    /// Model ground elevation
    pub elevation: Meters,
    /// Boundary layer
    pub boundary_layer: BoundaryLayer,
    /// Cloud cover
    pub cloud_cover: CloudCover,
    /// Surface values
    pub surface: Surface,
    /// Height of the 0 C isotherm
    pub isotherm_zero: Meters,
    /// Mean sea level pressure
    pub mslp: HectoPascal,
    /// Convective available potential energy
    pub cape: JpKg,
    /// Net sensible heat flux in W/m²
    pub sensible_heat_flux: f64,
    /// Rain since model initialization
    pub rain: CumulativeRain,
    /// Upper air values
    pub pressure_levels: PressureColumn,
}

impl HourlySample {
    /// Convective cloud base and top estimated from this sample, if any.
    pub fn convective_clouds(&self) -> Option<ConvectiveClouds> {
        let mut profile: Vec<ProfilePoint> = self
            .pressure_levels
            .bottom_up()
            .filter(|lvl| lvl.height > self.elevation)
            .map(|lvl| ProfilePoint {
                altitude: lvl.height,
                temperature: lvl.temperature,
                dew_point: lvl.dew_point(),
            })
            .collect();
        // Geopotential heights should already increase with decreasing pressure.
        profile.sort_by(|a, b| a.altitude.unpack().total_cmp(&b.altitude.unpack()));

        convective_clouds(
            self.surface.temperature,
            self.surface.dew_point(),
            self.elevation,
            self.boundary_layer.height,
            &profile,
        )
    }
}

mod pressure_column;

// Public for doc tests only, not part of the API.
#[doc(hidden)]
pub mod doctest {
    use super::*;
    use chrono::TimeZone;

    /// A pressure level with a light westerly wind.
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

    /// A fair weather sample valid at the given UTC date and hour.
    pub fn sample_on(year: i32, month: u32, day: u32, hour: u32) -> HourlySample {
        let levels = vec![
            level(1000.0, 110.0, 21.0, 65.0),
            level(850.0, 1500.0, 12.0, 60.0),
            level(700.0, 3100.0, 2.0, 50.0),
            level(500.0, 5700.0, -15.0, 40.0),
        ];

        HourlySample {
            time: Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
            elevation: Meters(500.0),
            boundary_layer: BoundaryLayer {
                height: Meters(1000.0),
                wind: WindUV {
                    u: MetersPSec(2.0),
                    v: MetersPSec(-3.0),
                },
            },
            cloud_cover: CloudCover {
                entire: 40.0,
                low: 20.0,
                middle: 10.0,
                high: 5.0,
                convective: 15.0,
                boundary: 10.0,
            },
            surface: Surface {
                temperature: Celsius(20.0),
                relative_humidity: 60.0,
                wind: WindUV {
                    u: MetersPSec(1.0),
                    v: MetersPSec(1.0),
                },
            },
            isotherm_zero: Meters(3200.0),
            mslp: HectoPascal(1013.0),
            cape: JpKg(250.0),
            sensible_heat_flux: 60.0,
            rain: CumulativeRain {
                total: Mm(0.0),
                convective: Mm(0.0),
            },
            pressure_levels: PressureColumn::new(levels).unwrap(),
        }
    }

    /// [`sample_on`] 2024-06-01.
    pub fn sample_at(hour: u32) -> HourlySample {
        sample_on(2024, 6, 1, hour)
    }
}
