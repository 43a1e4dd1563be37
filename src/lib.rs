#![warn(missing_docs)]
//! Build per-location, per-day forecast summaries from the hourly samples of a numerical weather
//! model run.
//!
//! A decoder hands over one chronological run of [`HourlySample`]s per geographic point. The
//! [`LocationForecastBuilder`] converts the cumulative rain to rain per period, keeps the hours
//! around local solar noon, groups them by local day and rates the thunderstorm risk of every
//! complete day. The result can be written as compact JSON with [`to_json`] or [`write_json`].
//!
//! ```rust
//! use location_forecast::{doctest::sample_at, GeoPoint, LocationForecastBuilder, ModelConfig};
//! use metfor::Meters;
//!
//! let builder = LocationForecastBuilder::new(ModelConfig::default());
//! let samples: Vec<_> = (0..8).map(|i| sample_at(3 * i)).collect();
//!
//! let fc = builder.build(GeoPoint::new(46.5, 7.0), Meters(500.0), &samples);
//! assert_eq!(fc.days().len(), 1);
//! assert_eq!(fc.days()[0].hours().len(), 3);
//!
//! let json = location_forecast::to_json(&fc).unwrap();
//! assert!(json.starts_with(r#"{"z":500,"d":[{"t":"2024-06-01""#));
//! ```

//
// API
//
pub use crate::config::ModelConfig;
pub use crate::encode::{encode, to_json, write_json, EncodedForecast};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{
    DayForecast, ForecastHour, LocationForecastBuilder, LocationForecasts, PointSamples,
};
pub use crate::hours::{relevant_hours, RelevantHourTable, RelevantHours};
pub use crate::indexes::{spread_aloft, thunderstorm_risk, ThunderstormFactors, ThunderstormRisk};
pub use crate::layers::{convective_clouds, ConvectiveClouds};
pub use crate::rain::{period_rain, rain_between};
pub use crate::sample::{
    BoundaryLayer, CloudCover, CumulativeRain, GeoPoint, HourlySample, PeriodRain, PressureColumn,
    PressureLevel, Surface,
};

#[doc(hidden)]
pub use crate::sample::doctest;

pub mod hours;
pub mod layers;
pub mod moisture;
pub mod sample;

//
// Internal use only
//

// Modules
mod config;
mod encode;
mod error;
mod forecast;
mod indexes;
mod rain;
#[cfg(test)]
mod test_data;
