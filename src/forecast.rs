//! The per-location, per-day forecast assembled from a run of samples.

use crate::{
    indexes::ThunderstormRisk,
    layers::ConvectiveClouds,
    sample::{GeoPoint, HourlySample, PeriodRain},
};
use chrono::{DateTime, NaiveDate, Utc};
use metfor::Meters;

mod builder;
pub use builder::{LocationForecastBuilder, PointSamples};

/// A sample with its rain expressed as the rain fallen since the previous sample.
///
/// The wrapped sample still carries the cumulative totals; [`ForecastHour::rain`] is the only
/// period rain.
#[derive(Debug, Clone)]
pub struct ForecastHour {
    sample: HourlySample,
    rain: PeriodRain,
}

impl ForecastHour {
    /// Pair a sample with the rain of its period.
    #[inline]
    pub fn new(sample: HourlySample, rain: PeriodRain) -> Self {
        ForecastHour { sample, rain }
    }

    /// The model values.
    #[inline]
    pub fn sample(&self) -> &HourlySample {
        &self.sample
    }

    /// Rain since the previous sample.
    #[inline]
    pub fn rain(&self) -> PeriodRain {
        self.rain
    }

    /// Valid time.
    #[inline]
    pub fn time(&self) -> DateTime<Utc> {
        self.sample.time
    }

    /// Convective cloud base and top, if any.
    #[inline]
    pub fn convective_clouds(&self) -> Option<ConvectiveClouds> {
        self.sample.convective_clouds()
    }
}

/// The relevant hours of one local calendar day.
#[derive(Debug, Clone)]
pub struct DayForecast {
    date: NaiveDate,
    hours: Vec<ForecastHour>,
    thunderstorm_risk: ThunderstormRisk,
}

impl DayForecast {
    pub(crate) fn new(
        date: NaiveDate,
        hours: Vec<ForecastHour>,
        thunderstorm_risk: ThunderstormRisk,
    ) -> Self {
        DayForecast {
            date,
            hours,
            thunderstorm_risk,
        }
    }

    /// The local calendar date.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The hours, sorted by time.
    #[inline]
    pub fn hours(&self) -> &[ForecastHour] {
        &self.hours
    }

    /// Risk of thunderstorms, `None` if the day is incomplete.
    #[inline]
    pub fn thunderstorm_risk(&self) -> ThunderstormRisk {
        self.thunderstorm_risk
    }
}

/// Everything forecast for one point.
#[derive(Debug, Clone)]
pub struct LocationForecasts {
    point: GeoPoint,
    elevation: Meters,
    days: Vec<DayForecast>,
}

impl LocationForecasts {
    pub(crate) fn new(point: GeoPoint, elevation: Meters, days: Vec<DayForecast>) -> Self {
        LocationForecasts {
            point,
            elevation,
            days,
        }
    }

    /// The point.
    #[inline]
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Ground elevation.
    #[inline]
    pub fn elevation(&self) -> Meters {
        self.elevation
    }

    /// The days, sorted by date.
    #[inline]
    pub fn days(&self) -> &[DayForecast] {
        &self.days
    }

    /// No days could be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
