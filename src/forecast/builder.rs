use super::{DayForecast, ForecastHour, LocationForecasts};
use crate::{
    config::ModelConfig,
    hours::{RelevantHourTable, RelevantHours},
    indexes::{thunderstorm_risk, ThunderstormRisk},
    rain::period_rain,
    sample::{GeoPoint, HourlySample},
};
use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, trace};
use metfor::Meters;
use rayon::prelude::*;
use std::borrow::Cow;

/// The samples of one point, as handed over by the decoder.
#[derive(Debug, Clone)]
pub struct PointSamples {
    /// Where
    pub point: GeoPoint,
    /// Ground elevation
    pub elevation: Meters,
    /// Chronological samples starting at the first hour after model initialization
    pub samples: Vec<HourlySample>,
}

impl PointSamples {
    /// Bundle the samples of a point, the ground elevation is taken from the first sample.
    pub fn new(point: GeoPoint, samples: Vec<HourlySample>) -> Self {
        let elevation = samples
            .first()
            .map(|sample| sample.elevation)
            .unwrap_or(Meters(0.0));

        PointSamples {
            point,
            elevation,
            samples,
        }
    }
}

/// Builds [`LocationForecasts`] for any number of points of one model run.
///
/// The relevant hours of every longitude are computed once when the builder is created, after that
/// the builder is read only and may be shared between threads.
#[derive(Debug, Clone)]
pub struct LocationForecastBuilder {
    hours: RelevantHourTable,
}

impl LocationForecastBuilder {
    /// Create a builder for a model configuration.
    pub fn new(config: ModelConfig) -> Self {
        LocationForecastBuilder {
            hours: RelevantHourTable::new(config),
        }
    }

    /// The model configuration.
    #[inline]
    pub fn config(&self) -> &ModelConfig {
        self.hours.config()
    }

    /// The relevant hours used for a longitude.
    #[inline]
    pub fn relevant_hours(&self, longitude: f64) -> &RelevantHours {
        self.hours.for_longitude(longitude)
    }

    /// Build the forecast of one point.
    ///
    /// Rain is converted to period rain, only the relevant hours are kept and grouped by local
    /// calendar day. Days without exactly the representative number of hours get no thunderstorm
    /// risk.
    pub fn build(
        &self,
        point: GeoPoint,
        elevation: Meters,
        samples: &[HourlySample],
    ) -> LocationForecasts {
        debug_assert!(
            samples
                .windows(2)
                .all(|pair| pair[0].pressure_levels.same_levels(&pair[1].pressure_levels)),
            "pressure levels differ between samples of one run"
        );

        let relevant = self.relevant_hours(point.longitude());

        // Rain differences only make sense between consecutive samples.
        let samples: Cow<[HourlySample]> = if samples.windows(2).all(|w| w[0].time <= w[1].time) {
            Cow::Borrowed(samples)
        } else {
            trace!("sorting {} samples by time", samples.len());
            let mut sorted = samples.to_vec();
            sorted.sort_by_key(|sample| sample.time);
            Cow::Owned(sorted)
        };

        let hours: Vec<ForecastHour> = period_rain(&samples)
            .into_iter()
            .filter(|hour| relevant.is_relevant(&hour.time()))
            .collect();

        let by_day = hours
            .into_iter()
            .group_by(|hour| relevant.local_date(&hour.time()));

        let days: Vec<DayForecast> = by_day
            .into_iter()
            .map(|(date, day_hours)| {
                let day_hours: Vec<ForecastHour> = day_hours.collect();
                let risk = self.day_risk(&point, date, &day_hours);
                DayForecast::new(date, day_hours, risk)
            })
            .collect();

        trace!(
            "built {} days from {} samples at ({}, {})",
            days.len(),
            samples.len(),
            point.latitude(),
            point.longitude()
        );

        LocationForecasts::new(point, elevation, days)
    }

    /// Build the forecasts of many points in parallel, in the order of the input.
    pub fn build_batch(&self, points: &[PointSamples]) -> Vec<LocationForecasts> {
        points
            .par_iter()
            .map(|pnt| self.build(pnt.point, pnt.elevation, &pnt.samples))
            .collect()
    }

    fn day_risk(
        &self,
        point: &GeoPoint,
        date: NaiveDate,
        hours: &[ForecastHour],
    ) -> ThunderstormRisk {
        match hours {
            [morning, noon, afternoon] if self.config().representative_periods() == 3 => {
                thunderstorm_risk(morning, noon, afternoon)
            }
            _ => {
                debug!(
                    "{} of {} representative hours on {} at ({}, {}), no thunderstorm risk",
                    hours.len(),
                    self.config().representative_periods(),
                    date,
                    point.latitude(),
                    point.longitude()
                );
                ThunderstormRisk::None
            }
        }
    }
}
