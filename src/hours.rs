//! Choose the hours of the day that represent a location, centered on its local solar noon.
//!
//! Model hours are UTC. The 360 degrees of longitude are split into as many zones as the model has
//! samples per day; every location in a zone shares the same local noon hour and therefore the same
//! set of relevant hours. A [`RelevantHourTable`] computes all zones once per configuration.

use crate::config::ModelConfig;
use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

/// The representative hours (UTC) for one longitude zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantHours {
    noon: u32,
    // Sorted ascending
    hours: Vec<u32>,
}

impl RelevantHours {
    /// The model hour closest to local solar noon.
    #[inline]
    pub fn noon(&self) -> u32 {
        self.noon
    }

    /// The selected hours, ascending.
    #[inline]
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Whether a UTC hour of day is one of the relevant hours.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        self.hours.binary_search(&hour).is_ok()
    }

    /// Whether a sample valid at this time should be kept.
    #[inline]
    pub fn is_relevant(&self, time: &DateTime<Utc>) -> bool {
        time.minute() == 0 && self.contains(time.hour())
    }

    /// Hours to add to UTC to get the solar local time of the zone.
    #[inline]
    pub fn solar_offset_hours(&self) -> i64 {
        12 - i64::from(self.noon)
    }

    /// The calendar day a time belongs to in the solar local time of the zone.
    ///
    /// Grouping by this date keeps all the relevant hours of one local day together, even when
    /// they straddle midnight UTC.
    #[inline]
    pub fn local_date(&self, time: &DateTime<Utc>) -> NaiveDate {
        (*time + Duration::hours(self.solar_offset_hours())).date_naive()
    }
}

/// Index of the longitude zone, zone centers are `360 / daily_samples` degrees apart.
fn zone_index(longitude: f64, config: &ModelConfig) -> usize {
    let zones = config.daily_samples();
    let zone_width = 360.0 / zones as f64;

    // 180 lands on noon at the prime meridian, east of it noon comes earlier in UTC.
    let normalized = (180.0 - longitude).rem_euclid(360.0);

    (normalized / zone_width).round() as usize % zones
}

/// The model hour closest to local solar noon at this longitude.
///
/// # Examples
///
/// ```rust
/// use location_forecast::{hours::local_noon, ModelConfig};
///
/// let cfg = ModelConfig::default();
/// assert_eq!(local_noon(0.0, &cfg), 12);
/// assert_eq!(local_noon(90.0, &cfg), 6);
/// assert_eq!(local_noon(-90.0, &cfg), 18);
/// assert_eq!(local_noon(-180.0, &cfg), 0);
/// ```
pub fn local_noon(longitude: f64, config: &ModelConfig) -> u32 {
    zone_index(longitude, config) as u32 * config.hour_resolution()
}

fn hours_for_noon(noon: u32, config: &ModelConfig) -> RelevantHours {
    let mut candidates: Vec<u32> = (0..24).step_by(config.hour_resolution() as usize).collect();
    let mut hours = Vec::with_capacity(config.representative_periods());

    let circular_distance = |h: u32| {
        let d = (i64::from(h) - i64::from(noon)).abs();
        d.min(24 - d)
    };

    for _ in 0..config.representative_periods() {
        // Candidates are ascending and `min_by_key` keeps the first minimum, so the lowest hour
        // wins a tie.
        let closest = candidates
            .iter()
            .enumerate()
            .min_by_key(|&(_, &h)| circular_distance(h))
            .map(|(i, _)| i);

        match closest {
            Some(i) => hours.push(candidates.remove(i)),
            None => break,
        }
    }

    hours.sort_unstable();
    RelevantHours { noon, hours }
}

/// Compute the relevant hours for a longitude.
///
/// # Examples
///
/// ```rust
/// use location_forecast::{relevant_hours, ModelConfig};
///
/// let cfg = ModelConfig::default();
/// assert_eq!(relevant_hours(0.0, &cfg).hours(), &[9, 12, 15]);
/// assert_eq!(relevant_hours(180.0, &cfg).hours(), &[0, 3, 21]);
/// ```
pub fn relevant_hours(longitude: f64, config: &ModelConfig) -> RelevantHours {
    hours_for_noon(local_noon(longitude, config), config)
}

/// The relevant hours of every longitude zone for one configuration.
///
/// This is immutable once built, so one table can be shared by all the threads of a batch run.
#[derive(Debug, Clone)]
pub struct RelevantHourTable {
    config: ModelConfig,
    zones: Vec<RelevantHours>,
}

impl RelevantHourTable {
    /// Precompute every zone.
    pub fn new(config: ModelConfig) -> Self {
        let zones = (0..config.daily_samples())
            .map(|zone| hours_for_noon(zone as u32 * config.hour_resolution(), &config))
            .collect();

        RelevantHourTable { config, zones }
    }

    /// The relevant hours for a longitude.
    #[inline]
    pub fn for_longitude(&self, longitude: f64) -> &RelevantHours {
        &self.zones[zone_index(longitude, &self.config)]
    }

    /// The configuration the table was built for.
    #[inline]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prime_meridian() {
        let cfg = ModelConfig::default();
        let hours = relevant_hours(0.0, &cfg);

        assert_eq!(hours.noon(), 12);
        assert_eq!(hours.hours(), &[9, 12, 15]);
    }

    #[test]
    fn test_antimeridian_wraps() {
        let cfg = ModelConfig::default();

        for &lon in &[180.0, -180.0, 179.9, -179.9] {
            let hours = relevant_hours(lon, &cfg);
            assert_eq!(hours.noon(), 0, "longitude {}", lon);
            assert_eq!(hours.hours(), &[0, 3, 21], "longitude {}", lon);
        }
    }

    #[test]
    fn test_selection_symmetric_around_noon() {
        let cfg = ModelConfig::default();

        for lon in (-180..180).step_by(5) {
            let hours = relevant_hours(f64::from(lon), &cfg);
            let noon = hours.noon() as i64;
            assert!(hours.contains(hours.noon()));
            assert_eq!(hours.hours().len(), 3);

            let mut offsets: Vec<i64> = hours
                .hours()
                .iter()
                .map(|&h| {
                    let d = (h as i64 - noon).rem_euclid(24);
                    if d > 12 {
                        d - 24
                    } else {
                        d
                    }
                })
                .collect();
            offsets.sort_unstable();
            assert_eq!(offsets, vec![-3, 0, 3], "longitude {}", lon);
        }
    }

    #[test]
    fn test_zone_boundaries_round_to_nearest() {
        let cfg = ModelConfig::default();

        assert_eq!(local_noon(22.4, &cfg), 12);
        // 157.5 / 45 = 3.5 rounds away from zero
        assert_eq!(local_noon(22.5, &cfg), 12);
        assert_eq!(local_noon(22.6, &cfg), 9);
        assert_eq!(local_noon(-22.4, &cfg), 12);
        assert_eq!(local_noon(-22.6, &cfg), 15);
    }

    #[test]
    fn test_tie_goes_to_lowest_hour() {
        let cfg = ModelConfig::new(3, 2).unwrap();
        assert_eq!(relevant_hours(0.0, &cfg).hours(), &[9, 12]);

        let cfg = ModelConfig::new(6, 2).unwrap();
        assert_eq!(relevant_hours(0.0, &cfg).hours(), &[6, 12]);
        assert_eq!(relevant_hours(180.0, &cfg).hours(), &[0, 6]);
    }

    #[test]
    fn test_all_hours() {
        let cfg = ModelConfig::new(6, 4).unwrap();
        assert_eq!(relevant_hours(42.0, &cfg).hours(), &[0, 6, 12, 18]);
    }

    #[test]
    fn test_hourly_model() {
        let cfg = ModelConfig::new(1, 5).unwrap();
        // 15 degrees per zone, 30E is two hours ahead of UTC
        assert_eq!(relevant_hours(30.0, &cfg).hours(), &[8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_table_matches_direct_computation() {
        let cfg = ModelConfig::default();
        let table = RelevantHourTable::new(cfg);

        for lon in (-180..180).step_by(7) {
            let lon = f64::from(lon) + 0.25;
            assert_eq!(table.for_longitude(lon), &relevant_hours(lon, &cfg));
        }
    }

    #[test]
    fn test_is_relevant_and_local_date() {
        let cfg = ModelConfig::default();
        let hours = relevant_hours(180.0, &cfg);

        let evening = Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
        let morning = Utc.with_ymd_and_hms(2024, 6, 2, 3, 0, 0).unwrap();
        let off_hour = Utc.with_ymd_and_hms(2024, 6, 2, 6, 0, 0).unwrap();

        assert!(hours.is_relevant(&evening));
        assert!(hours.is_relevant(&midnight));
        assert!(!hours.is_relevant(&off_hour));

        let day = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(hours.local_date(&evening), day);
        assert_eq!(hours.local_date(&midnight), day);
        assert_eq!(hours.local_date(&morning), day);

        let greenwich = relevant_hours(0.0, &cfg);
        assert_eq!(greenwich.solar_offset_hours(), 0);
        assert_eq!(greenwich.local_date(&evening), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }
}
