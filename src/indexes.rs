//! Daily indexes computed from the representative hours of a day.

use crate::forecast::ForecastHour;
use metfor::{HectoPascal, Quantity};
use std::fmt::Display;
use strum_macros::EnumIter;

/// Levels at or above this pressure are used for the mid-level spread.
const SPREAD_BOTTOM: HectoPascal = HectoPascal(700.0);

/// Risk of thunderstorms for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ThunderstormRisk {
    None = 0,
    Low = 1,
    Moderate = 2,
    High = 3,
    VeryHigh = 4,
}

impl ThunderstormRisk {
    /// Bucket the combined thunderstorm factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use location_forecast::ThunderstormRisk;
    ///
    /// assert_eq!(ThunderstormRisk::from_factor(-3.5), ThunderstormRisk::None);
    /// assert_eq!(ThunderstormRisk::from_factor(-3.0), ThunderstormRisk::Low);
    /// assert_eq!(ThunderstormRisk::from_factor(18.0), ThunderstormRisk::VeryHigh);
    /// ```
    pub fn from_factor(factor: f64) -> Self {
        use ThunderstormRisk::*;

        if factor < -3.0 {
            None
        } else if factor < 3.0 {
            Low
        } else if factor < 8.0 {
            Moderate
        } else if factor < 18.0 {
            High
        } else {
            VeryHigh
        }
    }
}

impl From<u8> for ThunderstormRisk {
    fn from(val: u8) -> Self {
        use ThunderstormRisk::*;

        match val {
            0 => None,
            1 => Low,
            2 => Moderate,
            3 => High,
            _ => VeryHigh,
        }
    }
}

impl Display for ThunderstormRisk {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "{} => {:?}", *self as u8, self)
    }
}

/// The terms of the thunderstorm index for one day.
///
/// This is an empirical formula, the constants are calibrated and not derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThunderstormFactors {
    /// Instability from the CAPE at noon and in the afternoon.
    pub cape: f64,
    /// Mean mid-level dew point depression, dry air aloft suppresses storms.
    pub spread: f64,
    /// Surface heating in the morning.
    pub sensible_heat: f64,
    /// Convective clouds and convective rain already forecast.
    pub convection: f64,
}

impl ThunderstormFactors {
    /// Compute the terms from the morning, noon and afternoon hours of a day.
    pub fn new(morning: &ForecastHour, noon: &ForecastHour, afternoon: &ForecastHour) -> Self {
        let hours = [morning, noon, afternoon];

        let base_cape =
            (noon.sample().cape.unpack() + afternoon.sample().cape.unpack()) / 100.0;
        let cape = if base_cape >= 2.0 {
            base_cape
        } else {
            base_cape - 4.0 * (2.0 - base_cape)
        };

        let spread = hours.iter().map(|hour| spread_aloft(hour)).sum::<f64>() / 3.0;

        let raw_heat = (morning.sample().sensible_heat_flux / 10.0).min(10.0);
        let sensible_heat = if raw_heat >= 3.0 {
            raw_heat
        } else {
            raw_heat - 3.0 * (3.0 - raw_heat)
        };

        let cloud_cover: f64 = hours
            .iter()
            .map(|hour| hour.sample().cloud_cover.convective)
            .sum();
        let convective_rain: f64 = hours
            .iter()
            .map(|hour| hour.rain().convective.unpack())
            .sum();
        let convection = (cloud_cover / 10.0 + convective_rain) / 2.0;

        ThunderstormFactors {
            cape,
            spread,
            sensible_heat,
            convection,
        }
    }

    /// The combined factor.
    #[inline]
    pub fn total(&self) -> f64 {
        self.cape + self.convection + self.sensible_heat - self.spread
    }

    /// The risk bucket of the combined factor.
    #[inline]
    pub fn risk(&self) -> ThunderstormRisk {
        ThunderstormRisk::from_factor(self.total())
    }
}

/// Mean dew point depression of the levels at or above 700 hPa, 0 if the column has none.
pub fn spread_aloft(hour: &ForecastHour) -> f64 {
    let (sum, count) = hour
        .sample()
        .pressure_levels
        .aloft(SPREAD_BOTTOM)
        .fold((0.0, 0usize), |(sum, count), lvl| (sum + lvl.spread(), count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Thunderstorm risk from the three representative hours of a day.
pub fn thunderstorm_risk(
    morning: &ForecastHour,
    noon: &ForecastHour,
    afternoon: &ForecastHour,
) -> ThunderstormRisk {
    ThunderstormFactors::new(morning, noon, afternoon).risk()
}
