//! Turn the cumulative rain of a run into rain per period.

use crate::{
    forecast::ForecastHour,
    sample::{CumulativeRain, HourlySample, PeriodRain},
};
use itertools::Itertools;
use metfor::{Mm, Quantity};
use std::iter;

/// Rain fallen between two cumulative readings.
///
/// The difference is not clamped, a decreasing total in the source data gives negative rain.
#[inline]
pub fn rain_between(previous: &CumulativeRain, current: &CumulativeRain) -> PeriodRain {
    PeriodRain {
        total: Mm(current.total.unpack() - previous.total.unpack()),
        convective: Mm(current.convective.unpack() - previous.convective.unpack()),
    }
}

/// Convert a chronological run of samples for one point into forecast hours carrying the rain
/// fallen since the previous sample.
///
/// The model accumulates from initialization, so the first sample's totals are already the rain of
/// its period. An empty input gives an empty output.
///
/// # Examples
///
/// ```rust
/// use location_forecast::{period_rain, sample::CumulativeRain};
/// # use location_forecast::doctest::sample_at;
/// use metfor::Mm;
///
/// let mut samples = vec![sample_at(0), sample_at(3), sample_at(6)];
/// for (sample, &total) in samples.iter_mut().zip(&[1.0, 4.0, 4.5]) {
///     sample.rain = CumulativeRain {
///         total: Mm(total),
///         convective: Mm(0.0),
///     };
/// }
///
/// let hours = period_rain(&samples);
/// let rain: Vec<Mm> = hours.iter().map(|h| h.rain().total).collect();
/// assert_eq!(rain, vec![Mm(1.0), Mm(3.0), Mm(0.5)]);
/// ```
pub fn period_rain(samples: &[HourlySample]) -> Vec<ForecastHour> {
    let first = match samples.first() {
        Some(first) => first,
        None => return vec![],
    };

    let first_rain = PeriodRain {
        total: first.rain.total,
        convective: first.rain.convective,
    };

    iter::once(ForecastHour::new(first.clone(), first_rain))
        .chain(
            samples
                .iter()
                .tuple_windows::<(_, _)>()
                .map(|(prev, cur)| {
                    ForecastHour::new(cur.clone(), rain_between(&prev.rain, &cur.rain))
                }),
        )
        .collect()
}
