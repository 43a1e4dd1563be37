//! Dew point and dew point depression (spread) from temperature and relative humidity.
use metfor::{Celsius, Quantity};

/// Lowest relative humidity used for the dew point, as a fraction.
const MIN_RH_FRACTION: f64 = 0.001;

/// Relative humidity as a fraction in `[0, 1]`.
///
/// Values above 1 are taken as percentages, anything else is already a fraction.
#[inline]
pub fn rh_fraction(rh: f64) -> f64 {
    if rh > 1.0 {
        rh / 100.0
    } else {
        rh
    }
}

/// Saturation vapor pressure (hPa) over liquid water.
#[inline]
pub fn saturation_vapor_pressure(temperature: Celsius) -> f64 {
    let t = temperature.unpack();
    6.11 * 10f64.powf(7.5 * t / (237.7 + t))
}

/// Dew point from the temperature and relative humidity, the latter as a fraction or percent.
///
/// The result never exceeds the temperature. Supersaturated input would put the dew point above
/// it. Humidity below 0.1% is taken as 0.1%, so dry air always has a finite, large spread.
///
/// # Examples
///
/// ```rust
/// use location_forecast::moisture::dew_point;
/// use metfor::Celsius;
///
/// let fraction = dew_point(Celsius(20.0), 0.5);
/// let percent = dew_point(Celsius(20.0), 50.0);
/// assert_eq!(fraction, percent);
/// assert!(fraction < Celsius(10.0) && fraction > Celsius(9.0));
///
/// assert_eq!(dew_point(Celsius(-10.0), 105.0), Celsius(-10.0));
/// ```
pub fn dew_point(temperature: Celsius, rh: f64) -> Celsius {
    // Keep the logarithm finite for bone dry air or a negative humidity.
    let rh = rh_fraction(rh).max(MIN_RH_FRACTION);
    let vapor_press = saturation_vapor_pressure(temperature) * rh;
    let ln_vp = vapor_press.ln();
    let dp = (-430.22 + 237.7 * ln_vp) / (19.08 - ln_vp);

    Celsius(dp.min(temperature.unpack()))
}

/// Dew point depression in degrees Celsius, never negative.
#[inline]
pub fn spread(temperature: Celsius, rh: f64) -> f64 {
    temperature.unpack() - dew_point(temperature, rh).unpack()
}
