//! Layers of the atmosphere derived from a sample, described by the altitude of their bottom and
//! top.
use metfor::{Celsius, Meters, Quantity};

mod convective;
pub use convective::convective_clouds;

/// Base and top of the convective clouds, meters above mean sea level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvectiveClouds {
    /// Cloud base.
    pub bottom: Meters,
    /// Cloud top.
    pub top: Meters,
}

/// Temperature and dew point at an altitude, one point of a profile sorted by altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Altitude above mean sea level
    pub altitude: Meters,
    /// Temperature in C
    pub temperature: Celsius,
    /// Dew point in C
    pub dew_point: Celsius,
}

impl ProfilePoint {
    /// Dew point depression in degrees Celsius.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.temperature.unpack() - self.dew_point.unpack()
    }
}
