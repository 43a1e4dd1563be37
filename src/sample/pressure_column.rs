use crate::error::{ForecastError, Result};
use metfor::{Celsius, HectoPascal, Meters, MetersPSec, Quantity, WindUV};

/// A copy of the model values at one pressure level.
#[derive(Clone, Copy, Debug)]
pub struct PressureLevel {
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Geopotential height in meters
    pub height: Meters,
    /// Temperature in C
    pub temperature: Celsius,
    /// Relative humidity, as a fraction or in percent
    pub relative_humidity: f64,
    /// Wind
    pub wind: WindUV<MetersPSec>,
}

impl PressureLevel {
    /// Dew point at this level.
    #[inline]
    pub fn dew_point(&self) -> Celsius {
        crate::moisture::dew_point(self.temperature, self.relative_humidity)
    }

    /// Dew point depression at this level.
    #[inline]
    pub fn spread(&self) -> f64 {
        crate::moisture::spread(self.temperature, self.relative_humidity)
    }
}

/// The upper air values of one sample, ordered by ascending pressure (top of the column first).
#[derive(Clone, Debug, Default)]
pub struct PressureColumn {
    levels: Vec<PressureLevel>,
}

impl PressureColumn {
    /// Build a column from levels in any order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use location_forecast::{PressureColumn, PressureLevel};
    /// use metfor::{Celsius, HectoPascal, Meters, MetersPSec, WindUV};
    ///
    /// let level = |p: f64, h: f64| PressureLevel {
    ///     pressure: HectoPascal(p),
    ///     height: Meters(h),
    ///     temperature: Celsius(0.0),
    ///     relative_humidity: 50.0,
    ///     wind: WindUV {
    ///         u: MetersPSec(0.0),
    ///         v: MetersPSec(0.0),
    ///     },
    /// };
    ///
    /// let col = PressureColumn::new(vec![level(850.0, 1500.0), level(500.0, 5600.0)]).unwrap();
    /// assert_eq!(col.levels()[0].pressure, HectoPascal(500.0));
    ///
    /// assert!(PressureColumn::new(vec![level(850.0, 1500.0), level(850.0, 1500.0)]).is_err());
    /// ```
    pub fn new(mut levels: Vec<PressureLevel>) -> Result<Self> {
        levels.sort_by(|a, b| a.pressure.unpack().total_cmp(&b.pressure.unpack()));

        if let Some(dup) = levels
            .windows(2)
            .find(|pair| pair[0].pressure == pair[1].pressure)
        {
            return Err(ForecastError::DuplicateLevel(dup[0].pressure));
        }

        Ok(PressureColumn { levels })
    }

    /// All levels, lowest pressure first.
    #[inline]
    pub fn levels(&self) -> &[PressureLevel] {
        &self.levels
    }

    /// Iterate the levels from the bottom of the column up.
    #[inline]
    pub fn bottom_up(&self) -> impl Iterator<Item = &PressureLevel> {
        self.levels.iter().rev()
    }

    /// The levels at or above a pressure, e.g. everything from 700 hPa up.
    #[inline]
    pub fn aloft(&self, bottom: HectoPascal) -> impl Iterator<Item = &PressureLevel> {
        self.levels.iter().take_while(move |lvl| lvl.pressure <= bottom)
    }

    /// The pressure keys of this column, lowest first.
    pub fn pressures(&self) -> impl Iterator<Item = HectoPascal> + '_ {
        self.levels.iter().map(|lvl| lvl.pressure)
    }

    /// Two columns have the same set of pressure keys.
    pub fn same_levels(&self, other: &PressureColumn) -> bool {
        self.levels.len() == other.levels.len() && self.pressures().eq(other.pressures())
    }
}
