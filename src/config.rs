//! Model configuration shared by the hour selector and the forecast builder.
//!
//! The values are fixed for a given model run. They are threaded explicitly into every component
//! that needs them so forecasts for many locations can be built in parallel from one value.
use crate::error::{ForecastError, Result};
use serde::Deserialize;
use std::{convert::TryFrom, fs, path::Path};

const HOURS_PER_DAY: u32 = 24;

/// Time resolution of the model and how many samples of each day are kept.
///
/// A value can only be created through a validating constructor or deserializer, so every
/// `ModelConfig` in use is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawModelConfig")]
pub struct ModelConfig {
    hour_resolution: u32,
    representative_periods: usize,
}

/// The fields as written in a configuration file, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModelConfig {
    hour_resolution: u32,
    representative_periods: usize,
}

impl TryFrom<RawModelConfig> for ModelConfig {
    type Error = ForecastError;

    fn try_from(raw: RawModelConfig) -> Result<Self> {
        ModelConfig::new(raw.hour_resolution, raw.representative_periods)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            hour_resolution: 3,
            representative_periods: 3,
        }
    }
}

impl ModelConfig {
    /// Create and validate a configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use location_forecast::ModelConfig;
    ///
    /// let cfg = ModelConfig::new(3, 3).unwrap();
    /// assert_eq!(cfg.daily_samples(), 8);
    ///
    /// assert!(ModelConfig::new(5, 3).is_err());
    /// assert!(ModelConfig::new(3, 9).is_err());
    /// ```
    pub fn new(hour_resolution: u32, representative_periods: usize) -> Result<Self> {
        let cfg = ModelConfig {
            hour_resolution,
            representative_periods,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a TOML document and validate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use location_forecast::ModelConfig;
    ///
    /// let cfg = ModelConfig::from_toml_str("hour_resolution = 1\nrepresentative_periods = 5\n")
    ///     .unwrap();
    /// assert_eq!(cfg.daily_samples(), 24);
    /// ```
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let raw: RawModelConfig = toml::from_str(toml)?;
        Self::try_from(raw)
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let toml = fs::read_to_string(path)?;
        Self::from_toml_str(&toml)
    }

    /// Hours between two consecutive model samples, divides 24.
    #[inline]
    pub fn hour_resolution(&self) -> u32 {
        self.hour_resolution
    }

    /// Number of representative samples kept per day, centered on local solar noon.
    #[inline]
    pub fn representative_periods(&self) -> usize {
        self.representative_periods
    }

    /// Number of samples the model produces for one day.
    #[inline]
    pub fn daily_samples(&self) -> usize {
        (HOURS_PER_DAY / self.hour_resolution) as usize
    }

    /// Check the invariants between the fields.
    fn validate(&self) -> Result<()> {
        if self.hour_resolution == 0 || HOURS_PER_DAY % self.hour_resolution != 0 {
            return Err(ForecastError::InvalidConfig(format!(
                "hour resolution {} does not divide a day",
                self.hour_resolution
            )));
        }

        if self.representative_periods == 0 {
            return Err(ForecastError::InvalidConfig(
                "at least one representative period is required".to_owned(),
            ));
        }

        if self.representative_periods > self.daily_samples() {
            return Err(ForecastError::InvalidConfig(format!(
                "{} representative periods requested, only {} samples per day",
                self.representative_periods,
                self.daily_samples()
            )));
        }

        Ok(())
    }
}
