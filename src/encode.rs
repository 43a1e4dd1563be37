//! Compact JSON encoding of [`LocationForecasts`] for the map client.
//!
//! Keys are one to three characters long. Lengths are in whole meters, wind components in whole
//! km/h and rain in whole millimeters, all rounded half away from zero. Temperatures, humidity,
//! cloud cover and pressure keep full precision. Fields are always written in the same order so
//! the output is reproducible byte for byte.

use crate::{
    error::Result,
    forecast::{DayForecast, ForecastHour, LocationForecasts},
    layers::ConvectiveClouds,
    sample::{CloudCover, PressureLevel},
};
use chrono::SecondsFormat;
use metfor::{Meters, MetersPSec, Mm, Quantity, WindUV};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::io::Write;

/// The encoded form of one location.
#[derive(Debug, Clone, Serialize)]
pub struct EncodedForecast {
    #[serde(rename = "z")]
    elevation: i64,
    #[serde(rename = "d")]
    days: Vec<EncodedDay>,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedDay {
    #[serde(rename = "t")]
    date: String,
    #[serde(rename = "th")]
    thunderstorm_risk: u8,
    #[serde(rename = "h")]
    hours: Vec<EncodedHour>,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedHour {
    #[serde(rename = "t")]
    time: String,
    #[serde(rename = "bl")]
    boundary_layer: EncodedBoundaryLayer,
    #[serde(rename = "c")]
    cloud_cover: EncodedCloudCover,
    #[serde(rename = "p")]
    levels: EncodedLevels,
    #[serde(rename = "s")]
    surface: EncodedSurface,
    #[serde(rename = "iso")]
    isotherm_zero: i64,
    #[serde(rename = "r")]
    rain: EncodedRain,
    #[serde(rename = "mp")]
    mslp: f64,
    #[serde(rename = "cu", skip_serializing_if = "Option::is_none")]
    convective_clouds: Option<EncodedConvectiveClouds>,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedBoundaryLayer {
    h: i64,
    u: i64,
    v: i64,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedCloudCover {
    e: f64,
    l: f64,
    m: f64,
    h: f64,
    c: f64,
    bl: f64,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedLevel {
    h: i64,
    t: f64,
    rh: f64,
    u: i64,
    v: i64,
}

/// Levels keyed by pressure in hPa, from the ground up.
#[derive(Debug, Clone)]
struct EncodedLevels(Vec<(i64, EncodedLevel)>);

impl Serialize for EncodedLevels {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (pressure, level) in &self.0 {
            map.serialize_entry(&pressure.to_string(), level)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
struct EncodedSurface {
    t: f64,
    rh: f64,
    u: i64,
    v: i64,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedRain {
    t: i64,
    c: i64,
}

#[derive(Debug, Clone, Serialize)]
struct EncodedConvectiveClouds {
    b: i64,
    t: i64,
}

#[inline]
fn round(val: f64) -> i64 {
    val.round() as i64
}

#[inline]
fn meters(val: Meters) -> i64 {
    round(val.unpack())
}

#[inline]
fn millimeters(val: Mm) -> i64 {
    round(val.unpack())
}

/// Wind components in km/h.
#[inline]
fn kmh(wind: WindUV<MetersPSec>) -> (i64, i64) {
    (round(wind.u.unpack() * 3.6), round(wind.v.unpack() * 3.6))
}

fn encode_level(level: &PressureLevel) -> (i64, EncodedLevel) {
    let (u, v) = kmh(level.wind);

    (
        round(level.pressure.unpack()),
        EncodedLevel {
            h: meters(level.height),
            t: level.temperature.unpack(),
            rh: level.relative_humidity,
            u,
            v,
        },
    )
}

fn encode_cloud_cover(cover: &CloudCover) -> EncodedCloudCover {
    EncodedCloudCover {
        e: cover.entire,
        l: cover.low,
        m: cover.middle,
        h: cover.high,
        c: cover.convective,
        bl: cover.boundary,
    }
}

fn encode_convective_clouds(clouds: ConvectiveClouds) -> EncodedConvectiveClouds {
    EncodedConvectiveClouds {
        b: meters(clouds.bottom),
        t: meters(clouds.top),
    }
}

fn encode_hour(hour: &ForecastHour) -> EncodedHour {
    let sample = hour.sample();
    let (bl_u, bl_v) = kmh(sample.boundary_layer.wind);
    let (sfc_u, sfc_v) = kmh(sample.surface.wind);
    let rain = hour.rain();

    EncodedHour {
        time: hour.time().to_rfc3339_opts(SecondsFormat::Secs, true),
        boundary_layer: EncodedBoundaryLayer {
            h: meters(sample.boundary_layer.height),
            u: bl_u,
            v: bl_v,
        },
        cloud_cover: encode_cloud_cover(&sample.cloud_cover),
        levels: EncodedLevels(sample.pressure_levels.bottom_up().map(encode_level).collect()),
        surface: EncodedSurface {
            t: sample.surface.temperature.unpack(),
            rh: sample.surface.relative_humidity,
            u: sfc_u,
            v: sfc_v,
        },
        isotherm_zero: meters(sample.isotherm_zero),
        rain: EncodedRain {
            t: millimeters(rain.total),
            c: millimeters(rain.convective),
        },
        mslp: sample.mslp.unpack(),
        convective_clouds: hour.convective_clouds().map(encode_convective_clouds),
    }
}

fn encode_day(day: &DayForecast) -> EncodedDay {
    EncodedDay {
        date: day.date().format("%Y-%m-%d").to_string(),
        thunderstorm_risk: day.thunderstorm_risk() as u8,
        hours: day.hours().iter().map(encode_hour).collect(),
    }
}

/// Convert a forecast into its serializable form.
pub fn encode(forecasts: &LocationForecasts) -> EncodedForecast {
    EncodedForecast {
        elevation: meters(forecasts.elevation()),
        days: forecasts.days().iter().map(encode_day).collect(),
    }
}

/// Encode a forecast as a JSON string.
pub fn to_json(forecasts: &LocationForecasts) -> Result<String> {
    Ok(serde_json::to_string(&encode(forecasts))?)
}

/// Encode a forecast as JSON into a writer, e.g. a file.
pub fn write_json<W: Write>(forecasts: &LocationForecasts, writer: W) -> Result<()> {
    serde_json::to_writer(writer, &encode(forecasts))?;
    Ok(())
}
