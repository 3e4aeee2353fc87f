//! Current station observations (the `observations/station` endpoint) and
//! values derived from them.

use crate::types::station::ResolvedStation;
use serde::{Deserialize, Serialize};

const CARDINAL_DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

// Upper bounds (m/s) of Beaufort forces 0..=11; anything above is force 12.
const BEAUFORT_LIMITS: [f64; 12] = [
    0.3, 1.6, 3.4, 5.5, 8.0, 10.8, 13.9, 17.2, 20.8, 24.5, 28.5, 32.7,
];

const BEAUFORT_DESCRIPTIONS: [&str; 13] = [
    "Calm",
    "Light air",
    "Light breeze",
    "Gentle breeze",
    "Moderate breeze",
    "Fresh breeze",
    "Strong breeze",
    "Near gale",
    "Gale",
    "Strong gale",
    "Storm",
    "Violent storm",
    "Hurricane",
];

/// Instantaneous observations from a station, enriched with device readings
/// and caller-supplied context.
///
/// When the station has not reported recently the record is *offline*:
/// `is_online` is `false`, `voltage` carries the last known device reading and
/// every other field is `None`. See [`SensorData::offline`].
///
/// Units follow WeatherFlow's metric defaults: °C, mb, mm, m/s, km, W/m², lux.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorData {
    pub is_online: bool,
    pub station_name: Option<String>,
    /// Elevation in meters, as configured by the caller.
    pub elevation: Option<f64>,
    /// Observation time (epoch seconds).
    pub timestamp: Option<i64>,

    pub air_density: Option<f64>,
    pub air_temperature: Option<f64>,
    pub barometric_pressure: Option<f64>,
    pub brightness: Option<f64>,
    pub delta_t: Option<f64>,
    pub dew_point: Option<f64>,
    pub feels_like: Option<f64>,
    pub heat_index: Option<f64>,

    pub lightning_strike_count: Option<i64>,
    pub lightning_strike_count_last_1hr: Option<i64>,
    pub lightning_strike_count_last_3hr: Option<i64>,
    pub lightning_strike_last_distance: Option<f64>,
    pub lightning_strike_last_epoch: Option<i64>,

    pub precipitation: Option<f64>,
    pub precipitation_last_1hr: Option<f64>,
    pub precipitation_today: Option<f64>,
    pub precipitation_today_final: Option<f64>,
    pub precipitation_yesterday: Option<f64>,
    pub precipitation_yesterday_final: Option<f64>,
    pub precipitation_analysis_type_yesterday: Option<i64>,
    pub precipitation_minutes_today: Option<i64>,
    pub precipitation_minutes_yesterday: Option<i64>,
    pub precipitation_minutes_yesterday_final: Option<i64>,
    /// From the device observation, see [`crate::DeviceData::precipitation_type`].
    pub precipitation_type: Option<i64>,

    /// "falling", "steady" or "rising".
    pub pressure_trend: Option<String>,
    pub relative_humidity: Option<i64>,
    pub sea_level_pressure: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub station_pressure: Option<f64>,
    pub uv: Option<f64>,
    /// Device battery voltage.
    pub voltage: Option<f64>,
    pub wet_bulb_globe_temperature: Option<f64>,
    pub wet_bulb_temperature: Option<f64>,

    pub wind_avg: Option<f64>,
    pub wind_chill: Option<f64>,
    pub wind_direction: Option<i64>,
    pub wind_gust: Option<f64>,
    pub wind_lull: Option<f64>,
}

impl SensorData {
    /// The record produced when the station has no recent observation.
    pub fn offline(voltage: Option<f64>) -> Self {
        Self {
            is_online: false,
            voltage,
            ..Self::default()
        }
    }

    /// 16-point compass direction the wind is coming from.
    pub fn wind_cardinal(&self) -> Option<&'static str> {
        let degrees = self.wind_direction? as f64;
        let index = ((degrees.rem_euclid(360.0) + 11.25) / 22.5) as usize % 16;
        Some(CARDINAL_DIRECTIONS[index])
    }

    /// Beaufort force (0-12) of the average wind speed.
    pub fn beaufort(&self) -> Option<u8> {
        let speed = self.wind_avg?;
        let force = BEAUFORT_LIMITS
            .iter()
            .position(|limit| speed < *limit)
            .unwrap_or(BEAUFORT_LIMITS.len());
        Some(force as u8)
    }

    pub fn beaufort_description(&self) -> Option<&'static str> {
        self.beaufort()
            .map(|force| BEAUFORT_DESCRIPTIONS[force as usize])
    }

    /// WHO exposure category of the UV index.
    pub fn uv_description(&self) -> Option<&'static str> {
        let uv = self.uv?;
        Some(match uv {
            uv if uv < 3.0 => "low",
            uv if uv < 6.0 => "moderate",
            uv if uv < 8.0 => "high",
            uv if uv < 11.0 => "very-high",
            _ => "extreme",
        })
    }

    /// Estimated cloud base in meters above sea level.
    pub fn cloud_base(&self) -> Option<f64> {
        let spread = self.air_temperature? - self.dew_point?;
        Some(spread * 126.0 + self.elevation?)
    }

    /// Estimated altitude of the 0 °C line in meters, never below zero.
    pub fn freezing_altitude(&self) -> Option<f64> {
        let altitude = 192.0 * self.air_temperature? + self.elevation?;
        Some(altitude.max(0.0))
    }

    /// Absolute humidity in g/m³ (Magnus approximation).
    pub fn absolute_humidity(&self) -> Option<f64> {
        let temperature = self.air_temperature?;
        let humidity = self.relative_humidity? as f64;
        let saturation = 6.112 * ((17.67 * temperature) / (temperature + 243.5)).exp();
        Some(saturation * humidity * 2.1674 / (273.15 + temperature))
    }
}

/// A sensor fetch together with the station resolution it used.
///
/// Hand `station` back to the next fetch to skip the station and device lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub data: SensorData,
    pub station: ResolvedStation,
}
