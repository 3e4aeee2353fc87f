//! Tempest device readings and the named-field view of the positional
//! `obs_st` observation row.

use crate::error::WeatherFlowError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Readings taken from the most recent device observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub device_id: Option<u64>,
    /// Battery voltage (V).
    pub voltage: Option<f64>,
    /// Precipitation type code: 0 none, 1 rain, 2 hail, 3 rain and hail.
    pub precipitation_type: Option<i64>,
}

impl DeviceData {
    /// A record for a device that could not be observed (or does not exist).
    pub fn without_readings(device_id: Option<u64>) -> Self {
        Self {
            device_id,
            voltage: None,
            precipitation_type: None,
        }
    }
}

/// A Tempest `obs_st` row decoded by field name.
///
/// WeatherFlow sends device observations as bare arrays. Schema version 1
/// documents 18 leading fields; newer firmware appends more, which are ignored.
/// Rows shorter than that are rejected instead of read at shifted offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct TempestObservation {
    pub epoch: Option<i64>,
    pub wind_lull: Option<f64>,
    pub wind_avg: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_sample_interval: Option<i64>,
    pub station_pressure: Option<f64>,
    pub air_temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub illuminance: Option<f64>,
    pub uv: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub rain_accumulation: Option<f64>,
    pub precipitation_type: Option<i64>,
    pub lightning_average_distance: Option<f64>,
    pub lightning_strike_count: Option<i64>,
    pub battery: Option<f64>,
    pub report_interval: Option<i64>,
}

impl TempestObservation {
    pub const SCHEMA_VERSION: u8 = 1;
    pub const FIELD_COUNT: usize = 18;

    /// Decodes a row, failing if it has fewer than [`Self::FIELD_COUNT`] entries.
    pub fn from_row(row: &[Value], device_id: Option<u64>) -> Result<Self, WeatherFlowError> {
        if row.len() < Self::FIELD_COUNT {
            return Err(WeatherFlowError::ObservationTooShort {
                device_id,
                schema_version: Self::SCHEMA_VERSION,
                expected: Self::FIELD_COUNT,
                found: row.len(),
            });
        }

        let float = |idx: usize| row[idx].as_f64();
        let int = |idx: usize| row[idx].as_i64();

        Ok(Self {
            epoch: int(0),
            wind_lull: float(1),
            wind_avg: float(2),
            wind_gust: float(3),
            wind_direction: float(4),
            wind_sample_interval: int(5),
            station_pressure: float(6),
            air_temperature: float(7),
            relative_humidity: float(8),
            illuminance: float(9),
            uv: float(10),
            solar_radiation: float(11),
            rain_accumulation: float(12),
            precipitation_type: int(13),
            lightning_average_distance: float(14),
            lightning_strike_count: int(15),
            battery: float(16),
            report_interval: int(17),
        })
    }
}
