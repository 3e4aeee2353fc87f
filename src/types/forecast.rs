//! Forecast records from the `better_forecast` endpoint.
//!
//! Units follow WeatherFlow's metric defaults: °C, mb, mm, m/s. Values the
//! upstream response lacks are `None`, except the per-day aggregates, which
//! fall back to zero.

use crate::types::icon::Icon;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions from the `better_forecast` endpoint, with the daily and
/// hourly forecasts attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    /// Time of the current-conditions sample (epoch seconds).
    pub timestamp: Option<i64>,
    /// `timestamp` as a UTC datetime.
    pub valid_time: Option<DateTime<Utc>>,
    /// IANA time zone of the station.
    pub timezone: Option<String>,
    pub condition: Option<String>,
    pub icon: Icon,
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub dew_point: Option<f64>,
    pub humidity: Option<i64>,
    /// Sea level pressure (mb).
    pub pressure: Option<f64>,
    pub station_pressure: Option<f64>,
    pub pressure_trend: Option<String>,
    /// Precipitation accumulated since local midnight (mm).
    pub precipitation_today: Option<f64>,
    pub uv_index: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gust_speed: Option<f64>,
    pub wind_bearing: Option<i64>,
    pub wind_direction_cardinal: Option<String>,
    /// One entry per forecast day, in upstream (chronological) order.
    pub forecast_daily: Vec<ForecastDaily>,
    /// Hourly entries in upstream order, cut at the configured horizon.
    pub forecast_hourly: Vec<ForecastHourly>,
}

/// One forecast day.
///
/// Precipitation and wind values are not provided per day upstream; they are
/// aggregated from the hourly series (see [`crate::aggregate_day`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDaily {
    /// Start of the day on the station's calendar, at the caller's local time of day.
    pub valid_time: Option<DateTime<FixedOffset>>,
    /// Raw `day_start_local` epoch from the upstream response.
    pub timestamp: Option<i64>,
    /// Upstream day-of-month index, matched against the hourly `local_day`.
    pub day_num: Option<i64>,
    /// Daily high (°C).
    pub temperature: Option<f64>,
    /// Daily low (°C).
    pub temp_low: Option<f64>,
    pub condition: Option<String>,
    pub icon: Icon,
    /// Chance of precipitation (%).
    pub precipitation_probability: Option<i64>,
    /// Sum of hourly precipitation for the day (mm).
    pub precipitation: f64,
    pub precipitation_icon: Option<String>,
    pub precipitation_type: Option<String>,
    /// Naive arithmetic mean of the hourly bearings (degrees).
    pub wind_bearing: f64,
    /// Mean of the hourly average wind speeds (m/s).
    pub wind_speed: f64,
    /// Highest hourly gust (m/s).
    pub wind_gust: f64,
    /// Sunrise (epoch seconds).
    pub sunrise: Option<i64>,
    /// Sunset (epoch seconds).
    pub sunset: Option<i64>,
}

/// One forecast hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHourly {
    /// Start of the hour in UTC.
    pub valid_time: Option<DateTime<Utc>>,
    /// Raw `time` epoch from the upstream response.
    pub timestamp: Option<i64>,
    /// Day of month on the station's calendar, matched against [`ForecastDaily::day_num`].
    pub local_day: Option<i64>,
    /// Air temperature (°C).
    pub temperature: Option<f64>,
    /// Feels-like temperature (°C).
    pub apparent_temperature: Option<f64>,
    /// Free-text summary, e.g. "Rain Possible".
    pub condition: Option<String>,
    pub icon: Icon,
    /// Relative humidity (%).
    pub humidity: Option<i64>,
    /// Expected precipitation for the hour (mm).
    pub precipitation: Option<f64>,
    /// Chance of precipitation (%).
    pub precipitation_probability: Option<i64>,
    /// "rain", "snow" or "sleet".
    pub precipitation_type: Option<String>,
    /// Sea level pressure (mb).
    pub pressure: Option<f64>,
    /// Direction the wind comes from (degrees).
    pub wind_bearing: Option<i64>,
    pub wind_direction_cardinal: Option<String>,
    /// Wind gust (m/s).
    pub wind_gust_speed: Option<f64>,
    /// Average wind speed (m/s).
    pub wind_speed: Option<f64>,
    pub uv_index: Option<f64>,
}
