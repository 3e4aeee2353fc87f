//! Maps the `better_forecast` response into [`ForecastData`].

use crate::error::WeatherFlowError;
use crate::mappers::aggregate::aggregate_day;
use crate::mappers::lookup::{array, opt_f64, opt_i64, opt_string};
use crate::time_alignment::align_in;
use crate::types::forecast::{ForecastDaily, ForecastData, ForecastHourly};
use crate::types::icon::Icon;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

fn icon(item: &Value) -> Icon {
    item.get("icon")
        .and_then(Value::as_str)
        .map(Icon::from_code)
        .unwrap_or(Icon::Unknown)
}

fn utc_time(timestamp: Option<i64>) -> Option<DateTime<Utc>> {
    timestamp.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
}

/// Maps the `current_conditions` object. The forecast sequences are left empty.
pub fn map_current_conditions(current: &Value) -> ForecastData {
    let timestamp = opt_i64(current, "time");
    ForecastData {
        timestamp,
        valid_time: utc_time(timestamp),
        timezone: None,
        condition: opt_string(current, "conditions"),
        icon: icon(current),
        temperature: opt_f64(current, "air_temperature"),
        apparent_temperature: opt_f64(current, "feels_like"),
        dew_point: opt_f64(current, "dew_point"),
        humidity: opt_i64(current, "relative_humidity"),
        pressure: opt_f64(current, "sea_level_pressure"),
        station_pressure: opt_f64(current, "station_pressure"),
        pressure_trend: opt_string(current, "pressure_trend"),
        precipitation_today: opt_f64(current, "precip_accum_local_day"),
        uv_index: opt_f64(current, "uv"),
        wind_speed: opt_f64(current, "wind_avg"),
        wind_gust_speed: opt_f64(current, "wind_gust"),
        wind_bearing: opt_i64(current, "wind_direction"),
        wind_direction_cardinal: opt_string(current, "wind_direction_cardinal"),
        forecast_daily: Vec::new(),
        forecast_hourly: Vec::new(),
    }
}

/// Maps the daily forecast entries.
///
/// Each day is aligned from the station's `timezone` to `local` and gets its
/// precipitation and wind aggregated from the full `hourly` series.
///
/// # Errors
///
/// Fails with [`WeatherFlowError::UnknownTimeZone`] if `timezone` cannot be
/// resolved and a day carries a `day_start_local`.
pub fn map_daily<L: TimeZone>(
    daily: &[Value],
    hourly: &[Value],
    timezone: &str,
    local: &L,
) -> Result<Vec<ForecastDaily>, WeatherFlowError> {
    daily
        .iter()
        .map(|item| {
            let timestamp = opt_i64(item, "day_start_local");
            let valid_time = timestamp
                .map(|ts| align_in(ts, timezone, local))
                .transpose()?;
            let day_num = opt_i64(item, "day_num");
            let day = day_num
                .map(|day| aggregate_day(day, hourly))
                .unwrap_or_default();

            Ok::<_, WeatherFlowError>(ForecastDaily {
                valid_time,
                timestamp,
                day_num,
                temperature: opt_f64(item, "air_temp_high"),
                temp_low: opt_f64(item, "air_temp_low"),
                condition: opt_string(item, "conditions"),
                icon: icon(item),
                precipitation_probability: opt_i64(item, "precip_probability"),
                precipitation: day.precipitation,
                precipitation_icon: opt_string(item, "precip_icon"),
                precipitation_type: opt_string(item, "precip_type"),
                wind_bearing: day.wind_bearing,
                wind_speed: day.wind_speed,
                wind_gust: day.wind_gust,
                sunrise: opt_i64(item, "sunrise"),
                sunset: opt_i64(item, "sunset"),
            })
        })
        .collect()
}

/// Maps the first `forecast_hours` hourly entries; the rest are never read.
pub fn map_hourly(hourly: &[Value], forecast_hours: usize) -> Vec<ForecastHourly> {
    hourly
        .iter()
        .take(forecast_hours)
        .map(|item| {
            let timestamp = opt_i64(item, "time");
            ForecastHourly {
                valid_time: utc_time(timestamp),
                timestamp,
                local_day: opt_i64(item, "local_day"),
                temperature: opt_f64(item, "air_temperature"),
                apparent_temperature: opt_f64(item, "feels_like"),
                condition: opt_string(item, "conditions"),
                icon: icon(item),
                humidity: opt_i64(item, "relative_humidity"),
                precipitation: opt_f64(item, "precip"),
                precipitation_probability: opt_i64(item, "precip_probability"),
                precipitation_type: opt_string(item, "precip_type"),
                pressure: opt_f64(item, "sea_level_pressure"),
                wind_bearing: opt_i64(item, "wind_direction"),
                wind_direction_cardinal: opt_string(item, "wind_direction_cardinal"),
                wind_gust_speed: opt_f64(item, "wind_gust"),
                wind_speed: opt_f64(item, "wind_avg"),
                uv_index: opt_f64(item, "uv"),
            }
        })
        .collect()
}

/// Maps a complete `better_forecast` response.
///
/// # Errors
///
/// Returns [`WeatherFlowError::MissingTimeZone`] if the response has daily
/// entries but no `timezone`, and [`WeatherFlowError::UnknownTimeZone`] if the
/// zone cannot be resolved.
pub fn map_forecast<L: TimeZone>(
    payload: &Value,
    forecast_hours: usize,
    local: &L,
) -> Result<ForecastData, WeatherFlowError> {
    let forecast = payload.get("forecast").unwrap_or(&Value::Null);
    let daily = array(forecast, "daily");
    let hourly = array(forecast, "hourly");
    let timezone = opt_string(payload, "timezone");

    let forecast_daily = match timezone.as_deref() {
        Some(tz) => map_daily(daily, hourly, tz, local)?,
        None if daily.is_empty() => Vec::new(),
        None => return Err(WeatherFlowError::MissingTimeZone),
    };

    let current = payload.get("current_conditions").unwrap_or(&Value::Null);
    Ok(ForecastData {
        timezone,
        forecast_daily,
        forecast_hourly: map_hourly(hourly, forecast_hours),
        ..map_current_conditions(current)
    })
}
