//! Maps the `observations/station` response into [`SensorData`].

use crate::mappers::lookup::{array, opt_f64, opt_i64, opt_string};
use crate::types::sensor::SensorData;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values the sensor record carries that are not part of the observation response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorContext {
    pub elevation: Option<f64>,
    pub station_name: Option<String>,
    /// Last known device battery voltage.
    pub voltage: Option<f64>,
    pub precipitation_type: Option<i64>,
}

/// Maps the latest observation of an `observations/station` response.
///
/// An empty or missing `obs` array means the station is offline; the result is
/// then [`SensorData::offline`] carrying only `context.voltage`.
pub fn map_sensor(payload: &Value, context: &SensorContext) -> SensorData {
    let Some(item) = array(payload, "obs").first() else {
        warn!(
            "No observations for station {:?}, reporting it offline",
            payload.get("station_id")
        );
        return SensorData::offline(context.voltage);
    };

    SensorData {
        is_online: true,
        station_name: context.station_name.clone(),
        elevation: context.elevation,
        timestamp: opt_i64(item, "timestamp"),

        air_density: opt_f64(item, "air_density"),
        air_temperature: opt_f64(item, "air_temperature"),
        barometric_pressure: opt_f64(item, "barometric_pressure"),
        brightness: opt_f64(item, "brightness"),
        delta_t: opt_f64(item, "delta_t"),
        dew_point: opt_f64(item, "dew_point"),
        feels_like: opt_f64(item, "feels_like"),
        heat_index: opt_f64(item, "heat_index"),

        lightning_strike_count: opt_i64(item, "lightning_strike_count"),
        lightning_strike_count_last_1hr: opt_i64(item, "lightning_strike_count_last_1hr"),
        lightning_strike_count_last_3hr: opt_i64(item, "lightning_strike_count_last_3hr"),
        lightning_strike_last_distance: opt_f64(item, "lightning_strike_last_distance"),
        lightning_strike_last_epoch: opt_i64(item, "lightning_strike_last_epoch"),

        precipitation: opt_f64(item, "precip"),
        precipitation_last_1hr: opt_f64(item, "precip_accum_last_1hr"),
        precipitation_today: opt_f64(item, "precip_accum_local_day"),
        precipitation_today_final: opt_f64(item, "precip_accum_local_day_final"),
        precipitation_yesterday: opt_f64(item, "precip_accum_local_yesterday"),
        precipitation_yesterday_final: opt_f64(item, "precip_accum_local_yesterday_final"),
        precipitation_analysis_type_yesterday: opt_i64(item, "precip_analysis_type_yesterday"),
        precipitation_minutes_today: opt_i64(item, "precip_minutes_local_day"),
        precipitation_minutes_yesterday: opt_i64(item, "precip_minutes_local_yesterday"),
        precipitation_minutes_yesterday_final: opt_i64(
            item,
            "precip_minutes_local_yesterday_final",
        ),
        precipitation_type: context.precipitation_type,

        pressure_trend: opt_string(item, "pressure_trend"),
        relative_humidity: opt_i64(item, "relative_humidity"),
        sea_level_pressure: opt_f64(item, "sea_level_pressure"),
        solar_radiation: opt_f64(item, "solar_radiation"),
        station_pressure: opt_f64(item, "station_pressure"),
        uv: opt_f64(item, "uv"),
        voltage: context.voltage,
        wet_bulb_globe_temperature: opt_f64(item, "wet_bulb_globe_temperature"),
        wet_bulb_temperature: opt_f64(item, "wet_bulb_temperature"),

        wind_avg: opt_f64(item, "wind_avg"),
        wind_chill: opt_f64(item, "wind_chill"),
        wind_direction: opt_i64(item, "wind_direction"),
        wind_gust: opt_f64(item, "wind_gust"),
        wind_lull: opt_f64(item, "wind_lull"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> SensorContext {
        SensorContext {
            elevation: Some(60.0),
            station_name: Some("Backyard".to_string()),
            voltage: Some(2.55),
            precipitation_type: Some(0),
        }
    }

    #[test]
    fn test_empty_obs_is_offline() {
        let data = map_sensor(&json!({"station_id": 1, "obs": []}), &context());
        assert!(!data.is_online);
        assert_eq!(data, SensorData::offline(Some(2.55)));
        assert_eq!(data.station_name, None);
        assert_eq!(data.elevation, None);
        assert_eq!(data.air_temperature, None);

        let data = map_sensor(&json!({"obs": null}), &context());
        assert_eq!(data, SensorData::offline(Some(2.55)));
    }

    #[test]
    fn test_observation_with_context() {
        let payload = json!({
            "station_id": 1,
            "obs": [{
                "timestamp": 1_700_000_000,
                "air_temperature": 7.25,
                "relative_humidity": 91,
                "precip_accum_local_day": 1.5,
                "lightning_strike_count_last_3hr": 4,
                "pressure_trend": "falling",
                "wind_direction": 225,
                "wind_avg": 3.1,
            }]
        });
        let data = map_sensor(&payload, &context());
        assert!(data.is_online);
        assert_eq!(data.station_name.as_deref(), Some("Backyard"));
        assert_eq!(data.elevation, Some(60.0));
        assert_eq!(data.voltage, Some(2.55));
        assert_eq!(data.precipitation_type, Some(0));
        assert_eq!(data.air_temperature, Some(7.25));
        assert_eq!(data.relative_humidity, Some(91));
        assert_eq!(data.precipitation_today, Some(1.5));
        assert_eq!(data.lightning_strike_count_last_3hr, Some(4));
        assert_eq!(data.pressure_trend.as_deref(), Some("falling"));
        assert_eq!(data.wind_cardinal(), Some("SW"));
        assert_eq!(data.heat_index, None);
    }
}
