use crate::endpoint::WEATHERFLOW_BASE_URL;
use chrono_tz::Tz;

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Number of hourly forecast entries mapped when none is configured.
pub const DEFAULT_FORECAST_HOURS: usize = 72;

/// Construction-time settings of a [`WeatherFlow`](crate::WeatherFlow) client.
///
/// # Examples
///
/// ```rust
/// use weatherflow_forecast::WeatherFlowConfig;
///
/// let config = WeatherFlowConfig::builder()
///     .station_id(12345)
///     .api_key("my-token")
///     .elevation(31.5)
///     .build();
///
/// assert_eq!(config.forecast_hours, 72);
/// assert!(config.user_agent.starts_with("weatherflow-forecast/"));
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct WeatherFlowConfig {
    /// Station to query. Not a device ID.
    pub station_id: u64,
    /// Personal access token.
    #[builder(into)]
    pub api_key: String,
    /// Station elevation in meters, only copied into sensor output.
    pub elevation: Option<f64>,
    /// How many hourly forecast entries to map.
    #[builder(default = DEFAULT_FORECAST_HOURS)]
    pub forecast_hours: usize,
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
    #[builder(into, default = WEATHERFLOW_BASE_URL.to_string())]
    pub base_url: String,
    /// Zone daily forecasts are aligned to. The process-local zone if unset.
    pub local_timezone: Option<Tz>,
}
