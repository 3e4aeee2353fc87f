//! The main entry point: an async client for a single WeatherFlow station.

use crate::config::WeatherFlowConfig;
use crate::endpoint::Endpoint;
use crate::error::WeatherFlowError;
use crate::mappers::forecast::map_forecast;
use crate::mappers::sensor::{map_sensor, SensorContext};
use crate::mappers::station::{map_device, map_station};
use crate::transport::http::HttpApi;
use crate::transport::WeatherFlowApi;
use crate::types::device::DeviceData;
use crate::types::forecast::ForecastData;
use crate::types::sensor::SensorReading;
use crate::types::station::{ResolvedStation, StationData};
use bon::bon;
use chrono::Local;
use log::{info, warn};
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};

/// State and mapping shared by the async and blocking clients.
#[derive(Debug)]
pub(crate) struct ClientCore {
    pub(crate) config: WeatherFlowConfig,
    last_response: Mutex<Option<Arc<Value>>>,
}

impl ClientCore {
    pub(crate) fn new(config: WeatherFlowConfig) -> Self {
        Self {
            config,
            last_response: Mutex::new(None),
        }
    }

    pub(crate) fn url(&self, endpoint: Endpoint) -> Result<String, WeatherFlowError> {
        endpoint.url(&self.config.base_url, &self.config.api_key)
    }

    pub(crate) fn station_endpoint(&self) -> Endpoint {
        Endpoint::Station {
            station_id: self.config.station_id,
        }
    }

    pub(crate) fn forecast_endpoint(&self) -> Endpoint {
        Endpoint::Forecast {
            station_id: self.config.station_id,
        }
    }

    pub(crate) fn observations_endpoint(&self) -> Endpoint {
        Endpoint::StationObservations {
            station_id: self.config.station_id,
        }
    }

    /// Stores `payload` as the last response and hands it back.
    pub(crate) fn remember(&self, payload: Value) -> Arc<Value> {
        let payload = Arc::new(payload);
        *self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&payload));
        payload
    }

    pub(crate) fn last_response(&self) -> Option<Arc<Value>> {
        self.last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn map_station(&self, payload: &Value) -> Result<StationData, WeatherFlowError> {
        map_station(payload, self.config.station_id).inspect_err(|e| warn!("{}", e))
    }

    pub(crate) fn map_forecast(
        &self,
        payload: &Value,
        forecast_hours: Option<usize>,
    ) -> Result<ForecastData, WeatherFlowError> {
        let forecast_hours = forecast_hours.unwrap_or(self.config.forecast_hours);
        match self.config.local_timezone {
            Some(tz) => map_forecast(payload, forecast_hours, &tz),
            None => map_forecast(payload, forecast_hours, &Local),
        }
    }

    pub(crate) fn resolved(&self, station: StationData, device: DeviceData) -> ResolvedStation {
        if station.has_device() {
            info!(
                "Resolved station {} to Tempest device {:?}",
                station.station_id, station.device_id
            );
        } else {
            warn!(
                "Station {} has no Tempest device, sensor data will lack device readings",
                station.station_id
            );
        }
        ResolvedStation { station, device }
    }

    pub(crate) fn sensor_reading(&self, payload: &Value, station: ResolvedStation) -> SensorReading {
        let context = SensorContext {
            elevation: self.config.elevation,
            station_name: station.station.name.clone(),
            voltage: station.device.voltage,
            precipitation_type: station.device.precipitation_type,
        };
        SensorReading {
            data: map_sensor(payload, &context),
            station,
        }
    }
}

/// Async client for one WeatherFlow station.
///
/// Every operation issues its requests in sequence through the transport `A`
/// and maps the JSON into typed records. Device resolution is not cached
/// inside the client: [`WeatherFlow::fetch_sensor_data`] returns the
/// [`ResolvedStation`] it used, and accepts it back on the next call.
///
/// # Examples
///
/// ```rust,no_run
/// # use weatherflow_forecast::{WeatherFlow, WeatherFlowConfig, WeatherFlowError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherFlowError> {
/// let config = WeatherFlowConfig::builder()
///     .station_id(12345)
///     .api_key("my-token")
///     .build();
/// let client = WeatherFlow::new(config);
///
/// let forecast = client.get_forecast().forecast_hours(24).call().await?;
/// println!("{:?} with {} hourly entries", forecast.condition, forecast.forecast_hourly.len());
///
/// let first = client.fetch_sensor_data().call().await?;
/// let next = client
///     .fetch_sensor_data()
///     .resolved(&first.station)
///     .call()
///     .await?;
/// println!("{:?}", next.data.air_temperature);
/// # Ok(())
/// # }
/// ```
pub struct WeatherFlow<A: WeatherFlowApi = HttpApi> {
    core: ClientCore,
    api: A,
}

impl WeatherFlow<HttpApi> {
    /// Creates a client with a fresh `reqwest` connection pool.
    pub fn new(config: WeatherFlowConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Creates a client that shares an existing `reqwest` client.
    ///
    /// Timeouts, proxies and connection limits are taken from `client`.
    pub fn with_client(config: WeatherFlowConfig, client: reqwest::Client) -> Self {
        let api = HttpApi::new(client, config.user_agent.clone());
        Self::with_api(config, api)
    }
}

#[bon]
impl<A: WeatherFlowApi> WeatherFlow<A> {
    /// Creates a client over any transport.
    pub fn with_api(config: WeatherFlowConfig, api: A) -> Self {
        Self {
            core: ClientCore::new(config),
            api,
        }
    }

    pub fn config(&self) -> &WeatherFlowConfig {
        &self.core.config
    }

    /// The raw JSON of the most recent successful request, if any.
    pub fn last_response(&self) -> Option<Arc<Value>> {
        self.core.last_response()
    }

    async fn fetch(&self, endpoint: Endpoint) -> Result<Arc<Value>, WeatherFlowError> {
        let payload = self.api.request(&self.core.url(endpoint)?).await?;
        Ok(self.core.remember(payload))
    }

    /// Fetches the station metadata.
    ///
    /// # Errors
    ///
    /// Transport errors, and [`WeatherFlowError::NoStations`] if the station
    /// ID is unknown (or is really a device ID).
    pub async fn get_station(&self) -> Result<StationData, WeatherFlowError> {
        let payload = self.fetch(self.core.station_endpoint()).await?;
        self.core.map_station(&payload)
    }

    /// Fetches the latest observation of a device.
    ///
    /// With `None` no request is made and a record without readings is returned.
    pub async fn get_device(&self, device_id: Option<u64>) -> Result<DeviceData, WeatherFlowError> {
        let Some(id) = device_id else {
            return map_device(None, None);
        };
        let payload = self
            .fetch(Endpoint::DeviceObservations { device_id: id })
            .await?;
        map_device(Some(&payload), device_id)
    }

    /// Fetches current conditions with the daily and hourly forecast.
    ///
    /// * `.forecast_hours(usize)`: Optional. Overrides the configured hourly horizon.
    #[builder]
    pub async fn get_forecast(
        &self,
        forecast_hours: Option<usize>,
    ) -> Result<ForecastData, WeatherFlowError> {
        let payload = self.fetch(self.core.forecast_endpoint()).await?;
        self.core.map_forecast(&payload, forecast_hours)
    }

    /// Looks up the station and, if it has a Tempest device, that device's
    /// latest observation.
    pub async fn resolve_station(&self) -> Result<ResolvedStation, WeatherFlowError> {
        let station = self.get_station().await?;
        let device = self.get_device(station.device_id).await?;
        Ok(self.core.resolved(station, device))
    }

    /// Fetches the current station observations.
    ///
    /// * `.resolved(&ResolvedStation)`: Optional. A resolution from an earlier
    ///   call. Without it the station is resolved first, costing one or two
    ///   extra requests.
    ///
    /// An offline station is not an error, see [`crate::SensorData::offline`].
    #[builder]
    pub async fn fetch_sensor_data(
        &self,
        resolved: Option<&ResolvedStation>,
    ) -> Result<SensorReading, WeatherFlowError> {
        let station = match resolved {
            Some(station) => station.clone(),
            None => self.resolve_station().await?,
        };
        let payload = self.fetch(self.core.observations_endpoint()).await?;
        Ok(self.core.sensor_reading(&payload, station))
    }
}
