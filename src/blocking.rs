//! A blocking counterpart of [`crate::WeatherFlow`].
//!
//! Same operations and results; each call blocks the current thread until
//! its requests finish. Do not use it from within an async runtime.

use crate::config::WeatherFlowConfig;
use crate::endpoint::Endpoint;
use crate::error::WeatherFlowError;
use crate::mappers::station::map_device;
use crate::transport::http::BlockingHttpApi;
use crate::transport::BlockingWeatherFlowApi;
use crate::types::device::DeviceData;
use crate::types::forecast::ForecastData;
use crate::types::sensor::SensorReading;
use crate::types::station::{ResolvedStation, StationData};
use crate::weatherflow::ClientCore;
use bon::bon;
use serde_json::Value;
use std::sync::Arc;

/// Blocking client for one WeatherFlow station.
///
/// ```rust,no_run
/// # use weatherflow_forecast::{blocking, WeatherFlowConfig, WeatherFlowError};
/// # fn main() -> Result<(), WeatherFlowError> {
/// let config = WeatherFlowConfig::builder()
///     .station_id(12345)
///     .api_key("my-token")
///     .build();
/// let client = blocking::WeatherFlow::new(config);
/// let station = client.get_station()?;
/// println!("{:?}", station.name);
/// # Ok(())
/// # }
/// ```
pub struct WeatherFlow<A: BlockingWeatherFlowApi = BlockingHttpApi> {
    core: ClientCore,
    api: A,
}

impl WeatherFlow<BlockingHttpApi> {
    pub fn new(config: WeatherFlowConfig) -> Self {
        Self::with_client(config, reqwest::blocking::Client::new())
    }

    pub fn with_client(config: WeatherFlowConfig, client: reqwest::blocking::Client) -> Self {
        let api = BlockingHttpApi::new(client, config.user_agent.clone());
        Self::with_api(config, api)
    }
}

#[bon]
impl<A: BlockingWeatherFlowApi> WeatherFlow<A> {
    pub fn with_api(config: WeatherFlowConfig, api: A) -> Self {
        Self {
            core: ClientCore::new(config),
            api,
        }
    }

    pub fn config(&self) -> &WeatherFlowConfig {
        &self.core.config
    }

    pub fn last_response(&self) -> Option<Arc<Value>> {
        self.core.last_response()
    }

    fn fetch(&self, endpoint: Endpoint) -> Result<Arc<Value>, WeatherFlowError> {
        let payload = self.api.request(&self.core.url(endpoint)?)?;
        Ok(self.core.remember(payload))
    }

    /// See [`crate::WeatherFlow::get_station`].
    pub fn get_station(&self) -> Result<StationData, WeatherFlowError> {
        let payload = self.fetch(self.core.station_endpoint())?;
        self.core.map_station(&payload)
    }

    /// See [`crate::WeatherFlow::get_device`].
    pub fn get_device(&self, device_id: Option<u64>) -> Result<DeviceData, WeatherFlowError> {
        let Some(id) = device_id else {
            return map_device(None, None);
        };
        let payload = self.fetch(Endpoint::DeviceObservations { device_id: id })?;
        map_device(Some(&payload), device_id)
    }

    /// See [`crate::WeatherFlow::get_forecast`].
    #[builder]
    pub fn get_forecast(
        &self,
        forecast_hours: Option<usize>,
    ) -> Result<ForecastData, WeatherFlowError> {
        let payload = self.fetch(self.core.forecast_endpoint())?;
        self.core.map_forecast(&payload, forecast_hours)
    }

    pub fn resolve_station(&self) -> Result<ResolvedStation, WeatherFlowError> {
        let station = self.get_station()?;
        let device = self.get_device(station.device_id)?;
        Ok(self.core.resolved(station, device))
    }

    /// See [`crate::WeatherFlow::fetch_sensor_data`].
    #[builder]
    pub fn fetch_sensor_data(
        &self,
        resolved: Option<&ResolvedStation>,
    ) -> Result<SensorReading, WeatherFlowError> {
        let station = match resolved {
            Some(station) => station.clone(),
            None => self.resolve_station()?,
        };
        let payload = self.fetch(self.core.observations_endpoint())?;
        Ok(self.core.sensor_reading(&payload, station))
    }
}
