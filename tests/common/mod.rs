//! Canned transports for the client tests. No network access.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use weatherflow_forecast::{
    BlockingWeatherFlowApi, WeatherFlowApi, WeatherFlowConfig, WeatherFlowError,
};

pub const STATION_ID: u64 = 12345;
pub const DEVICE_ID: u64 = 67890;

pub fn fixture(name: &str) -> Value {
    let raw = match name {
        "forecast" => include_str!("../fixtures/forecast.json"),
        "station" => include_str!("../fixtures/station.json"),
        "station_no_device" => include_str!("../fixtures/station_no_device.json"),
        "device" => include_str!("../fixtures/device.json"),
        "observations" => include_str!("../fixtures/observations.json"),
        "observations_offline" => include_str!("../fixtures/observations_offline.json"),
        other => panic!("no fixture named {other}"),
    };
    serde_json::from_str(raw).expect("fixture is valid JSON")
}

pub fn config() -> WeatherFlowConfig {
    WeatherFlowConfig::builder()
        .station_id(STATION_ID)
        .api_key("test-token")
        .elevation(180.0)
        .base_url("https://weatherflow.test/swd/rest")
        .local_timezone(chrono_tz::America::Chicago)
        .build()
}

/// Answers each request with the payload of the first route whose fragment
/// occurs in the URL, and records every URL it was asked for.
#[derive(Clone, Default)]
pub struct FakeApi {
    routes: Vec<(&'static str, Value)>,
    requests: Arc<Mutex<Vec<String>>>,
    unauthorized: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A station with a Tempest device, online.
    pub fn standard() -> Self {
        Self::new()
            .route("observations/device/", fixture("device"))
            .route("observations/station/", fixture("observations"))
            .route("stations/", fixture("station"))
            .route("better_forecast", fixture("forecast"))
    }

    /// Rejects every request the way WeatherFlow does for a bad token.
    pub fn unauthorized() -> Self {
        Self {
            unauthorized: true,
            ..Self::default()
        }
    }

    pub fn route(mut self, fragment: &'static str, payload: Value) -> Self {
        self.routes.push((fragment, payload));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, fragment: &str) -> usize {
        self.requests()
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }

    fn respond(&self, url: &str) -> Result<Value, WeatherFlowError> {
        self.requests.lock().unwrap().push(url.to_string());
        if self.unauthorized {
            return Err(WeatherFlowError::Unauthorized {
                url: url.to_string(),
            });
        }
        self.routes
            .iter()
            .find(|(fragment, _)| url.contains(fragment))
            .map(|(_, payload)| payload.clone())
            .ok_or_else(|| WeatherFlowError::StationNotFound {
                url: url.to_string(),
            })
    }
}

#[async_trait]
impl WeatherFlowApi for FakeApi {
    async fn request(&self, url: &str) -> Result<Value, WeatherFlowError> {
        self.respond(url)
    }
}

impl BlockingWeatherFlowApi for FakeApi {
    fn request(&self, url: &str) -> Result<Value, WeatherFlowError> {
        self.respond(url)
    }
}
