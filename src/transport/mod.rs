//! The HTTP seam of the client.
//!
//! The facades only ever need "GET this URL, give me the JSON". Both flavours
//! are traits so tests and embedders can supply their own implementation.

pub mod http;

use crate::endpoint::redact_token;
use crate::error::WeatherFlowError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

/// Non-blocking access to the WeatherFlow REST API.
#[async_trait]
pub trait WeatherFlowApi: Send + Sync {
    /// Performs a GET on `url` and decodes the JSON body.
    async fn request(&self, url: &str) -> Result<Value, WeatherFlowError>;
}

/// Blocking access to the WeatherFlow REST API.
pub trait BlockingWeatherFlowApi: Send + Sync {
    /// Performs a GET on `url` and decodes the JSON body.
    fn request(&self, url: &str) -> Result<Value, WeatherFlowError>;
}

/// Classifies a response status. Success statuses pass.
pub(crate) fn check_status(url: &str, status: StatusCode) -> Result<(), WeatherFlowError> {
    if status.is_success() {
        return Ok(());
    }
    let url = redact_token(url);
    Err(match status {
        StatusCode::BAD_REQUEST => WeatherFlowError::BadRequest { url },
        StatusCode::UNAUTHORIZED => WeatherFlowError::Unauthorized { url },
        StatusCode::NOT_FOUND => WeatherFlowError::StationNotFound { url },
        StatusCode::INTERNAL_SERVER_ERROR => WeatherFlowError::InternalServerError { url },
        status => WeatherFlowError::HttpStatus { url, status },
    })
}
