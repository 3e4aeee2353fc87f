use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherFlowError {
    #[error("Bad request for {url}")]
    BadRequest { url: String },

    #[error("Unauthorized request for {url}, check the API token")]
    Unauthorized { url: String },

    #[error("Station not found for {url}")]
    StationNotFound { url: String },

    #[error("WeatherFlow reported an internal server error for {url}")]
    InternalServerError { url: String },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to decode JSON response from {0}")]
    JsonDecode(String, #[source] reqwest::Error),

    // Station lookup succeeded but returned nothing, usually a device ID passed as station ID
    #[error("No stations found for station ID {station_id}, make sure a station ID and not a device ID was supplied")]
    NoStations { station_id: u64 },

    #[error("Invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("Forecast response has daily entries but no time zone")]
    MissingTimeZone,

    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("Observation row for device {device_id:?} has {found} fields, schema v{schema_version} expects at least {expected}")]
    ObservationTooShort {
        device_id: Option<u64>,
        schema_version: u8,
        expected: usize,
        found: usize,
    },
}
