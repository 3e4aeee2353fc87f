//! Station metadata and the resolved station/device pair the facade hands
//! back to callers.

use crate::types::device::DeviceData;
use serde::{Deserialize, Serialize};

/// Device type code WeatherFlow uses for Tempest sensors.
pub const TEMPEST_DEVICE_TYPE: &str = "ST";

/// Metadata for a single WeatherFlow station, taken from the `stations` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationData {
    /// The station identifier that was looked up.
    pub station_id: u64,
    /// Display name of the station.
    pub name: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// IANA time zone of the station (e.g. "Europe/Copenhagen").
    pub timezone: Option<String>,
    /// Elevation in meters as registered for the station, if reported.
    pub elevation: Option<f64>,
    /// Identifier of the attached Tempest device. `None` if the station has no compatible device.
    pub device_id: Option<u64>,
    /// Firmware revision of the Tempest device.
    pub firmware_revision: Option<String>,
    /// Serial number of the Tempest device.
    pub serial_number: Option<String>,
}

impl StationData {
    /// Whether a Tempest device is attached to the station.
    pub fn has_device(&self) -> bool {
        self.device_id.is_some()
    }
}

/// The outcome of resolving a station to its Tempest device.
///
/// Returned by [`crate::WeatherFlow::resolve_station`] and by every sensor
/// fetch. Pass it back into later sensor fetches to skip the station and
/// device lookups; when to refresh it is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStation {
    pub station: StationData,
    /// Last known device reading. Readings are all `None` when the station has no device.
    pub device: DeviceData,
}

impl ResolvedStation {
    pub fn has_device(&self) -> bool {
        self.station.has_device()
    }

    pub fn device_id(&self) -> Option<u64> {
        self.station.device_id
    }

    pub fn station_name(&self) -> Option<&str> {
        self.station.name.as_deref()
    }
}
