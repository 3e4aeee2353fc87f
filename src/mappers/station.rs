//! Maps the `stations` and `observations/device` responses.

use crate::error::WeatherFlowError;
use crate::mappers::lookup::{array, opt_f64, opt_string, opt_u64};
use crate::types::device::{DeviceData, TempestObservation};
use crate::types::station::{StationData, TEMPEST_DEVICE_TYPE};
use log::debug;
use serde_json::Value;

/// Maps the first station of a `stations` response.
///
/// The Tempest device (type `"ST"`) is looked up among the station's devices;
/// if several are listed the last one wins. Without one, `device_id`,
/// `firmware_revision` and `serial_number` are `None`.
///
/// # Errors
///
/// Returns [`WeatherFlowError::NoStations`] if the `stations` array is empty
/// or absent. WeatherFlow answers that way when a device ID is passed where a
/// station ID is expected.
pub fn map_station(payload: &Value, station_id: u64) -> Result<StationData, WeatherFlowError> {
    let item = array(payload, "stations")
        .first()
        .ok_or(WeatherFlowError::NoStations { station_id })?;

    let device = array(item, "devices")
        .iter()
        .rev()
        .find(|device| device.get("device_type").and_then(Value::as_str) == Some(TEMPEST_DEVICE_TYPE));

    let station_meta = item.get("station_meta").unwrap_or(&Value::Null);

    Ok(StationData {
        station_id: opt_u64(item, "station_id").unwrap_or(station_id),
        name: opt_string(item, "name"),
        latitude: opt_f64(item, "latitude"),
        longitude: opt_f64(item, "longitude"),
        timezone: opt_string(item, "timezone"),
        elevation: opt_f64(station_meta, "elevation"),
        device_id: device.and_then(|d| opt_u64(d, "device_id")),
        firmware_revision: device.and_then(|d| opt_string(d, "firmware_revision")),
        serial_number: device.and_then(|d| opt_string(d, "serial_number")),
    })
}

/// Maps an `observations/device` response.
///
/// `payload` is `None` when no lookup was made because the station has no
/// compatible device; like a response without observations this yields a
/// record with `device_id` set and no readings.
///
/// # Errors
///
/// Returns [`WeatherFlowError::ObservationTooShort`] if the latest observation
/// row has fewer fields than the Tempest schema documents.
pub fn map_device(
    payload: Option<&Value>,
    device_id: Option<u64>,
) -> Result<DeviceData, WeatherFlowError> {
    let Some(row) = payload.and_then(|p| array(p, "obs").first()) else {
        debug!("No device observation for device {:?}", device_id);
        return Ok(DeviceData::without_readings(device_id));
    };

    let row = row.as_array().map(Vec::as_slice).unwrap_or(&[]);
    let observation = TempestObservation::from_row(row, device_id)?;

    Ok(DeviceData {
        device_id,
        voltage: observation.battery,
        precipitation_type: observation.precipitation_type,
    })
}
