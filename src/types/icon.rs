//! Defines the `Icon` enum, mapping WeatherFlow's condition icon codes to the
//! small icon vocabulary used by home-automation frontends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical weather icon derived from a WeatherFlow condition code.
///
/// WeatherFlow reports conditions as codes such as `"partly-cloudy-night"`,
/// and for current conditions the same codes prefixed with `cc-`. Both forms
/// resolve to the same icon. Codes that are not part of the vendor's list map
/// to [`Icon::Unknown`].
///
/// Serialized with the lowercase names (`"partlycloudy"`, `"snowy-rainy"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "sunny")]
    Sunny,
    #[serde(rename = "clear-night")]
    ClearNight,
    #[serde(rename = "cloudy")]
    Cloudy,
    #[serde(rename = "fog")]
    Fog,
    #[serde(rename = "partlycloudy")]
    PartlyCloudy,
    #[serde(rename = "rainy")]
    Rainy,
    #[serde(rename = "snowy-rainy")]
    SnowyRainy,
    #[serde(rename = "snowy")]
    Snowy,
    #[serde(rename = "lightning-rainy")]
    LightningRainy,
    #[serde(rename = "lightning")]
    Lightning,
    #[serde(rename = "windy")]
    Windy,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Icon {
    /// Resolves a WeatherFlow condition code. Never fails.
    ///
    /// ```rust
    /// use weatherflow_forecast::Icon;
    ///
    /// assert_eq!(Icon::from_code("possibly-sleet-night"), Icon::SnowyRainy);
    /// assert_eq!(Icon::from_code("cc-possibly-sleet-night"), Icon::SnowyRainy);
    /// assert_eq!(Icon::from_code("volcanic-ash"), Icon::Unknown);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear-day" | "cc-clear-day" => Icon::Sunny,
            "clear-night" | "cc-clear-night" => Icon::ClearNight,
            "cloudy" | "cc-cloudy" => Icon::Cloudy,
            "foggy" | "cc-foggy" => Icon::Fog,
            "partly-cloudy-day"
            | "cc-partly-cloudy-day"
            | "partly-cloudy-night"
            | "cc-partly-cloudy-night" => Icon::PartlyCloudy,
            "possibly-rainy-day"
            | "cc-possibly-rainy-day"
            | "possibly-rainy-night"
            | "cc-possibly-rainy-night"
            | "rainy"
            | "cc-rainy" => Icon::Rainy,
            "possibly-sleet-day"
            | "cc-possibly-sleet-day"
            | "possibly-sleet-night"
            | "cc-possibly-sleet-night"
            | "sleet"
            | "cc-sleet" => Icon::SnowyRainy,
            "possibly-snow-day"
            | "cc-possibly-snow-day"
            | "possibly-snow-night"
            | "cc-possibly-snow-night"
            | "snow"
            | "cc-snow" => Icon::Snowy,
            "possibly-thunderstorm-day"
            | "cc-possibly-thunderstorm-day"
            | "possibly-thunderstorm-night"
            | "cc-possibly-thunderstorm-night" => Icon::LightningRainy,
            "thunderstorm" | "cc-thunderstorm" => Icon::Lightning,
            "windy" | "cc-windy" => Icon::Windy,
            _ => Icon::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Sunny => "sunny",
            Icon::ClearNight => "clear-night",
            Icon::Cloudy => "cloudy",
            Icon::Fog => "fog",
            Icon::PartlyCloudy => "partlycloudy",
            Icon::Rainy => "rainy",
            Icon::SnowyRainy => "snowy-rainy",
            Icon::Snowy => "snowy",
            Icon::LightningRainy => "lightning-rainy",
            Icon::Lightning => "lightning",
            Icon::Windy => "windy",
            Icon::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a WeatherFlow condition code to its icon name, `"unknown"` if unrecognized.
pub fn map_icon(code: &str) -> &'static str {
    Icon::from_code(code).as_str()
}
