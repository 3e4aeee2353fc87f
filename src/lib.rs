pub mod blocking;
mod config;
mod endpoint;
mod error;
mod mappers;
mod time_alignment;
mod transport;
mod types;
mod weatherflow;

pub use config::*;
pub use endpoint::*;
pub use error::WeatherFlowError;
pub use weatherflow::WeatherFlow;

pub use transport::http::{BlockingHttpApi, HttpApi};
pub use transport::{BlockingWeatherFlowApi, WeatherFlowApi};

pub use types::device::*;
pub use types::forecast::*;
pub use types::icon::*;
pub use types::sensor::*;
pub use types::station::*;

pub use mappers::aggregate::*;
pub use mappers::forecast::*;
pub use mappers::sensor::*;
pub use mappers::station::*;

pub use time_alignment::{align, align_in, parse_timezone};
