//! Per-day precipitation and wind figures.
//!
//! The daily forecast entries carry no precipitation amount or wind, so they
//! are derived from the hourly series grouped by `local_day`.

use crate::mappers::lookup::{opt_f64, opt_i64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-day values derived from the hourly forecast series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayAggregate {
    /// Total precipitation (mm).
    pub precipitation: f64,
    /// Arithmetic mean of the hourly wind bearings (degrees).
    pub wind_bearing: f64,
    /// Mean wind speed (m/s).
    pub wind_speed: f64,
    /// Highest hourly wind gust (m/s).
    pub wind_gust: f64,
}

/// Aggregates the hourly entries whose `local_day` equals `day_index`.
///
/// Missing hourly values count as zero. With no matching entries every field
/// is zero.
///
/// The bearing is a plain mean of the degree values, not a circular mean, so
/// hours at 350° and 10° average to 180°.
pub fn aggregate_day(day_index: i64, hourly_entries: &[Value]) -> DayAggregate {
    let mut count = 0usize;
    let mut aggregate = DayAggregate::default();

    for item in hourly_entries
        .iter()
        .filter(|item| opt_i64(item, "local_day") == Some(day_index))
    {
        count += 1;
        aggregate.precipitation += opt_f64(item, "precip").unwrap_or(0.0);
        aggregate.wind_bearing += opt_f64(item, "wind_direction").unwrap_or(0.0);
        aggregate.wind_speed += opt_f64(item, "wind_avg").unwrap_or(0.0);
        aggregate.wind_gust = aggregate
            .wind_gust
            .max(opt_f64(item, "wind_gust").unwrap_or(0.0));
    }

    if count > 0 {
        aggregate.wind_bearing /= count as f64;
        aggregate.wind_speed /= count as f64;
    }
    aggregate
}
