//! Aligns upstream timestamps to the caller's time zone without moving them
//! to a different calendar day.
//!
//! WeatherFlow indexes forecast days by the station's local calendar. Plainly
//! converting `day_start_local` to another zone can land on the previous or
//! next date near midnight, which would mislabel "day N" of the forecast. The
//! aligned value keeps the station's date and takes the time of day (and
//! offset) from the caller's zone.

use crate::error::WeatherFlowError;
use chrono::{DateTime, Duration, FixedOffset, Local, TimeZone, Utc};
use chrono_tz::Tz;

/// Parses an IANA time zone name. Unknown names are an error, never a default.
pub fn parse_timezone(name: &str) -> Result<Tz, WeatherFlowError> {
    name.parse::<Tz>()
        .map_err(|_| WeatherFlowError::UnknownTimeZone(name.to_string()))
}

/// Aligns `epoch_seconds` to the process-local time zone.
///
/// Returns the aligned datetime together with its epoch seconds.
///
/// # Errors
///
/// Returns [`WeatherFlowError::UnknownTimeZone`] if `source_tz` is not a valid
/// IANA name and [`WeatherFlowError::TimestampOutOfRange`] for epochs chrono
/// cannot represent.
pub fn align(
    epoch_seconds: i64,
    source_tz: &str,
) -> Result<(DateTime<FixedOffset>, i64), WeatherFlowError> {
    let aligned = align_in(epoch_seconds, source_tz, &Local)?;
    Ok((aligned, aligned.timestamp()))
}

/// Aligns `epoch_seconds` to an explicit `local` zone.
///
/// The result has the calendar date the instant has in `source_tz`, and the
/// time of day and UTC offset the instant has in `local`. A local wall time
/// that falls into a DST gap is moved forward one hour; an ambiguous one takes
/// the earlier offset.
///
/// # Examples
///
/// ```rust
/// use chrono::{Datelike, Timelike};
/// use chrono_tz::America::New_York;
/// use weatherflow_forecast::align_in;
///
/// // 2024-03-10 00:30 in Copenhagen is still 2024-03-09 18:30 in New York.
/// let aligned = align_in(1_710_027_000, "Europe/Copenhagen", &New_York).unwrap();
/// assert_eq!((aligned.year(), aligned.month(), aligned.day()), (2024, 3, 10));
/// assert_eq!((aligned.hour(), aligned.minute()), (18, 30));
/// ```
pub fn align_in<L: TimeZone>(
    epoch_seconds: i64,
    source_tz: &str,
    local: &L,
) -> Result<DateTime<FixedOffset>, WeatherFlowError> {
    let source = parse_timezone(source_tz)?;
    let instant = DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .ok_or(WeatherFlowError::TimestampOutOfRange(epoch_seconds))?;

    let source_date = instant.with_timezone(&source).date_naive();
    let converted = instant.with_timezone(local);
    let wall = source_date.and_time(converted.time());

    let aligned = local
        .from_local_datetime(&wall)
        .earliest()
        .or_else(|| local.from_local_datetime(&(wall + Duration::hours(1))).earliest())
        .unwrap_or(converted);

    Ok(aligned.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};
    use chrono_tz::America::{Los_Angeles, New_York};
    use chrono_tz::Asia::Tokyo;
    use chrono_tz::Europe::Copenhagen;

    fn epoch<T: TimeZone>(tz: &T, y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        tz.with_ymd_and_hms(y, m, d, h, min, 0).unwrap().timestamp()
    }

    #[test]
    fn test_source_date_wins_when_local_is_behind() {
        // Copenhagen is already on the 10th, New York still on the 9th.
        let ts = epoch(&Copenhagen, 2024, 3, 10, 0, 30);
        assert_eq!(
            DateTime::<Utc>::from_timestamp(ts, 0)
                .unwrap()
                .with_timezone(&New_York)
                .date_naive(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );

        let aligned = align_in(ts, "Europe/Copenhagen", &New_York).unwrap();
        assert_eq!(aligned.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!((aligned.hour(), aligned.minute()), (18, 30));
    }

    #[test]
    fn test_source_date_wins_when_local_is_ahead() {
        // 23:00 in Los Angeles on the 9th is already the 10th in Tokyo.
        let ts = epoch(&Los_Angeles, 2024, 3, 9, 23, 0);
        let aligned = align_in(ts, "America/Los_Angeles", &Tokyo).unwrap();
        assert_eq!(aligned.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(aligned.hour(), 16);
        assert_eq!(aligned.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_same_zone_is_identity() {
        let ts = epoch(&Copenhagen, 2024, 6, 1, 0, 0);
        let aligned = align_in(ts, "Europe/Copenhagen", &Copenhagen).unwrap();
        assert_eq!(aligned.timestamp(), ts);
    }

    #[test]
    fn test_dst_gap_moves_forward() {
        // 02:30 on 2024-03-11 in New York is still the 10th in Pago Pago, and
        // 02:30 on the 10th does not exist in New York.
        let ts = epoch(&New_York, 2024, 3, 11, 2, 30);
        let aligned = align_in(ts, "Pacific/Pago_Pago", &New_York).unwrap();
        assert_eq!(aligned.date_naive().day(), 10);
        assert_eq!((aligned.hour(), aligned.minute()), (3, 30));
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let err = align_in(0, "Mars/Olympus_Mons", &Utc).unwrap_err();
        assert!(matches!(err, WeatherFlowError::UnknownTimeZone(ref name) if name == "Mars/Olympus_Mons"));
        assert!(align(0, "").is_err());
    }

    #[test]
    fn test_align_returns_matching_epoch() {
        let (aligned, local_epoch) = align(1_700_000_000, "UTC").unwrap();
        assert_eq!(aligned.timestamp(), local_epoch);
    }
}
