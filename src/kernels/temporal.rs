//! This module contains the logical-type normalizers: pure conversions from
//! calendar values (dates, instants) to the integer representations the
//! fixed-width kernels write.
//!
//! The conversions here are bit-format contracts pinned against files
//! produced by the historical writer, not algorithms to re-derive. In
//! particular, see the day-count offset on [`date_to_encoded_days`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::LaminaError;

//==================================================================================
// 1. Constants
//==================================================================================

/// Days from 0001-01-01 (Common Era day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Julian day number of 1970-01-01.
pub const UNIX_EPOCH_JULIAN_DAY: i64 = 2_440_588;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

//==================================================================================
// 2. Public API
//==================================================================================

/// Converts a calendar date to the day count a DATE-annotated INT32 column
/// stores.
///
/// The result is the signed number of days since 1970-01-01 **plus one**:
/// 1970-01-01 encodes as 1, not 0. The off-by-one does not match plain
/// epoch-day numbering, but it is what the historical writer emitted and is
/// preserved here for byte compatibility with existing files. Do not
/// normalize it without re-verifying against a reference decoder.
pub fn date_to_encoded_days(date: NaiveDate) -> Result<i32, LaminaError> {
    let days_since_epoch = i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
    let encoded = days_since_epoch + 1;
    i32::try_from(encoded).map_err(|_| {
        LaminaError::TemporalOutOfRange(format!(
            "date {date} encodes to day count {encoded}, which does not fit in 32 bits"
        ))
    })
}

/// Converts an instant to signed milliseconds since the epoch, negative for
/// pre-epoch instants. This is what a TIMESTAMP_MILLIS-annotated INT64
/// column stores.
pub fn timestamp_to_millis(ts: NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_millis()
}

/// Decomposes an instant into the legacy wide-timestamp pair: the Julian day
/// number and the nanoseconds elapsed since that day's midnight.
pub fn timestamp_to_julian(ts: NaiveDateTime) -> Result<(i32, i64), LaminaError> {
    let days_since_epoch = i64::from(ts.date().num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
    let julian = days_since_epoch + UNIX_EPOCH_JULIAN_DAY;
    let julian_day = i32::try_from(julian).map_err(|_| {
        LaminaError::TemporalOutOfRange(format!(
            "timestamp {ts} has Julian day {julian}, which does not fit in 32 bits"
        ))
    })?;

    let time = ts.time();
    let nanos_of_day =
        i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(time.nanosecond());
    Ok((julian_day, nanos_of_day))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_encodes_as_one() {
        // The preserved historical off-by-one: 1970-01-01 is day 1, not 0.
        assert_eq!(date_to_encoded_days(date(1970, 1, 1)).unwrap(), 1);
        assert_eq!(date_to_encoded_days(date(1970, 1, 2)).unwrap(), 2);
    }

    #[test]
    fn test_pre_epoch_dates_follow_the_same_offset() {
        assert_eq!(date_to_encoded_days(date(1969, 12, 31)).unwrap(), 0);
        assert_eq!(date_to_encoded_days(date(1969, 12, 30)).unwrap(), -1);
    }

    #[test]
    fn test_known_modern_date() {
        // 2004-02-29 is 12_477 days after the epoch.
        assert_eq!(date_to_encoded_days(date(2004, 2, 29)).unwrap(), 12_478);
    }

    #[test]
    fn test_millis_signed_around_the_epoch() {
        let epoch = date(1970, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(timestamp_to_millis(epoch), 0);

        let after = date(1970, 1, 1).and_hms_milli_opt(0, 0, 1, 500).unwrap();
        assert_eq!(timestamp_to_millis(after), 1_500);

        let before = date(1969, 12, 31).and_hms_milli_opt(23, 59, 59, 750).unwrap();
        assert_eq!(timestamp_to_millis(before), -250);
    }

    #[test]
    fn test_julian_decomposition_at_the_epoch() {
        let epoch = date(1970, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let (julian_day, nanos) = timestamp_to_julian(epoch).unwrap();
        assert_eq!(i64::from(julian_day), UNIX_EPOCH_JULIAN_DAY);
        assert_eq!(nanos, 0);
    }

    #[test]
    fn test_julian_decomposition_nanos_of_day() {
        let noon = date(1970, 1, 2).and_hms_nano_opt(12, 0, 0, 7).unwrap();
        let (julian_day, nanos) = timestamp_to_julian(noon).unwrap();
        assert_eq!(i64::from(julian_day), UNIX_EPOCH_JULIAN_DAY + 1);
        assert_eq!(nanos, 12 * 3600 * 1_000_000_000 + 7);
    }
}
