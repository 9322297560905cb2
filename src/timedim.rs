//! Time dimension helpers
//!
//! Rust-side mirror of the conversion the warehouse performs when the time
//! dimension is populated: epoch-millisecond event timestamps become
//! absolute timestamps (epoch + ts/1000 seconds, millisecond fraction
//! preserved) and are broken down into the calendar fields of the `time`
//! table. EXTRACT semantics: `week` is the ISO week number, `weekday` runs
//! 0 (Sunday) through 6 (Saturday).

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Convert an epoch-millisecond event timestamp to an absolute timestamp.
///
/// Returns `None` only for values outside the representable date range.
pub fn start_time_from_epoch_ms(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
}

/// One row of the `time` dimension
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarBreakdown {
    pub start_time: DateTime<Utc>,
    pub hour: u32,
    pub day: u32,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
}

impl CalendarBreakdown {
    /// Break a timestamp down into the time dimension's calendar fields
    pub fn from_datetime(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            hour: start_time.hour(),
            day: start_time.day(),
            week: start_time.iso_week().week(),
            month: start_time.month(),
            year: start_time.year(),
            weekday: start_time.weekday().num_days_from_sunday(),
        }
    }

    /// Break an epoch-millisecond event timestamp down directly
    pub fn from_epoch_ms(ms: i64) -> Option<Self> {
        start_time_from_epoch_ms(ms).map(Self::from_datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_epoch_ms_round_trip() {
        // 2018-11-01T21:37:10.796Z, a real event timestamp from the logs.
        let start_time = start_time_from_epoch_ms(1_541_105_830_796).unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 11, 1)
            .unwrap()
            .and_hms_milli_opt(21, 37, 10, 796)
            .unwrap()
            .and_utc();
        assert_eq!(start_time, expected);
    }

    #[test]
    fn test_calendar_breakdown() {
        let breakdown = CalendarBreakdown::from_epoch_ms(1_541_105_830_796).unwrap();
        assert_eq!(breakdown.hour, 21);
        assert_eq!(breakdown.day, 1);
        assert_eq!(breakdown.week, 44);
        assert_eq!(breakdown.month, 11);
        assert_eq!(breakdown.year, 2018);
        // 2018-11-01 was a Thursday.
        assert_eq!(breakdown.weekday, 4);
    }

    #[test]
    fn test_epoch_is_representable() {
        let breakdown = CalendarBreakdown::from_epoch_ms(0).unwrap();
        assert_eq!(breakdown.year, 1970);
        assert_eq!(breakdown.month, 1);
        assert_eq!(breakdown.day, 1);
        // 1970-01-01 was a Thursday.
        assert_eq!(breakdown.weekday, 4);
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert!(start_time_from_epoch_ms(i64::MAX).is_none());
    }
}
