//! Capture filename tokens and their epoch conversion.
//!
//! The logger writes captures as `do-lidar_<YYYYMMDD>_<HHMMSS>_UTC.laz`.
//! Downstream processing wants the wall-clock stamp collapsed into Unix
//! epoch seconds: `do-lidar_<epoch>.laz`. Parsing and conversion are two
//! separate steps on purpose: a name that doesn't have the right shape is
//! simply not a capture, while a shaped name with an impossible date
//! (February 30th) is a real error worth reporting.

use chrono::NaiveDate;
use thiserror::Error;

/// Fixed prefix shared by raw and epoch-stamped capture names.
pub const CAPTURE_PREFIX: &str = "do-lidar_";

/// Fixed suffix of a UTC-stamped capture name.
pub const UTC_SUFFIX: &str = "_UTC.laz";

/// Extension shared by raw and epoch-stamped capture names.
pub const CAPTURE_EXT: &str = ".laz";

/// The six wall-clock fields encoded in a UTC-stamped capture filename.
///
/// Exists only transiently while one directory entry is being processed.
/// The fields are shape-checked (digit counts) but not yet calendar-checked;
/// that happens in [`CaptureName::to_epoch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureName {
    /// Four-digit year.
    pub year: i32,
    /// Two-digit month (not yet validated).
    pub month: u32,
    /// Two-digit day (not yet validated).
    pub day: u32,
    /// Two-digit hour (not yet validated).
    pub hour: u32,
    /// Two-digit minute (not yet validated).
    pub minute: u32,
    /// Two-digit second (not yet validated).
    pub second: u32,
}

/// A shaped capture name whose fields don't form a real UTC instant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StampError {
    /// The date digits don't name a calendar day.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        /// Year field as parsed.
        year: i32,
        /// Month field as parsed.
        month: u32,
        /// Day field as parsed.
        day: u32,
    },
    /// The time digits don't name a time of day.
    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time of day")]
    InvalidTime {
        /// Hour field as parsed.
        hour: u32,
        /// Minute field as parsed.
        minute: u32,
        /// Second field as parsed.
        second: u32,
    },
}

impl CaptureName {
    /// Parse a filename of the shape `do-lidar_YYYYMMDD_HHMMSS_UTC.laz`.
    ///
    /// Returns `None` for anything else: wrong prefix or suffix, wrong digit
    /// counts, non-digit characters. Never panics.
    pub fn parse(name: &str) -> Option<Self> {
        let stamp = name
            .strip_prefix(CAPTURE_PREFIX)?
            .strip_suffix(UTC_SUFFIX)?;
        let (date, time) = stamp.split_once('_')?;
        if date.len() != 8 || time.len() != 6 {
            return None;
        }
        if !date.bytes().all(|b| b.is_ascii_digit())
            || !time.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        Some(CaptureName {
            year: date[0..4].parse().ok()?,
            month: date[4..6].parse().ok()?,
            day: date[6..8].parse().ok()?,
            hour: time[0..2].parse().ok()?,
            minute: time[2..4].parse().ok()?,
            second: time[4..6].parse().ok()?,
        })
    }

    /// Interpret the fields as a UTC wall-clock instant and return Unix
    /// epoch seconds.
    ///
    /// Negative for instants before 1970-01-01T00:00:00Z. Leap years and
    /// month lengths are chrono's problem, not an ad hoc formula.
    pub fn to_epoch(&self) -> Result<i64, StampError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            StampError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )?;
        let datetime = date
            .and_hms_opt(self.hour, self.minute, self.second)
            .ok_or(StampError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            })?;
        Ok(datetime.and_utc().timestamp())
    }
}

/// Destination name for a capture: `do-lidar_<epoch>.laz`.
///
/// Plain decimal, negatives included (`do-lidar_-1.laz` for one second
/// before the epoch).
pub fn epoch_filename(epoch: i64) -> String {
    format!("{CAPTURE_PREFIX}{epoch}{CAPTURE_EXT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Datelike, Timelike};

    // ── parse ────────────────────────────────────────────────────────────

    #[test]
    fn parse_valid_name() {
        let stamp = CaptureName::parse("do-lidar_20230615_143000_UTC.laz").unwrap();
        assert_eq!(
            stamp,
            CaptureName {
                year: 2023,
                month: 6,
                day: 15,
                hour: 14,
                minute: 30,
                second: 0,
            }
        );
    }

    #[test]
    fn parse_rejects_other_names() {
        for name in [
            "readme.txt",
            "do-lidar_1686839400.laz",
            "do-lidar_20230615_143000_UTC.las",
            "do-lidar_20230615_143000.laz",
            "lidar_20230615_143000_UTC.laz",
            "do-lidar_2023615_143000_UTC.laz",
            "do-lidar_20230615_14300_UTC.laz",
            "do-lidar_20230615_1430000_UTC.laz",
            "do-lidar_2023o615_143000_UTC.laz",
            "do-lidar_20230615-143000_UTC.laz",
            "do-lidar_20230615_143000_UTC.laz.bak",
            "",
        ] {
            assert!(CaptureName::parse(name).is_none(), "accepted {name:?}");
        }
    }

    #[test]
    fn parse_accepts_impossible_calendar_fields() {
        // Shape is fine; the calendar check is to_epoch's job.
        let stamp = CaptureName::parse("do-lidar_20230230_120000_UTC.laz").unwrap();
        assert_eq!(stamp.month, 2);
        assert_eq!(stamp.day, 30);
    }

    // ── to_epoch ─────────────────────────────────────────────────────────

    #[test]
    fn epoch_of_known_instant() {
        let stamp = CaptureName::parse("do-lidar_20230615_143000_UTC.laz").unwrap();
        assert_eq!(stamp.to_epoch().unwrap(), 1_686_839_400);
    }

    #[test]
    fn epoch_one_second_before_1970_is_negative() {
        let stamp = CaptureName::parse("do-lidar_19691231_235959_UTC.laz").unwrap();
        assert_eq!(stamp.to_epoch().unwrap(), -1);
    }

    #[test]
    fn epoch_of_leap_day() {
        let stamp = CaptureName::parse("do-lidar_20240229_000000_UTC.laz").unwrap();
        assert_eq!(stamp.to_epoch().unwrap(), 1_709_164_800);
    }

    #[test]
    fn february_30th_is_invalid() {
        let stamp = CaptureName::parse("do-lidar_20230230_120000_UTC.laz").unwrap();
        assert_eq!(
            stamp.to_epoch(),
            Err(StampError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn hour_25_is_invalid() {
        let stamp = CaptureName::parse("do-lidar_20230615_250000_UTC.laz").unwrap();
        assert_eq!(
            stamp.to_epoch(),
            Err(StampError::InvalidTime {
                hour: 25,
                minute: 0,
                second: 0
            })
        );
    }

    #[test]
    fn epoch_round_trips_to_original_fields() {
        for name in [
            "do-lidar_19700101_000000_UTC.laz",
            "do-lidar_19691231_235959_UTC.laz",
            "do-lidar_20000229_120159_UTC.laz",
            "do-lidar_20230615_143000_UTC.laz",
            "do-lidar_20991231_235959_UTC.laz",
        ] {
            let stamp = CaptureName::parse(name).unwrap();
            let epoch = stamp.to_epoch().unwrap();
            let back = DateTime::from_timestamp(epoch, 0).unwrap();
            assert_eq!(back.year(), stamp.year, "{name}");
            assert_eq!(back.month(), stamp.month, "{name}");
            assert_eq!(back.day(), stamp.day, "{name}");
            assert_eq!(back.hour(), stamp.hour, "{name}");
            assert_eq!(back.minute(), stamp.minute, "{name}");
            assert_eq!(back.second(), stamp.second, "{name}");
        }
    }

    // ── epoch_filename ───────────────────────────────────────────────────

    #[test]
    fn epoch_filename_is_plain_decimal() {
        assert_eq!(epoch_filename(1_686_839_400), "do-lidar_1686839400.laz");
        assert_eq!(epoch_filename(-1), "do-lidar_-1.laz");
        assert_eq!(epoch_filename(0), "do-lidar_0.laz");
    }
}
