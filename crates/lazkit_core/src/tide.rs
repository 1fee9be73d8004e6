//! Tide predictions and the sampling cadence they drive.
//!
//! The deployment samples the shoreline more often around high tide. NOAA
//! CO-OPS hi/lo predictions come in as JSON rows with station-local times;
//! the logic here finds the high tide nearest to "now", rounds it to the
//! hour, and switches the logger cadence when now falls inside the window
//! around it.
//!
//! Everything takes the clock as an explicit argument, so it is all
//! unit-testable; the HTTP fetch lives in the binary.

use chrono::{Duration, NaiveDateTime, Timelike};
use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// Station id of the tide gauge nearest the deployment.
pub const DEFAULT_STATION: &str = "9410230";

/// Baseline sampling time in seconds (5 minutes).
pub const DEFAULT_SAMPLING_SECS: u32 = 300;

/// Sampling time inside a high-tide window (25 minutes).
pub const HIGH_TIDE_SAMPLING_SECS: u32 = 25 * 60;

/// Hours before a rounded high tide that the window opens.
const WINDOW_HOURS_BEFORE: i64 = 2;

/// Hours after a rounded high tide that the window closes.
const WINDOW_HOURS_AFTER: i64 = 3;

/// Envelope of the CO-OPS predictions endpoint.
#[derive(Debug, Deserialize)]
pub struct PredictionsResponse {
    /// Hi/lo prediction rows; absent on error responses.
    #[serde(default)]
    pub predictions: Vec<TidePrediction>,
}

/// One hi/lo tide prediction row.
#[derive(Debug, Clone, Deserialize)]
pub struct TidePrediction {
    /// Station-local time, `YYYY-MM-DD HH:MM`.
    pub t: String,
    /// Predicted water level.
    pub v: String,
    /// `"H"` for high tide, `"L"` for low.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TidePrediction {
    /// True for high-tide rows.
    pub fn is_high(&self) -> bool {
        self.kind == "H"
    }
}

/// A prediction row carried a time the station format doesn't allow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TideError {
    /// Timestamp did not match `YYYY-MM-DD HH:MM`.
    #[error("invalid prediction time '{0}'")]
    InvalidTime(String),
}

/// Parse a CO-OPS prediction timestamp (`YYYY-MM-DD HH:MM`, station-local).
pub fn parse_prediction_time(t: &str) -> Result<NaiveDateTime, TideError> {
    NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M")
        .map_err(|_| TideError::InvalidTime(t.to_string()))
}

/// Find the high tides closest to `now` on either side.
///
/// Returns `(closest_past, closest_future)`. A prediction at exactly `now`
/// counts as past. Rows with malformed times are logged and ignored rather
/// than sinking the whole batch.
pub fn closest_high_tides(
    predictions: &[TidePrediction],
    now: NaiveDateTime,
) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    let mut past: Option<NaiveDateTime> = None;
    let mut future: Option<NaiveDateTime> = None;

    for prediction in predictions {
        if !prediction.is_high() {
            continue;
        }
        let time = match parse_prediction_time(&prediction.t) {
            Ok(time) => time,
            Err(e) => {
                warn!("skipping tide prediction: {e}");
                continue;
            }
        };
        if time <= now {
            if past.is_none_or(|current| time > current) {
                past = Some(time);
            }
        } else if future.is_none_or(|current| time < current) {
            future = Some(time);
        }
    }

    (past, future)
}

/// Pick whichever of the two surrounding high tides is closer to `now`.
///
/// The past tide wins a tie.
pub fn nearest_high_tide(
    past: Option<NaiveDateTime>,
    future: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    match (past, future) {
        (Some(p), Some(f)) => {
            if now - p <= f - now {
                Some(p)
            } else {
                Some(f)
            }
        }
        (Some(p), None) => Some(p),
        (None, Some(f)) => Some(f),
        (None, None) => None,
    }
}

/// Round to the nearest hour: minute 30 and up rounds forward, below rounds
/// back. Minutes and seconds are zeroed.
pub fn round_to_nearest_hour(dt: NaiveDateTime) -> NaiveDateTime {
    let rounded = if dt.minute() >= 30 {
        dt + Duration::hours(1)
    } else {
        dt
    };
    rounded
        .with_minute(0)
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(rounded)
}

/// Sampling time in seconds for a run starting at `now`.
///
/// Inside the window from two hours before to three hours after the rounded
/// nearest high tide (inclusive on both ends) the cadence tightens to
/// [`HIGH_TIDE_SAMPLING_SECS`]; otherwise, and whenever no tide data is
/// available, it stays at `default_secs`.
pub fn sampling_seconds(
    now: NaiveDateTime,
    nearest_high: Option<NaiveDateTime>,
    default_secs: u32,
) -> u32 {
    let Some(high) = nearest_high else {
        return default_secs;
    };
    let anchor = round_to_nearest_hour(high);
    let open = anchor - Duration::hours(WINDOW_HOURS_BEFORE);
    let close = anchor + Duration::hours(WINDOW_HOURS_AFTER);
    if open <= now && now <= close {
        HIGH_TIDE_SAMPLING_SECS
    } else {
        default_secs
    }
}
