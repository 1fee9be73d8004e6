//! CLI handler for `lazkit launch`.
//!
//! Responsible for the process-level plumbing — config file, NOAA fetch,
//! spawning the logger. The cadence decisions stay pure in
//! `lazkit_core::tide`.

use std::path::Path;
use std::process::Command;

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use lazkit_core::config::Config;
use lazkit_core::tide::{self, HIGH_TIDE_SAMPLING_SECS, TidePrediction};
use log::{debug, info};

const COOPS_URL: &str = "https://api.tidesandcurrents.noaa.gov/api/prod/datagetter";

/// Choose a sampling cadence from tide predictions and start the logger.
///
/// Config or API failures degrade to the baseline cadence rather than
/// aborting; the deployment would rather log at 5-minute sampling than not
/// at all. Returns false only when the logger itself fails to run.
pub fn handle_launch(config_path: &Path, station_override: Option<&str>) -> bool {
    let config = match Config::load(config_path) {
        Ok(config) => {
            info!("loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            Config::default()
        }
    };
    let station = station_override.unwrap_or(&config.station);

    let now = Local::now().naive_local();
    let samp_secs = match fetch_predictions(station, now) {
        Ok(predictions) => {
            let (past, future) = tide::closest_high_tides(&predictions, now);
            info!("closest past high tide: {past:?}");
            info!("closest future high tide: {future:?}");
            let nearest = tide::nearest_high_tide(past, future, now);
            tide::sampling_seconds(now, nearest, config.sampling.seconds)
        }
        Err(e) => {
            eprintln!("Error fetching tide data: {e}");
            eprintln!("Falling back to default sampling time");
            config.sampling.seconds
        }
    };
    println!("Sampling time set to: {samp_secs} seconds");

    // Half-hour slots belong to the tightened high-tide cadence; a baseline
    // run already covered this hour at :00.
    if now.minute() == 30 && samp_secs != HIGH_TIDE_SAMPLING_SECS {
        println!("Running on :30 outside a high-tide window, skipping launch");
        return true;
    }

    run_logger(&config, samp_secs)
}

/// CO-OPS `begin_date` parameter: yesterday, so the 48-hour range brackets
/// the present.
fn begin_date(now: NaiveDateTime) -> String {
    (now - Duration::days(1)).format("%Y%m%d").to_string()
}

/// Fetch 48 hours of hi/lo predictions for `station`.
fn fetch_predictions(
    station: &str,
    now: NaiveDateTime,
) -> Result<Vec<TidePrediction>, ureq::Error> {
    let begin = begin_date(now);
    debug!("requesting predictions for station {station} from {begin}");

    let mut response = ureq::get(COOPS_URL)
        .query("product", "predictions")
        .query("datum", "stnd")
        .query("interval", "hilo")
        .query("format", "json")
        .query("units", "metric")
        .query("time_zone", "lst_ldt")
        .query("station", station)
        .query("begin_date", &begin)
        .query("range", "48")
        .call()?;

    let decoded: tide::PredictionsResponse = response.body_mut().read_json()?;
    Ok(decoded.predictions)
}

/// Spawn the logger with the config file matching the chosen cadence.
fn run_logger(config: &Config, samp_secs: u32) -> bool {
    let conf_file = config.logger.conf_dir.join(format!("config-{samp_secs}.yaml"));

    let status = Command::new(&config.logger.bin).arg(&conf_file).status();
    match status {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!(
                "Error: logger exited with code {}",
                status.code().unwrap_or(-1)
            );
            false
        }
        Err(e) => {
            eprintln!(
                "Error: failed to start {}: {e}",
                config.logger.bin.display()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_date_is_yesterday_compact() {
        let now = NaiveDateTime::parse_from_str("2024-03-01 00:15", "%Y-%m-%d %H:%M").unwrap();
        assert_eq!(begin_date(now), "20240229");
    }
}
