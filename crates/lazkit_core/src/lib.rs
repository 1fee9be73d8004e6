//! # `lazkit_core`
//!
//! This is the `lazkit_core` library!
//! It contains the shared logic behind the `lazkit` deployment tools for a
//! shore-mounted Livox lidar logger.
//!
//! Two concerns live here:
//! 1. Capture file naming — parsing UTC-stamped `.laz` filenames and
//!    rewriting them as epoch-stamped names.
//! 2. Sampling cadence — picking how often the logger should run from
//!    NOAA tide predictions.
//!
//! All decision logic is pure and takes its inputs (directory, clock,
//! predictions) explicitly; the `lazkit` binary owns the process-level
//! plumbing.

#![warn(missing_docs)]

/// Capture filename tokens and epoch conversion.
pub mod capture;

/// Launcher configuration.
pub mod config;

/// Batch renaming of UTC-stamped captures.
pub mod rename;

/// Tide predictions and the sampling cadence they drive.
pub mod tide;
