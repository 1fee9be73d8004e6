//! Clap argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lazkit_core::config::DEFAULT_CONFIG_FILE;

/// Deployment tools for a shore-mounted Livox lidar logger.
#[derive(Parser)]
#[command(name = "lazkit", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename UTC-stamped capture files to epoch-stamped names
    Rename {
        /// Directory holding the capture files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Pick a sampling cadence from tide predictions and start the logger
    Launch {
        /// Launcher configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Override the configured tide station
        #[arg(long, env = "LAZKIT_STATION")]
        station: Option<String>,
    },
}
