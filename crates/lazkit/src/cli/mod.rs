//! Command-line interface for lazkit.

mod args;
mod launch;
mod rename;

use clap::Parser;

use args::{Cli, Commands};

/// Parse arguments, dispatch to the command handler, and exit non-zero if
/// the handler reports failure.
pub fn run_cli() {
    let cli = Cli::parse();

    let ok = match cli.command {
        Commands::Rename { dir } => rename::handle_rename(&dir),
        Commands::Launch { config, station } => {
            launch::handle_launch(&config, station.as_deref())
        }
    };

    if !ok {
        std::process::exit(1);
    }
}
