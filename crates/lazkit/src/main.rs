#![doc = include_str!("../README.md")]

/// CLI module - command-line interface for lazkit
mod cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run_cli();
}
