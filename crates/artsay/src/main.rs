#![forbid(unsafe_code)]

//! Binary entry point: parse flags, set up logging, run.

use clap::Parser;
use tracing::Level;

use artsay::app;
use artsay::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    app::run(&cli)
}
