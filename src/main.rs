//! Civic UI command-line tool.
//!
//! Manages the saved theme preference and prints style tables, component
//! classes and rendered markup.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use civic_ui::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}
