//! passmigrate - Convert a pass password store into an import CSV.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use passmigrate::cli::{execute, output, suggestion, Cli};
use passmigrate::core::constants::LOG_ENV;

fn main() {
    let _cli = Cli::parse();

    // stdout carries the CSV, so logs go to stderr
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("passmigrate=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute() {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
