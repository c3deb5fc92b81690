//! actkit CLI entry point.

use std::process::ExitCode;

use actkit::cli::{Cli, CommandDispatcher};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("actkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("actkit=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("actkit starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
