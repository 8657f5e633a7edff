//! retitle - rename audio files to "Title - Artist.ext" from their tags.
//!
//! Usage:
//!   retitle           Work in the current directory
//!   retitle <path>    Work in <path>
//!
//! Diagnostics go to stderr, filtered by `RETITLE_LOG` (default `warn`).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod library;
mod naming;
mod prompt;
mod rename;
mod runtime;
mod ui;

fn main() -> ExitCode {
    init_logging();

    match runtime::run() {
        Ok(outcome) => {
            tracing::debug!(?outcome, "run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("retitle: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RETITLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}
