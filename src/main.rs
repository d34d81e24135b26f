//! Assistant Bot - Main entry point
//!
//! Runs an interactive address book session on stdin/stdout.

use anyhow::Result;
use assistant_bot::{repl, Config};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout belongs to the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(ignored) = &config.ignored_log_level {
        warn!(value = %ignored, "Unknown LOG_LEVEL, using \"error\"");
    }
    info!(log_level = %config.log_level, "Configuration loaded successfully");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::run(stdin.lock(), stdout.lock()) {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
