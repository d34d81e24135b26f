//! Configuration management for the assistant bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. They only control logging; the command protocol itself takes no
//! options, and no setting can stop a session from starting.

use std::env;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for an assistant session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Unrecognized `LOG_LEVEL` value that was replaced by the default
    pub ignored_log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level, one of error/warn/info/debug/trace (default: "error").
    ///   Any other value falls back to the default and is kept in `ignored_log_level`.
    pub fn from_env() -> Self {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        match Self::parse_log_level("LOG_LEVEL") {
            Ok(Some(log_level)) => Config {
                log_level,
                ..Config::default()
            },
            Ok(None) => Config::default(),
            Err(ignored) => Config {
                ignored_log_level: Some(ignored),
                ..Config::default()
            },
        }
    }

    /// Read a log level variable, lowercased.
    ///
    /// Returns `Ok(None)` when unset and `Err(raw)` for an unknown level.
    fn parse_log_level(var_name: &str) -> Result<Option<String>, String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(Some(level))
                } else {
                    Err(val)
                }
            }
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            ignored_log_level: None,
        }
    }
}
