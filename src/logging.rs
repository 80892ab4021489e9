//! Logging setup
//!
//! Structured logging via the `tracing` crate. The library only emits
//! events; installing a subscriber is the binary's job, so embedders can
//! supply their own observer instead.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: default_true(),
            level: default_log_level(),
            color: default_true(),
        }
    }
}

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for the operation plan.
///
/// Filter precedence: explicit `override_level`, then the `TREEGEN_LOG`
/// environment variable, then the configured default.
pub fn init_logging(config: &LoggingConfig, override_level: Option<&str>) {
    if !config.enabled {
        return;
    }
    let filter = match override_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env("TREEGEN_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.level)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.color)
        .with_writer(std::io::stderr)
        .try_init();
}
