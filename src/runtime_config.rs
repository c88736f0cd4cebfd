//! # Runtime Configuration Module
//!
//! Environment-variable configuration for logging and the access log.
//!
//! ## Environment Variables
//!
//! ### `WAYPOST_LOG`
//!
//! `tracing` filter directive, same syntax as `RUST_LOG` (e.g. `waypost=debug`).
//!
//! Default: `info`
//!
//! ### `WAYPOST_LOG_FORMAT`
//!
//! `pretty` for human-readable output, `json` for one JSON object per line.
//!
//! Default: `pretty`
//!
//! ### `WAYPOST_ACCESS_LOG`
//!
//! Which access-log callback the dispatcher gets:
//! - `stdout`: `<status> - <path>` lines on standard output
//! - `tracing`: an `info` event per request
//! - `off`: nothing
//!
//! Default: `stdout`
//!
//! Unrecognised values fall back to the default.
//!
//! ## Usage
//!
//! ```rust
//! use waypost::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("log filter: {}", config.log_filter);
//! ```

use std::env;
use std::sync::Arc;

use crate::server::{default_request_log, tracing_request_log, Request, RequestLogFn};

pub const LOG_ENV: &str = "WAYPOST_LOG";
pub const LOG_FORMAT_ENV: &str = "WAYPOST_LOG_FORMAT";
pub const ACCESS_LOG_ENV: &str = "WAYPOST_ACCESS_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where per-request access records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessLog {
    #[default]
    Stdout,
    Tracing,
    Off,
}

impl AccessLog {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Some(Self::Stdout),
            "tracing" => Some(Self::Tracing),
            "off" | "none" => Some(Self::Off),
            _ => None,
        }
    }

    /// The callback for this setting.
    #[must_use]
    pub fn log_fn(self) -> RequestLogFn {
        match self {
            Self::Stdout => Arc::new(default_request_log),
            Self::Tracing => Arc::new(tracing_request_log),
            Self::Off => Arc::new(|_status: u16, _req: &Request| {}),
        }
    }
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `tracing` filter directive
    pub log_filter: String,
    /// Subscriber output format
    pub log_format: LogFormat,
    /// Access-log destination
    pub access_log: AccessLog,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            access_log: AccessLog::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = lookup(LOG_FORMAT_ENV)
            .and_then(|v| LogFormat::parse(&v))
            .unwrap_or_default();
        let access_log = lookup(ACCESS_LOG_ENV)
            .and_then(|v| AccessLog::parse(&v))
            .unwrap_or_default();

        RuntimeConfig {
            log_filter,
            log_format,
            access_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.access_log, AccessLog::Stdout);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            (LOG_ENV, "waypost=debug"),
            (LOG_FORMAT_ENV, "JSON"),
            (ACCESS_LOG_ENV, "tracing"),
        ]));
        assert_eq!(config.log_filter, "waypost=debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.access_log, AccessLog::Tracing);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            (LOG_ENV, "  "),
            (LOG_FORMAT_ENV, "xml"),
            (ACCESS_LOG_ENV, "syslog"),
        ]));
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_access_log_off() {
        let config = RuntimeConfig::from_lookup(lookup(&[(ACCESS_LOG_ENV, "off")]));
        assert_eq!(config.access_log, AccessLog::Off);
    }
}
