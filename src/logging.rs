//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::runtime_config::{LogFormat, RuntimeConfig};

/// Install the global `tracing` subscriber described by `config`.
///
/// Fails if the filter directive does not parse or a global subscriber is already
/// installed.
pub fn init(config: &RuntimeConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
