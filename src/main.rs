use clap::Parser;
use waypost::cli::{run_cli, Cli};
use waypost::logging;
use waypost::runtime_config::RuntimeConfig;

fn main() -> anyhow::Result<()> {
    let config = RuntimeConfig::from_env();
    logging::init(&config)?;
    run_cli(Cli::parse(), &config)
}
