use crate::{
    dispatcher::{Dispatcher, RouterBuilder},
    manifest::Manifest,
    middleware::RequestIdFilter,
    runtime_config::RuntimeConfig,
    server::Request,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for waypost
///
/// Loads a route manifest and either lists the routing table or runs a single
/// request through the dispatcher offline.
#[derive(Parser)]
#[command(name = "waypost")]
#[command(about = "waypost request dispatcher CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the routing table declared by a manifest
    Routes {
        /// Path to the route manifest (TOML)
        manifest: PathBuf,
    },
    /// Dispatch one request against a manifest and print the response
    Dispatch {
        /// Path to the route manifest (TOML)
        manifest: PathBuf,

        /// HTTP method (any token, e.g. GET or PURGE)
        method: String,

        /// Request target: path with optional query string
        target: String,

        /// Request header as `name: value` (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Request body
        #[arg(short, long)]
        body: Option<String>,

        /// Tag the request with an x-request-id before-filter
        #[arg(long, default_value_t = false)]
        request_id: bool,
    },
}

fn load_builder(manifest: &Path, config: &RuntimeConfig) -> anyhow::Result<RouterBuilder> {
    let manifest = Manifest::load(manifest)?;
    let mut builder = Dispatcher::builder();
    manifest.apply(&mut builder)?;
    builder.log_with_shared(config.access_log.log_fn());
    Ok(builder)
}

fn parse_header(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .ok_or_else(|| anyhow::anyhow!("header '{raw}' must look like 'name: value'"))
}

/// Run the parsed command.
pub fn run_cli(cli: Cli, config: &RuntimeConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Routes { manifest } => {
            let dispatcher = load_builder(&manifest, config)?.build();
            dispatcher.dump_routes();
            for (method, template) in dispatcher.routes() {
                println!("{:<8} {template}", method.as_str());
            }
        }
        Commands::Dispatch {
            manifest,
            method,
            target,
            headers,
            body,
            request_id,
        } => {
            let mut builder = load_builder(&manifest, config)?;
            if request_id {
                builder.add_before_filter(RequestIdFilter);
            }
            let dispatcher = builder.build();

            let mut request = Request::from_target(&method, &target)?;
            for raw in &headers {
                let (name, value) = parse_header(raw)?;
                request = request.with_header(name, value)?;
            }
            if let Some(body) = body {
                request = request.with_body(body);
            }

            let response = dispatcher.handle(request);
            println!("HTTP {} {}", response.status, response.reason());
            for (name, value) in &response.headers {
                println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
            println!();
            println!("{}", response.body_text());
        }
    }
    Ok(())
}
