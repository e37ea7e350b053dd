mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use tracing_subscriber::EnvFilter;

/// Log filter used when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "crowdscore=warn,crowdscore_core=warn";

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    commands::export::run(args.into())
}
