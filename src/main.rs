mod cli;
mod dispatcher;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use selic::config::SgsConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = SgsConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    dispatcher::dispatch_command(cli.command, cli.json, config).await
}
