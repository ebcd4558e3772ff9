use clap::Parser;

use nope_lib::bootstrap::{resolve_config, run_app, tracing::init_tracing_subscriber};
use nope_lib::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    init_tracing_subscriber(&config)?;

    run_app(config, cli.command).await
}
