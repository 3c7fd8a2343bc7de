//! ffrelayctl
//!
//! Command-line interface for managing Firefox Relay masks and contacts.

mod commands;

use std::io;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::Command;
use ffrelay_client::{Client, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "ffrelayctl")]
#[command(version, about = "Manage Firefox Relay email masks from the terminal", long_about = None)]
struct Cli {
    /// Relay API token (Settings > API key on relay.firefox.com).
    #[arg(long, env = "FFRELAY_API_TOKEN", hide_env_values = true)]
    token: String,

    /// Service root to talk to.
    #[arg(long, env = "FFRELAY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "ffrelayctl=warn,ffrelay_client=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut builder = Client::builder().token(cli.token).base_url(cli.base_url);
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    commands::run(&client, cli.command).await
}
