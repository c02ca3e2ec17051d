use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dnspanel::api;
use dnspanel::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "dnspanel")]
#[command(about = "Web configuration panel for a Hetzner DNS zone-update watcher", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config/panel.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dnspanel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DnsPanel");

    let args = Args::parse();

    // Load deployment configuration
    let settings = Settings::load(&args.config)?;
    settings.validate()?;
    let settings = Arc::new(settings);

    api::server::start(settings).await
}
