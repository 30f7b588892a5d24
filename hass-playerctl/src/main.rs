//! hass-playerctl - HTTP bridge to playerctl
//!
//! Lets a home-automation controller trigger media transport actions on this
//! machine over plain HTTP. Listens on 127.0.0.1 only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hass_playerctl::config::{self, Overrides};

/// Command-line arguments for hass-playerctl
#[derive(Parser, Debug)]
#[command(name = "hass-playerctl")]
#[command(about = "Loopback HTTP bridge for playerctl transport actions")]
#[command(version)]
struct Args {
    /// Port to listen on (127.0.0.1 only) [default: 8553]
    port: Option<u16>,

    /// playerctl executable to invoke [default: playerctl]
    #[arg(long, value_name = "PATH")]
    playerctl: Option<PathBuf>,

    /// TOML config file (must exist when given)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parsed first so --help and --version print nothing else
    let args = Args::parse();

    // Logs go to stderr; stdout is left alone
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hass_playerctl=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting hass-playerctl v{} [{}] built {}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP")
    );

    let overrides = Overrides {
        port: args.port,
        playerctl: args.playerctl,
        config_file: args.config,
    };
    let config = config::resolve(&overrides).context("Failed to load configuration")?;

    hass_playerctl::server::run(config)
        .await
        .context("Server error")?;

    Ok(())
}
