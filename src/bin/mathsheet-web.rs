//! MathSheet Web Server Binary
//!
//! Serves printable worksheet pages and the worksheet JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Start with configured settings (default 127.0.0.1:3001)
//! mathsheet-web
//!
//! # Override host and port
//! mathsheet-web --host 0.0.0.0 --port 8080
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mathsheet::config::Config;
use mathsheet::web;

/// MathSheet Web Server - printable multiplication worksheets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context(format!("Invalid listen address: {host}:{port}"))?;

    info!(
        category = %config.worksheet.category,
        count = config.worksheet.count,
        "Worksheet defaults"
    );

    if !web::static_files::has_embedded_assets() {
        warn!("Worksheet stylesheet is not embedded; pages will render unstyled");
    }

    web::run_server(config, addr).await
}
