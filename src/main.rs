//! Tenant gateway (v1)
//!
//! Host-based tenant resolution in front of a multi-tenant web application.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                TENANT GATEWAY                 │
//!     Client Request      │  ┌─────────┐   ┌────────────┐   ┌──────────┐ │
//!     ────────────────────┼─▶│  http   │──▶│  routing   │──▶│  tenant  │ │
//!                         │  │ server  │   │asset filter│   │ resolver │ │
//!                         │  └─────────┘   └────────────┘   └────┬─────┘ │
//!                         │                                      │       │
//!                         │                      path rewritten ▼       │
//!     Client Response     │  ┌─────────────────────────────────────────┐ │
//!     ◀───────────────────┼──│        upstream forwarding client       │◀┼──── Application
//!                         │  └─────────────────────────────────────────┘ │
//!                         │   config · observability · lifecycle         │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use tenant_gateway::config::{load_config, GatewayConfig};
use tenant_gateway::lifecycle::{signals, Shutdown};
use tenant_gateway::observability::{logging, metrics};
use tenant_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "tenant-gateway", version)]
#[command(about = "Host-based tenant routing gateway", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "TENANT_GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        "tenant-gateway starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        root_domain = %config.tenancy.root_domain,
        reserved = config.tenancy.reserved_subdomains.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::wait_for_shutdown().await;
    shutdown.trigger();

    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
