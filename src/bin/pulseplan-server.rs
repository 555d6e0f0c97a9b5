// ABOUTME: Server binary for the PulsePlan health assessment API
// ABOUTME: Loads configuration, initializes logging, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! # PulsePlan Server Binary
//!
//! Starts the stateless health assessment API. All configuration comes from
//! environment variables; the only flag is an HTTP port override.

use anyhow::Result;
use clap::Parser;
use pulseplan::{config::ServerConfig, logging, routes};
use tracing::info;

#[derive(Parser)]
#[command(name = "pulseplan-server")]
#[command(about = "PulsePlan - deterministic health assessment and personalized plan API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting PulsePlan Health Assessment API");
    info!("{}", config.summary());

    let app = routes::router(&config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
    }
}
