// ABOUTME: Courtside server binary: config load, resource wiring, axum serve
// ABOUTME: Supports port/verbosity overrides and graceful ctrl-c shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! # Courtside Server
//!
//! Starts the dashboard API over the configured spreadsheet and
//! text-generation service.
//!
//! ## Usage
//!
//! ```bash
//! # Start with environment configuration
//! cargo run --bin courtside-server
//!
//! # Override the HTTP port
//! cargo run --bin courtside-server -- --port 9090
//!
//! # Verbose logging
//! cargo run --bin courtside-server -- -v
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use courtside::config::environment::ServerConfig;
use courtside::context::ServerResources;
use courtside::llm::provider_from_config;
use courtside::logging;
use courtside::routes::build_router;
use courtside::store::sheets::{SheetStore, SheetStoreConfig};

#[derive(Parser)]
#[command(
    name = "courtside-server",
    about = "Courtside practice tracker server",
    long_about = "Serve the basketball practice dashboard over the configured spreadsheet"
)]
struct ServerArgs {
    /// HTTP port override
    #[arg(long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    logging::init(args.verbose);

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }

    let store = SheetStore::new(SheetStoreConfig {
        base_url: config.sheets_base_url.clone(),
        spreadsheet_id: config.spreadsheet_id.clone(),
        api_key: config.sheets_api_key.clone(),
    });
    let provider = provider_from_config(&config);

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(config, Box::new(store), provider));
    let app = build_router(resources);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("Courtside server listening on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Courtside server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
