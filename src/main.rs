//! oai-gateway - Main entry point
//!
//! Resolves configuration, then serves the import endpoint until
//! interrupted. The record-management tool path is the only required
//! setting; everything else has a compiled default.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oai_gateway::config::{Args, Config};
use oai_gateway::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oai_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::load(&args).context("Failed to resolve configuration")?;

    info!(
        "Starting OAI import gateway v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!("Record tool: {}", config.tool_path.display());
    info!("Staging directory: {}", config.temp_dir.display());

    std::fs::create_dir_all(&config.temp_dir)
        .context("Failed to create staging directory")?;

    let bind_addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("oai-gateway listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
