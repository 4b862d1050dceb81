//! Eclipse API HTTP Server Binary
//!
//! Loads the eclipse dataset, sets up the HTTP router, and starts serving
//! requests. An unreadable dataset stops the process before it binds.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin eclipse-server
//!
//! # Re-read the dataset on every request
//! ECLIPSES_LOAD_STRATEGY=per-request cargo run --bin eclipse-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ECLIPSES_DATA_PATH`: Dataset file (default: eclipse_data.csv)
//! - `ECLIPSES_LOAD_STRATEGY`: `startup` or `per-request` (default: startup)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Values in `eclipses.toml` are used when present; environment variables win.

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use eclipse_api::config::ServerConfig;
use eclipse_api::dataset::{EclipseRepository, RepositoryFactory};
use eclipse_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Eclipse API server");

    let config = ServerConfig::from_default_location()?.apply_env_overrides()?;
    let addr = config.bind_address()?;

    let repository =
        RepositoryFactory::create(config.dataset.load_strategy, config.dataset.path.clone())?;
    info!(
        "Dataset ready (strategy={}, path={})",
        repository.strategy(),
        repository.source_path().display()
    );

    let app = create_router(AppState::new(repository));

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
