pub mod api;
pub mod config;
pub mod model;
pub mod seed;
pub mod store;

use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryStore, PostgresStore, Store};

use crate::config::AppConfig;

/// Serve the API on `listener` with `store` as the router state
pub async fn serve<S: Store + 'static>(store: Arc<S>, listener: TcpListener) -> anyhow::Result<()> {
    let app = routes::create_router().with_state(store);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Connect the configured store, optionally seed it, and serve until shutdown
pub async fn run_server(config: &AppConfig) -> anyhow::Result<()> {
    if config.database.in_memory {
        info!("Using in-memory store");
        return start(Arc::new(MemoryStore::new()), config).await;
    }

    info!("Connecting to PostgreSQL...");
    let postgres_store =
        PostgresStore::new(&config.database_url(), config.database.max_connections).await?;
    postgres_store.migrate().await?;
    info!("Database tables ready");

    start(Arc::new(postgres_store), config).await
}

async fn start<S: Store + 'static>(store: Arc<S>, config: &AppConfig) -> anyhow::Result<()> {
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        info!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
    }

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("Pizza restaurants API running on http://{}", bind_address);

    serve(store, listener).await
}
