use std::sync::Arc;

use people_enrichment_api::config::Config;
use people_enrichment_api::db::Database;
use people_enrichment_api::db_storage::PgPersonStorage;
use people_enrichment_api::handlers::AppState;
use people_enrichment_api::services::EnrichmentService;
use people_enrichment_api::{obs, routes};

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, connects to Postgres and builds
/// the enrichment client before starting the Axum server. Any failure here
/// halts the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    obs::init_tracing();

    tracing::info!("Parsing env config");
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config).await?;
    tracing::info!("Database connection pool established");

    let enrichment = EnrichmentService::new(&config)?;
    tracing::info!(
        "Enrichment client initialized (timeout {:?})",
        config.enrichment_timeout
    );

    let app_state = Arc::new(AppState {
        storage: Arc::new(PgPersonStorage::new(db.pool.clone())),
        enrichment,
    });

    let app = routes::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.server_addr.as_str()).await?;
    tracing::info!("Server listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
