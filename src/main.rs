use std::sync::Arc;

use arris_exporter::{
    AppState, Config, MetricsRegistry, ModemClient, Result, create_router, start_collection_loop,
};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before logging so RUST_LOG from it applies
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::load().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!(
        "Scraping modem at {} every {}s (timeout {}s)",
        config.modem_host,
        config.scrape_interval.as_secs(),
        config.request_timeout.as_secs()
    );

    let client = Arc::new(ModemClient::new(&config)?);
    let metrics = MetricsRegistry::new();

    let state = Arc::new(AppState {
        metrics: metrics.clone(),
    });

    // Graceful shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    // Bind before scraping: a port that cannot be bound is fatal
    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .map_err(|e| {
            tracing::error!("Failed to bind address {}: {}", config.server_addr, e);
            e
        })?;

    let collection = start_collection_loop(
        shutdown_rx.clone(),
        client,
        metrics,
        config.scrape_interval,
    );

    let app = create_router(state);

    tracing::info!("Arris Exporter starting on {}", config.server_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /health  - Health check");
    tracing::info!("  - GET /metrics - Prometheus metrics");

    let mut server_shutdown = shutdown_rx;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.wait_for(|stop| *stop).await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    let _ = shutdown_tx.send(true);
    let _ = collection.await;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
