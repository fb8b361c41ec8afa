//! Property Lookup - a cache-aside lookup service for property details
//!
//! Checks a Redis cache first, falls back to the remote property-data
//! provider on a miss, and writes the result back with a one-hour TTL.

mod api;
mod cache;
mod config;
mod error;
mod lookup;
mod models;
mod provider;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::RedisCache;
use config::Config;
use lookup::LookupService;
use provider::HttpProvider;

/// Main entry point for the property lookup service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from .env / environment variables
/// 3. Connect to the Redis cache backend
/// 4. Construct the provider client and lookup service
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_lookup=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Property Lookup Service");

    // Load .env if present, then configuration from environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, redis={}, provider={}, cache_write={:?}",
        config.server_port, config.redis_url, config.provider_url, config.cache_write
    );

    // Connect to the cache backend; refusing to start without it keeps
    // startup failures loud instead of surfacing as per-request noise
    let redis = RedisCache::connect(&config.redis_url)
        .await
        .expect("Failed to connect to Redis");
    info!("Connected to Redis");

    // Wire the lookup service with its collaborators
    let http_provider = HttpProvider::new(&config.provider_url, &config.provider_api_key);
    let service = LookupService::new(Arc::new(redis), Arc::new(http_provider))
        .with_write_policy(config.cache_write);
    let state = AppState::new(service);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
