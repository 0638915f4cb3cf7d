// src/bin/storefront_server.rs

use aspire_storefront::infra::document::InMemoryDocument;
use aspire_storefront::transport;
use aspire_storefront::{StorefrontConfig, StorefrontService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // --- Configuration ---
    println!("> Loading configuration...");
    let config = StorefrontConfig::from_env()?;
    println!(
        "> Catalog source: {} | rotation every {:?} | checkout reset after {:?}",
        config.catalog_source, config.rotation_period, config.checkout_reset_delay
    );

    // --- Storefront Initialization ---
    println!("> Initializing StorefrontService...");
    let document = Arc::new(InMemoryDocument::new());
    let storefront = StorefrontService::from_config(&config, document.clone());
    storefront.start();
    println!("> StorefrontService started. Catalog fetch issued, carousel timers running.");

    let app_state = transport::http::AppState {
        storefront: storefront.clone(),
        document,
    };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state).layer(cors);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    println!("> API server listening on http://{}", config.listen_addr);
    println!("> OpenAPI document at /api-docs/openapi.json");
    println!("> Press Ctrl+C to shut down");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C)...");
        }
    }

    storefront.shutdown();
    println!("> Graceful shutdown complete.");
    Ok(())
}
