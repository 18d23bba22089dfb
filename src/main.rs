// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod common;
mod logging_middleware;
mod services;
mod validation;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::{AppConfig, AppState};
use services::{title_fetcher::build_http_client, SystemResolver, TitleFetcher};
use validation::DomainValidationService;

/// Fully open CORS; credentials rule out a literal `*`, so everything is mirrored
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(validation::validation_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env()?;
    info!(
        fetch_timeout = ?config.fetch_timeout,
        match_threshold = config.match_threshold,
        dns_timeout = ?config.dns_timeout,
        "Loaded configuration"
    );

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = build_http_client(config.fetch_timeout)?;
    let validation_service = DomainValidationService::new(
        Arc::new(SystemResolver::new(config.dns_timeout)),
        Arc::new(TitleFetcher::new(http_client)),
        config.match_threshold,
    );

    let shared = Arc::new(AppState {
        validation_service: Arc::new(validation_service),
    });

    let app = build_app(shared);

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
