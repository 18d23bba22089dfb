use super::handlers;
use axum::{routing::get, Router};

/// Creates the validation router
pub fn validation_routes() -> Router {
    Router::new()
        .route("/validate", get(handlers::validate_domain))
        .route("/health", get(handlers::health))
}
