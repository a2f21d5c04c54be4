//! HTTP route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{about, contact, health, home, AppState};

/// Create the site router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        // Health endpoint
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
