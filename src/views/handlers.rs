//! HTTP view handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Json};
use serde::Serialize;

use crate::error::SiteError;
use crate::templates::TemplateEngine;

/// Template rendered by the home handler.
pub const HOME_TEMPLATE: &str = "website/index.html";

/// Body returned by the about handler.
pub const ABOUT_BODY: &str = "This is about page";

/// Body returned by the contact handler.
pub const CONTACT_BODY: &str = "This is the contact page";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded template set.
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// Create new app state around a loaded template engine.
    pub fn new(templates: TemplateEngine) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Home handler - renders the `website/index.html` template.
///
/// A missing or broken template propagates as a 500 response; the handler
/// performs no recovery of its own.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, SiteError> {
    let body = state.templates.render(HOME_TEMPLATE)?;
    Ok(Html(body))
}

/// About handler - always returns a fixed text body.
pub async fn about() -> &'static str {
    ABOUT_BODY
}

/// Contact handler - always returns a fixed text body.
pub async fn contact() -> &'static str {
    CONTACT_BODY
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
