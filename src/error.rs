//! Unified error types for the website server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Unified error type for the website server.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Template loading or rendering error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Template loading and rendering errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template with the requested name was loaded.
    #[error("template not found: {name}")]
    NotFound {
        /// The requested template name.
        name: String,
    },

    /// The engine failed to parse or render a template.
    #[error("template engine error: {0}")]
    Engine(#[from] tera::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        let body = match &self {
            Self::Template(TemplateError::NotFound { name }) => {
                format!("template not found: {name}")
            }
            _ => "internal server error".to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, SiteError>;
