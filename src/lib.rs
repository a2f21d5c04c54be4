//! Small website server.
//!
//! Serves three pages: a home page rendered from the `website/index.html`
//! template, plus static about and contact pages. Routing and HTTP serving
//! are delegated to axum; template rendering to tera.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`templates`]: Template engine wrapper
//! - [`views`]: HTTP handlers and routing
//! - [`utils`]: Utility functions

pub mod config;
pub mod error;
pub mod templates;
pub mod utils;
pub mod views;

pub use config::Config;
pub use error::{Result, SiteError};
