//! HTTP view module: handlers and route definitions.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
