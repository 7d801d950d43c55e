//! logview-api — HTTP surface for logview.
//!
//! Routes, handlers, and the JSON response envelope. This crate is the only
//! consumer of the core's two boundary operations; it deserializes requests,
//! delegates, and maps errors to status codes.

pub mod envelope;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use logview_core::LogStore;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LogStore>,
}

/// Build the application router around `store`.
pub fn router(store: Arc<LogStore>) -> Router {
    Router::new()
        .route("/api/create", post(handlers::create_log))
        .route("/api/get", get(handlers::get_logs))
        .route("/health", get(handlers::health))
        .with_state(AppState { store })
}
