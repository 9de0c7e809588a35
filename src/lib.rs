//! Shorty — a single-process, in-memory URL shortener.
//!
//! The stateful heart of the service is [`store::ShortenerStore`], a pair of
//! inverse maps (code→URL, URL→code) behind one lock. Everything else is
//! transport glue: axum handlers that translate HTTP/JSON into the store's
//! two operations.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use config::AppConfig;
use store::ShortenerStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: AppConfig,
    pub store: ShortenerStore,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Build the application router around `state`.
///
/// Kept separate from `main` so integration tests can drive the full router
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::api::hello))
        .route("/health", get(handlers::api::health))
        .route("/shorten", post(handlers::api::shorten))
        .route("/r/:code", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
