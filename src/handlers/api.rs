use crate::{error::ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Host, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

// ── Request / response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// POST /shorten
///
/// 1. Reject a missing/malformed body or an empty `url` with 400.
/// 2. Ask the store for a code — idempotent, so re-posting a URL returns
///    the code it already has.
/// 3. Build the public short URL from PUBLIC_BASE_URL when configured,
///    otherwise from the request's Host header.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    Host(host): Host,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;

    if req.url.is_empty() {
        return Err(ApiError::EmptyUrl);
    }

    let code = state.store.shorten(&req.url);

    let base = match &state.config.public_base_url {
        Some(base) => base.clone(),
        None => format!("http://{host}"),
    };
    let short_url = format!("{base}/r/{code}");

    tracing::debug!(%code, "shortened URL");

    Ok(Json(ShortenResponse { short_url, code }))
}

/// GET /health — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "up" }))
}

/// GET /
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}
