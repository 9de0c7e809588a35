use crate::{error::ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /r/:code
///
/// Look the code up in the store and send the client to the original URL.
/// An unknown code is a normal miss, reported as 404.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    let original_url = state.store.resolve(&code).ok_or(ApiError::NotFound)?;

    // 302 Found; axum's Redirect::to would emit 303.
    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}
