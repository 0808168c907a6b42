use crate::AppState;
use crate::api::error::AppError;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::io::ErrorKind;

/// Serves the landing page file as-is.
pub async fn landing_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let bytes = tokio::fs::read(&state.config.index_path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound("Landing page not found".to_string()),
            _ => AppError::Internal(format!(
                "Failed to read landing page {}: {}",
                state.config.index_path, e
            )),
        })?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], bytes).into_response())
}
