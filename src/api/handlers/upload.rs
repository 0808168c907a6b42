use crate::AppState;
use crate::api::error::AppError;
use crate::models::{BatchResult, FailureList};
use crate::services::ingress;
use axum::extract::{Multipart, State};
use utoipa::ToSchema;

/// Form accepted by `/upload`, described in the OpenAPI document.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// Up to 10 files, each stored under its own filename
    #[schema(value_type = Vec<String>, format = Binary)]
    files: Vec<Vec<u8>>,
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Every file was stored", body = String),
        (status = 400, description = "No files, too many files or a malformed form", body = String),
        (status = 413, description = "Request body too large", body = String),
        (status = 500, description = "At least one file failed; each failure is listed", body = String)
    ),
    tag = "upload"
)]
pub async fn upload_files(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<String, AppError> {
    let batch = ingress::buffer_batch(multipart, state.config.max_files).await?;

    match state.upload_service.upload_batch(batch).await {
        BatchResult::AllSucceeded { count } => {
            Ok(format!("Uploaded {} files successfully.", count))
        }
        BatchResult::SomeFailed { failures } => Err(AppError::UploadFailed(FailureList(failures))),
    }
}
