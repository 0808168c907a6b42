use crate::models::FailureList;
use crate::services::ingress::IngressError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Ingress(#[from] IngressError),

    #[error("Error uploading files: {0}")]
    UploadFailed(FailureList),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Ingress(IngressError::PayloadTooLarge) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Ingress(_) => StatusCode::BAD_REQUEST,
            // Partial and total failure share one status; the body names each file.
            AppError::UploadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal Server Error".to_string()
            }
            AppError::NotFound(msg) => msg,
            other => other.to_string(),
        };

        (status, message).into_response()
    }
}
