use crate::models::{DEFAULT_CONTENT_TYPE, FilePayload, UploadBatch};
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use thiserror::Error;

/// Multipart field that carries the uploaded files.
pub const FILES_FIELD: &str = "files";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IngressError {
    #[error("No files were uploaded.")]
    NoFilesProvided,

    #[error("Too many files: at most {max} files can be uploaded at once.")]
    TooManyFiles { max: usize },

    #[error("Unexpected file field '{0}', files must be sent as 'files'.")]
    UnexpectedField(String),

    #[error("Request body exceeds the maximum allowed limit")]
    PayloadTooLarge,

    #[error("Malformed multipart body: {0}")]
    Malformed(String),
}

impl From<MultipartError> for IngressError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            IngressError::PayloadTooLarge
        } else {
            IngressError::Malformed(e.body_text())
        }
    }
}

/// Reads every file part of `multipart` into memory.
///
/// The file count is checked against `max_files` as each part header
/// arrives, so an oversized request is refused before the offending part's
/// content is read. On any error the rest of the body is drained without
/// being kept, letting the client receive the error response instead of a
/// connection reset.
pub async fn buffer_batch(
    mut multipart: Multipart,
    max_files: usize,
) -> Result<UploadBatch, IngressError> {
    let result = read_parts(&mut multipart, max_files).await;

    match result {
        Ok(payloads) => UploadBatch::new(payloads).ok_or(IngressError::NoFilesProvided),
        Err(e) => {
            tracing::warn!("Upload rejected during parsing: {}. Draining remaining body...", e);
            while let Ok(Some(mut field)) = multipart.next_field().await {
                while let Ok(Some(_)) = field.chunk().await {}
            }
            Err(e)
        }
    }
}

async fn read_parts(
    multipart: &mut Multipart,
    max_files: usize,
) -> Result<Vec<FilePayload>, IngressError> {
    let mut payloads = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            // Text field, or a file input left empty by the browser
            _ => continue,
        };

        if field_name != FILES_FIELD {
            return Err(IngressError::UnexpectedField(field_name));
        }
        if payloads.len() >= max_files {
            return Err(IngressError::TooManyFiles { max: max_files });
        }

        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let content = field.bytes().await?;

        tracing::debug!(
            "Buffered '{}' ({} bytes, {})",
            file_name,
            content.len(),
            content_type
        );
        payloads.push(FilePayload::new(file_name, content, content_type));
    }

    Ok(payloads)
}
