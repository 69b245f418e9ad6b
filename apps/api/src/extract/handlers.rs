//! Axum route handler for resume upload extraction.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_resume_text;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub resume_text: String,
}

/// POST /api/v1/resumes/extract
///
/// Accepts a multipart upload (field name `file`) and returns the extracted
/// plain resume text. The text is not persisted; the client feeds it into
/// later generation requests.
pub async fn handle_extract_resume(
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("Upload is missing a file name".to_string()))?
            .to_string();

        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let resume_text = extract_resume_text(&file_name, &data)?;
        info!(
            "Extracted {} chars of resume text from '{}'",
            resume_text.len(),
            file_name
        );

        return Ok(Json(ExtractResponse {
            file_name,
            resume_text,
        }));
    }

    Err(AppError::Validation(
        "No 'file' field found in upload".to_string(),
    ))
}
