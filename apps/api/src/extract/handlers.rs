//! Axum route handler for PDF text extraction.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::pdf::{extract_text_from_pdf, merge_extracted_text};
use crate::tailor::validation::validate_upload;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// Concatenated text of all uploaded files, blank-line separated.
    pub text: String,
    /// File names in the order they were processed.
    pub files: Vec<String>,
}

/// POST /api/v1/extract
///
/// Accepts one or more `file` parts and returns their concatenated text.
/// Every file is validated (size ceiling, PDF type) before any extraction
/// runs, so a rejected upload never reaches the parser.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut uploads: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read '{file_name}': {e}")))?;

        validate_upload(&file_name, content_type.as_deref(), &data)?;
        uploads.push((file_name, data));
    }

    if uploads.is_empty() {
        return Err(AppError::Validation(
            "No file uploaded — attach at least one PDF as a 'file' part".to_string(),
        ));
    }

    // Sequential extraction, accumulating before the merge. Any failure
    // aborts the whole request — no partial-success reporting.
    let mut parts = Vec::with_capacity(uploads.len());
    let mut files = Vec::with_capacity(uploads.len());
    for (file_name, data) in &uploads {
        parts.push(extract_text_from_pdf(file_name, data)?);
        files.push(file_name.clone());
    }

    let text = merge_extracted_text(&parts);

    info!(
        files = files.len(),
        chars = text.chars().count(),
        "PDF extraction complete"
    );

    Ok(Json(ExtractResponse { text, files }))
}
