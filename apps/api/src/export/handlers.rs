//! Axum route handlers for panel rendering and DOCX export.

use axum::extract::Path;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::export::docx::html_to_docx;
use crate::render::{render_panel, Panel};
use crate::tailor::models::TailoringResult;

const DEFAULT_FILENAME: &str = "tailored-documents.docx";

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub result: TailoringResult,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportDocxRequest {
    pub html: String,
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportDocxResponse {
    pub docx_base64: String,
    pub filename: String,
}

/// POST /api/v1/render/:panel
///
/// Renders one panel (resume, cover-letter, insights) of a tailoring result
/// to HTML. Pure transformation — no state, no model call.
pub async fn handle_render(
    Path(panel): Path<String>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let panel: Panel = panel.parse().map_err(AppError::Validation)?;
    let html = render_panel(panel, &request.result);
    Ok(Json(RenderResponse { html }))
}

/// POST /api/v1/export/docx
///
/// Converts panel markup to a Word document and returns it base64-encoded
/// for client-side download. Export failures never disturb anything else —
/// the service holds no state to disturb.
pub async fn handle_export_docx(
    Json(request): Json<ExportDocxRequest>,
) -> Result<Json<ExportDocxResponse>, AppError> {
    if request.html.trim().is_empty() {
        return Err(AppError::Validation("html cannot be empty".to_string()));
    }

    let bytes = html_to_docx(&request.html)?;

    info!(bytes = bytes.len(), "DOCX export complete");

    Ok(Json(ExportDocxResponse {
        docx_base64: BASE64.encode(&bytes),
        filename: request
            .filename
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
    }))
}
