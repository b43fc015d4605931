//! Axum route handlers for the tailoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailor::models::TailoringResult;
use crate::tailor::prompts::{build_tailor_prompt, tailor_system};
use crate::tailor::sample::SAMPLE_RESUME;
use crate::tailor::validation::validate_tailor_inputs;

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub jd_text: String,
    pub modification_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub result: TailoringResult,
}

#[derive(Debug, Serialize)]
pub struct SampleResumeResponse {
    pub resume_text: &'static str,
}

/// POST /api/v1/tailor
///
/// The whole pipeline in one round trip: validate inputs, interpolate the
/// prompt template, make the single model call, return the structured
/// result. The model's reply is authoritative — the only check applied is
/// that it deserializes into the canonical schema.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    validate_tailor_inputs(&request.resume_text, &request.jd_text)?;

    info!(
        resume_chars = request.resume_text.chars().count(),
        jd_chars = request.jd_text.chars().count(),
        has_modification = request.modification_prompt.is_some(),
        "Tailoring request accepted"
    );

    let prompt = build_tailor_prompt(
        &request.resume_text,
        &request.jd_text,
        request.modification_prompt.as_deref(),
    );

    let result = state
        .llm
        .call_json::<TailoringResult>(&prompt, &tailor_system())
        .await
        .map_err(|e| AppError::Llm(format!("Tailoring failed: {e}")))?;

    info!(
        initial_score = result.initial_ats_score,
        tailored_score = result.tailored_ats_score,
        skills = result.skills.len(),
        "Tailoring result generated"
    );

    Ok(Json(TailorResponse { result }))
}

/// GET /api/v1/sample-resume
///
/// Returns the bundled sample résumé for prefilling the form.
pub async fn handle_sample_resume() -> Json<SampleResumeResponse> {
    Json(SampleResumeResponse {
        resume_text: SAMPLE_RESUME,
    })
}
