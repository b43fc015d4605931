//! The tailoring result — the one value object that flows through the
//! system per request. Produced fresh by each model call, consumed by the
//! render and export paths, never stored.
//!
//! Wire field names are camelCase to match the JSON contract the prompt
//! dictates to the model. This is the canonical schema; earlier shapes of
//! the result (score-less, keyword-less) are deprecated and not supported.

use serde::{Deserialize, Serialize};

/// A single work-experience entry with rewritten bullet points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    /// One rewritten bullet per element.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub project_name: String,
    pub description: String,
    pub url: Option<String>,
}

/// Full structured output of one tailoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoringResult {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub linkedin: String,
    pub objective: String,
    /// Capped at the 10 most relevant skills by the prompt.
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    /// Up to 3-4 key projects; empty when the résumé mentions none.
    pub portfolio: Vec<PortfolioItem>,
    pub certifications: Vec<String>,
    pub hobbies: Vec<String>,
    /// Newline-separated paragraphs.
    pub cover_letter: String,
    /// Estimated ATS match percentage for the original résumé.
    pub initial_ats_score: f64,
    /// Estimated ATS match percentage after tailoring.
    pub tailored_ats_score: f64,
    pub matched_keywords: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}
