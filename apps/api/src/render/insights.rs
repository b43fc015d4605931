//! ATS insights panel: before/after score bars, matched-keyword badges,
//! improvement suggestions.

use super::escape;
use crate::tailor::models::TailoringResult;

pub fn render_insights(result: &TailoringResult) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"insights\">");
    html.push_str("<h2>ATS &amp; Improvement Insights</h2>");

    html.push_str("<section class=\"scores\">");
    html.push_str(&score_row("Initial ATS Score", result.initial_ats_score));
    html.push_str(&score_row("Tailored ATS Score", result.tailored_ats_score));
    html.push_str("</section>");

    if !result.matched_keywords.is_empty() {
        html.push_str("<section><h3>Matched Keywords</h3><ul class=\"keywords\">");
        for keyword in &result.matched_keywords {
            html.push_str(&format!("<li>{}</li>", escape(keyword)));
        }
        html.push_str("</ul></section>");
    }

    if !result.improvement_suggestions.is_empty() {
        html.push_str("<section><h3>Improvement Suggestions</h3><ul class=\"suggestions\">");
        for suggestion in &result.improvement_suggestions {
            html.push_str(&format!("<li>{}</li>", escape(suggestion)));
        }
        html.push_str("</ul></section>");
    }

    html.push_str("</div>");
    html
}

fn score_row(label: &str, score: f64) -> String {
    // Scores come from the model; clamp so a stray value cannot break the bar.
    let pct = score.clamp(0.0, 100.0).round() as u32;
    format!(
        "<div class=\"score\"><p><span class=\"label\">{}</span>\
         <span class=\"value\">{pct}%</span></p>\
         <div class=\"bar\"><div class=\"fill\" style=\"width:{pct}%\"></div></div></div>",
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailor::models::tests::sample_result;

    #[test]
    fn test_renders_both_scores_as_percentages() {
        let html = render_insights(&sample_result());
        assert!(html.contains("Initial ATS Score"));
        assert!(html.contains("62%"));
        assert!(html.contains("Tailored ATS Score"));
        assert!(html.contains("88%"));
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let mut result = sample_result();
        result.tailored_ats_score = 140.0;
        result.initial_ats_score = -5.0;
        let html = render_insights(&result);
        assert!(html.contains("width:100%"));
        assert!(html.contains("width:0%"));
    }

    #[test]
    fn test_keywords_and_suggestions_rendered() {
        let html = render_insights(&sample_result());
        assert!(html.contains("<li>Python</li>"));
        assert!(html.contains("Add a metrics-driven summary line."));
    }

    #[test]
    fn test_empty_lists_omit_their_sections() {
        let mut result = sample_result();
        result.matched_keywords.clear();
        result.improvement_suggestions.clear();
        let html = render_insights(&result);
        assert!(!html.contains("Matched Keywords"));
        assert!(!html.contains("Improvement Suggestions"));
    }
}
