//! Cover letter panel: contact header plus the letter body split into
//! paragraphs on newlines.

use super::escape;
use crate::tailor::models::TailoringResult;

pub fn render_cover_letter(result: &TailoringResult) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"cover-letter\">");
    html.push_str("<header>");
    html.push_str(&format!("<h1>{}</h1>", escape(&result.name)));
    html.push_str(&format!("<p>{}</p>", escape(&result.email)));
    html.push_str(&format!("<p>{}</p>", escape(&result.phone)));
    html.push_str(&format!("<p>{}</p>", escape(&result.city)));
    if !result.linkedin.trim().is_empty() {
        html.push_str(&format!(
            "<p><a href=\"{}\">LinkedIn Profile</a></p>",
            escape(&result.linkedin)
        ));
    }
    html.push_str("</header><main>");

    for paragraph in result
        .cover_letter
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        html.push_str(&format!("<p>{}</p>", escape(paragraph)));
    }

    html.push_str("</main></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailor::models::tests::sample_result;

    #[test]
    fn test_splits_letter_into_paragraphs_on_newlines() {
        let mut result = sample_result();
        result.cover_letter = "Dear Hiring Manager,\n\nFirst paragraph.\nSecond one.".to_string();
        let html = render_cover_letter(&result);
        assert!(html.contains("<p>Dear Hiring Manager,</p>"));
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("<p>Second one.</p>"));
    }

    #[test]
    fn test_blank_lines_produce_no_empty_paragraphs() {
        let mut result = sample_result();
        result.cover_letter = "One.\n\n\n\nTwo.".to_string();
        let html = render_cover_letter(&result);
        assert!(!html.contains("<p></p>"));
        assert_eq!(html.matches("<p>One.</p>").count(), 1);
        assert_eq!(html.matches("<p>Two.</p>").count(), 1);
    }

    #[test]
    fn test_header_contains_contact_block() {
        let html = render_cover_letter(&sample_result());
        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("LinkedIn Profile"));
    }
}
