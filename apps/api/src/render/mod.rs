// Server-side HTML rendering of the tailoring result: three independent
// presentational mappings (résumé, cover letter, ATS insights). Pure
// functions of the result — a section with no content is simply omitted.

pub mod cover_letter;
pub mod insights;
pub mod resume;

use std::str::FromStr;

use crate::tailor::models::TailoringResult;

/// The three renderable panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Resume,
    CoverLetter,
    Insights,
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume" => Ok(Panel::Resume),
            "cover-letter" => Ok(Panel::CoverLetter),
            "insights" => Ok(Panel::Insights),
            other => Err(format!(
                "Unknown panel '{other}' — expected one of: resume, cover-letter, insights"
            )),
        }
    }
}

/// Renders one panel of the result to HTML.
pub fn render_panel(panel: Panel, result: &TailoringResult) -> String {
    match panel {
        Panel::Resume => resume::render_resume(result),
        Panel::CoverLetter => cover_letter::render_cover_letter(result),
        Panel::Insights => insights::render_insights(result),
    }
}

/// Escapes text for interpolation into HTML element content or attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_from_str() {
        assert_eq!(Panel::from_str("resume").unwrap(), Panel::Resume);
        assert_eq!(Panel::from_str("cover-letter").unwrap(), Panel::CoverLetter);
        assert_eq!(Panel::from_str("insights").unwrap(), Panel::Insights);
        assert!(Panel::from_str("summary").is_err());
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>"A&B"</b> isn't markup"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt; isn&#39;t markup"
        );
    }
}
