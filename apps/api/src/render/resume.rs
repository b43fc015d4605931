//! Résumé panel: contact header plus one section per populated field group.

use super::escape;
use crate::tailor::models::TailoringResult;

/// Renders the tailored résumé as an HTML fragment. Sections whose content
/// is empty are omitted entirely — no placeholder text.
pub fn render_resume(result: &TailoringResult) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"resume\">");
    html.push_str("<header>");
    html.push_str(&format!("<h1>{}</h1>", escape(&result.name)));
    html.push_str("<p class=\"contact\">");
    html.push_str(&format!("<span>{}</span>", escape(&result.phone)));
    html.push_str(&format!(" &middot; <span>{}</span>", escape(&result.email)));
    html.push_str(&format!(" &middot; <span>{}</span>", escape(&result.city)));
    if !result.linkedin.trim().is_empty() {
        html.push_str(&format!(
            " &middot; <a href=\"{}\">LinkedIn</a>",
            escape(&result.linkedin)
        ));
    }
    html.push_str("</p></header><main>");

    if !result.objective.trim().is_empty() {
        html.push_str("<section><h2>Objective</h2>");
        html.push_str(&format!("<p>{}</p>", escape(&result.objective)));
        html.push_str("</section>");
    }

    if !result.skills.is_empty() {
        html.push_str("<section><h2>Skills</h2><ul class=\"skills\">");
        for skill in &result.skills {
            html.push_str(&format!("<li>{}</li>", escape(skill)));
        }
        html.push_str("</ul></section>");
    }

    if !result.experience.is_empty() {
        html.push_str("<section><h2>Experience</h2>");
        for exp in &result.experience {
            html.push_str("<article class=\"entry\">");
            html.push_str(&format!("<h3>{}</h3>", escape(&exp.role)));
            html.push_str(&format!(
                "<p class=\"meta\">{} &middot; {}</p>",
                escape(&exp.company),
                escape(&exp.period)
            ));
            if !exp.description.is_empty() {
                html.push_str("<ul>");
                for bullet in &exp.description {
                    html.push_str(&format!("<li>{}</li>", escape(bullet)));
                }
                html.push_str("</ul>");
            }
            html.push_str("</article>");
        }
        html.push_str("</section>");
    }

    if !result.portfolio.is_empty() {
        html.push_str("<section><h2>Portfolio</h2>");
        for project in &result.portfolio {
            html.push_str("<article class=\"entry\">");
            html.push_str(&format!("<h3>{}</h3>", escape(&project.project_name)));
            html.push_str(&format!("<p>{}</p>", escape(&project.description)));
            if let Some(url) = project.url.as_deref().filter(|u| !u.trim().is_empty()) {
                html.push_str(&format!(
                    "<p class=\"meta\"><a href=\"{}\">View Project</a></p>",
                    escape(url)
                ));
            }
            html.push_str("</article>");
        }
        html.push_str("</section>");
    }

    if !result.education.is_empty() {
        html.push_str("<section><h2>Education</h2>");
        for edu in &result.education {
            html.push_str("<article class=\"entry\">");
            html.push_str(&format!("<h3>{}</h3>", escape(&edu.degree)));
            html.push_str(&format!(
                "<p class=\"meta\">{} &middot; {}</p>",
                escape(&edu.institution),
                escape(&edu.year)
            ));
            if let Some(details) = edu.details.as_deref().filter(|d| !d.trim().is_empty()) {
                html.push_str(&format!("<p class=\"details\">{}</p>", escape(details)));
            }
            html.push_str("</article>");
        }
        html.push_str("</section>");
    }

    if !result.certifications.is_empty() {
        html.push_str("<section><h2>Certifications</h2><ul>");
        for cert in &result.certifications {
            html.push_str(&format!("<li>{}</li>", escape(cert)));
        }
        html.push_str("</ul></section>");
    }

    if !result.hobbies.is_empty() {
        html.push_str("<section><h2>Hobbies &amp; Key Interests</h2>");
        let joined = result
            .hobbies
            .iter()
            .map(|h| escape(h))
            .collect::<Vec<_>>()
            .join(" &middot; ");
        html.push_str(&format!("<p>{joined}</p>"));
        html.push_str("</section>");
    }

    html.push_str("</main></div>");
    html
}
