// All LLM prompt constants for the tailoring module.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Role portion of the tailoring system prompt. The JSON-only fragment is
/// appended by `tailor_system`.
const TAILOR_SYSTEM_ROLE: &str =
    "You are an expert-level resume creator and career coach, specializing in \
    crafting resumes that not only pass through Applicant Tracking Systems (ATS) \
    but also capture the attention of human recruiters.";

/// Builds the full system prompt for the tailoring call.
pub fn tailor_system() -> String {
    format!("{TAILOR_SYSTEM_ROLE} {JSON_ONLY_SYSTEM}")
}

/// Tailoring prompt, split at the two insertion points. `build_tailor_prompt`
/// concatenates the segments around the user inputs; placeholder tokens in
/// user text must pass through untouched, so nothing is ever `.replace`d.
const PROMPT_HEAD: &str = r#"Your task is to meticulously analyze the provided resume (which may be a combination of multiple documents) and the job description, then generate a suite of optimized application materials.

Your primary goal is to make the candidate stand out. You must deeply analyze the job description to identify the most critical skills, qualifications, experiences, and even the underlying company culture. Then, strategically weave these elements throughout the resume and cover letter, ensuring every word serves a purpose.

Resume (merged from one or more documents):
"#;

const PROMPT_JD_HEADER: &str = "\n\nJob Description:\n";

const PROMPT_INSTRUCTIONS: &str = r#"

Instructions:
1.  **Initial Analysis:** First, analyze the original resume and the job description.
    a.  Calculate an initial ATS score based on how well the original resume matches the job description.
    b.  Identify and list the top keywords that are common to both the original resume and the job description.
2.  **Parse Resume:** Accurately parse the entire input resume into its constituent parts. Treat the provided resume text as a single, consolidated document.
3.  **Deep Job Description Analysis:** Identify the most important keywords, required skills (hard and soft), key responsibilities, and qualifications from the job description. Go beyond surface-level matching.
4.  **Skill Matching & Culling:** Compare the job's required skills with the candidate's skills. Add relevant skills from the job description that the candidate likely possesses but hasn't listed. Crucially, include only the top 10 most relevant skills for the job to ensure focus.
5.  **Tailor Experience for Impact:** Review all work experience from the original resume. Do not remove any work experience entries. For each role, rephrase the bullet points to directly address the requirements of the job description. Use powerful action verbs and quantify achievements with metrics wherever possible (e.g., "Increased sales by 15%" or "Reduced processing time by 25%"). The goal is to highlight transferable skills and align the candidate's entire history with the target role, making it short, simple, informative, and compelling. Ensure each bullet point is a separate string in the "description" array.
6.  **Create Portfolio Section:** Identify and extract any projects mentioned in the resume. Format them for a new "Portfolio" section to showcase practical experience. If no projects are mentioned, leave this section empty.
7.  **Generate a Standout Cover Letter:** Write a professional, concise, and compelling cover letter. It must be tailored to the job description and company. It should highlight the candidate's most relevant qualifications from the tailored resume and express genuine, well-researched interest in the role and company. The output should be a single string with newlines separating paragraphs.
8.  **Rewrite for Excellence:** Review and rewrite the entire resume for clarity, impact, and a professional tone. The final output must be polished, free of grammatical errors, and formatted to be easily readable by both ATS and humans. The final resume should not exceed a maximum of 3 pages.
9.  **Final ATS Score & Actionable Suggestions:** Calculate a new, improved ATS match score for the tailored resume. Provide a list of specific, actionable suggestions for what the user could do to further improve their resume and cover letter to increase their chances of getting an interview.
10. **Format Output:** Return the complete, tailored resume, the cover letter, initial and tailored ATS scores, matched keywords, and suggestions as a single JSON object with this EXACT schema (no extra fields):
{
  "name": "...",
  "phone": "...",
  "email": "...",
  "city": "...",
  "linkedin": "...",
  "objective": "...",
  "skills": ["..."],
  "experience": [
    {"role": "...", "company": "...", "period": "...", "description": ["..."]}
  ],
  "education": [
    {"degree": "...", "institution": "...", "year": "...", "details": "optional, may be null"}
  ],
  "portfolio": [
    {"projectName": "...", "description": "one sentence", "url": "optional, may be null"}
  ],
  "certifications": ["..."],
  "hobbies": ["..."],
  "coverLetter": "paragraphs separated by newlines",
  "initialAtsScore": 0,
  "tailoredAtsScore": 0,
  "matchedKeywords": ["..."],
  "improvementSuggestions": ["..."]
}
Ensure all fields are populated correctly."#;

/// Header for the optional modification block; the user's request follows it.
const MODIFICATION_HEADER: &str = r#"

**User Modifications:**
In addition to the above, please apply the following modifications based on the user's request:
"#;

/// Assembles the tailoring prompt around the collected inputs. Each input is
/// appended exactly once, in a single pass.
pub fn build_tailor_prompt(
    resume_text: &str,
    jd_text: &str,
    modification_prompt: Option<&str>,
) -> String {
    let modification = modification_prompt.map(str::trim).filter(|m| !m.is_empty());

    let mut prompt = String::with_capacity(
        PROMPT_HEAD.len()
            + resume_text.len()
            + PROMPT_JD_HEADER.len()
            + jd_text.len()
            + PROMPT_INSTRUCTIONS.len()
            + modification.map_or(0, |m| MODIFICATION_HEADER.len() + m.len()),
    );
    prompt.push_str(PROMPT_HEAD);
    prompt.push_str(resume_text);
    prompt.push_str(PROMPT_JD_HEADER);
    prompt.push_str(jd_text);
    prompt.push_str(PROMPT_INSTRUCTIONS);

    if let Some(modification) = modification {
        prompt.push_str(MODIFICATION_HEADER);
        prompt.push_str(modification);
    }

    prompt
}
