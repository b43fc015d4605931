//! Input validation for the tailoring pipeline. Failures block the request
//! before any extraction or model call happens.

use crate::errors::AppError;

/// Minimum job-description length in characters.
pub const JD_MIN_CHARS: usize = 50;
/// Maximum job-description length in characters.
pub const JD_MAX_CHARS: usize = 10_000;
/// Per-file upload ceiling: 4 MB.
pub const MAX_FILE_SIZE_BYTES: usize = 4 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";

/// Validates the text inputs of a tailor request.
pub fn validate_tailor_inputs(resume_text: &str, jd_text: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty — paste your resume or upload a PDF first".to_string(),
        ));
    }

    let jd_chars = jd_text.chars().count();
    if jd_chars < JD_MIN_CHARS {
        return Err(AppError::Validation(format!(
            "jd_text must be at least {JD_MIN_CHARS} characters — please provide a more detailed job description"
        )));
    }
    if jd_chars > JD_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "jd_text must be at most {JD_MAX_CHARS} characters"
        )));
    }

    Ok(())
}

/// Validates one uploaded résumé file before extraction: size ceiling and
/// PDF type, checked against both the declared content type and the file's
/// magic bytes.
pub fn validate_upload(
    file_name: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::Validation(format!(
            "File '{file_name}' is empty"
        )));
    }

    if data.len() > MAX_FILE_SIZE_BYTES {
        return Err(AppError::Validation(format!(
            "File '{file_name}' exceeds the 4MB size limit"
        )));
    }

    let declared_pdf = content_type
        .map(|ct| ct.eq_ignore_ascii_case(PDF_MIME))
        .unwrap_or(false);
    let sniffed_pdf = infer::get(data)
        .map(|kind| kind.mime_type() == PDF_MIME)
        .unwrap_or(false);

    if !declared_pdf && !sniffed_pdf {
        return Err(AppError::Validation(format!(
            "File '{file_name}' is not a PDF — only .pdf files are accepted"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JD: &str = "Seeking a Python/SQL analyst with 2+ years of experience \
        building dashboards and reporting pipelines for ecommerce teams.";

    // Smallest byte prefix `infer` recognizes as a PDF.
    const PDF_MAGIC: &[u8] = b"%PDF-1.4\n";

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_tailor_inputs("Jane Doe, 5 years Python, SQL", VALID_JD).is_ok());
    }

    #[test]
    fn test_empty_resume_rejected() {
        let err = validate_tailor_inputs("   ", VALID_JD).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_short_jd_rejected() {
        let err = validate_tailor_inputs("resume", "too short").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_oversized_jd_rejected() {
        let jd = "x".repeat(JD_MAX_CHARS + 1);
        let err = validate_tailor_inputs("resume", &jd).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_jd_at_boundaries_accepted() {
        assert!(validate_tailor_inputs("resume", &"x".repeat(JD_MIN_CHARS)).is_ok());
        assert!(validate_tailor_inputs("resume", &"x".repeat(JD_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_pdf_magic_bytes_accepted_without_content_type() {
        assert!(validate_upload("resume.pdf", None, PDF_MAGIC).is_ok());
    }

    #[test]
    fn test_declared_pdf_content_type_accepted() {
        assert!(validate_upload("resume.pdf", Some("application/pdf"), b"%PDF-1.7").is_ok());
    }

    #[test]
    fn test_non_pdf_rejected() {
        let err = validate_upload("resume.docx", Some("text/plain"), b"just some text").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_oversize_file_rejected() {
        let mut data = b"%PDF-1.4\n".to_vec();
        data.resize(MAX_FILE_SIZE_BYTES + 1, 0);
        let err = validate_upload("big.pdf", Some("application/pdf"), &data).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = validate_upload("empty.pdf", Some("application/pdf"), b"").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
