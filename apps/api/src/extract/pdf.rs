//! Thin wrapper over the `pdf-extract` crate plus the merge rule for
//! multi-file uploads.

use crate::errors::AppError;

/// Extracts plain text from one in-memory PDF. An image-only PDF that
/// yields no text counts as a failure — downstream has nothing to work with.
pub fn extract_text_from_pdf(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        AppError::Extraction(format!("Failed to extract text from '{file_name}': {e}"))
    })?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(format!(
            "'{file_name}' contained no extractable text — scanned or image-only PDFs are not supported"
        )));
    }

    Ok(text)
}

/// Merges per-file extracted text in upload order: each file's text is
/// trimmed and the pieces are joined by one blank line.
pub fn merge_extracted_text(parts: &[String]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_joins_with_blank_line() {
        let parts = vec!["First resume page.".to_string(), "Second file.".to_string()];
        assert_eq!(
            merge_extracted_text(&parts),
            "First resume page.\n\nSecond file."
        );
    }

    #[test]
    fn test_merge_trims_each_part() {
        let parts = vec!["\n\nFirst\n".to_string(), "  Second  \n\n".to_string()];
        assert_eq!(merge_extracted_text(&parts), "First\n\nSecond");
    }

    #[test]
    fn test_merge_single_part_is_just_trimmed() {
        let parts = vec!["  only one  ".to_string()];
        assert_eq!(merge_extracted_text(&parts), "only one");
    }

    #[test]
    fn test_merge_preserves_upload_order() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(merge_extracted_text(&parts), "a\n\nb\n\nc");
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let err = extract_text_from_pdf("junk.pdf", b"not a pdf at all").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
