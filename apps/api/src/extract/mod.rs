//! Resume upload extraction — turns an uploaded document into the plain
//! resume text the generation core consumes.
//!
//! PDFs are extracted in-process; plain-text files pass through unchanged.
//! Word-processor formats are not handled here and are rejected, keeping the
//! richer file-text extractor an external collaborator. Empty extracted text
//! is accepted as degraded input, not an error.

pub mod handlers;

use crate::errors::AppError;

/// Extracts plain resume text from an uploaded file, dispatching on the
/// file-name extension.
pub fn extract_resume_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    match extension(file_name).as_deref() {
        Some("pdf") => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("Failed to extract PDF text: {e}"))),
        Some("txt") | Some("text") => String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Extraction("Text file is not valid UTF-8".to_string())),
        _ => Err(AppError::Extraction(format!(
            "Unsupported file format: '{file_name}'. Upload a .pdf or .txt file, \
             or paste the resume text directly."
        ))),
    }
}

fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_resume_text("resume.txt", b"BU CS grad, data pipelines.").unwrap();
        assert_eq!(text, "BU CS grad, data pipelines.");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let text = extract_resume_text("Resume.TXT", b"some resume").unwrap();
        assert_eq!(text, "some resume");
    }

    #[test]
    fn test_empty_text_file_is_accepted() {
        // Degraded fallback: an empty resume is the caller's problem to
        // surface, not an extraction failure.
        let text = extract_resume_text("resume.txt", b"").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_docx_is_rejected() {
        let err = extract_resume_text("resume.docx", b"PK\x03\x04").unwrap_err();
        match err {
            AppError::Extraction(msg) => assert!(msg.contains("Unsupported file format")),
            other => panic!("expected Extraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        assert!(matches!(
            extract_resume_text("resume", b"text"),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_text_is_an_extraction_error() {
        assert!(matches!(
            extract_resume_text("resume.txt", &[0xff, 0xfe, 0x00]),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_corrupt_pdf_maps_to_extraction_error() {
        let err = extract_resume_text("resume.pdf", b"not a pdf at all").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
