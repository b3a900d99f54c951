// Document text extraction.
// Dispatches on the filename extension: PDF via pdf-extract, DOCX via
// docx-rs, anything else yields empty text. CPU-bound — callers on the
// async path wrap the whole batch in tokio::task::spawn_blocking.

pub mod docx;
pub mod pdf;

use crate::errors::AppError;

/// Declared format of an uploaded document, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unknown,
}

impl DocumentFormat {
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if lower.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Unknown
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, DocumentFormat::Unknown)
    }
}

/// Extracts the plain text of a document held fully in memory.
///
/// Unrecognized extensions yield empty text rather than an error — the
/// upload layer is expected to have filtered those out already. Malformed
/// content of a recognized format is a `DocumentParse` error and must
/// propagate to the caller so a batch can skip that one document.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    match DocumentFormat::from_file_name(file_name) {
        DocumentFormat::Pdf => pdf::extract_text(bytes),
        DocumentFormat::Docx => docx::extract_text(bytes),
        DocumentFormat::Unknown => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_pdf_extension() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.pdf"),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_format_from_docx_extension() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.docx"),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_format_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_file_name("Resume.PDF"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("Resume.Docx"),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_format_unknown_extensions() {
        for name in ["resume.txt", "resume.doc", "resume", "resume.pdf.bak"] {
            assert_eq!(
                DocumentFormat::from_file_name(name),
                DocumentFormat::Unknown,
                "{name} should be unknown"
            );
        }
    }

    #[test]
    fn test_unknown_format_extracts_to_empty_text() {
        let text = extract_text("notes.txt", b"plain text body").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_malformed_docx_propagates_parse_error() {
        let err = extract_text("resume.docx", b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }
}
