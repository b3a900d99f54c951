//! PDF text extraction via pdf-extract.

use crate::errors::AppError;

/// Extracts page text from an in-memory PDF, pages in source order,
/// newline-separated.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::DocumentParse(format!("failed to read PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let err = extract_text(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }

    #[test]
    fn test_empty_input_is_a_parse_error() {
        assert!(extract_text(&[]).is_err());
    }
}
