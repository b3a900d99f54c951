//! DOCX text extraction via docx-rs.
//!
//! Walks the document body in order and flattens each paragraph's runs to a
//! line of text; paragraphs are joined with newlines. Tables and other
//! non-paragraph children are ignored — résumé content lives in paragraphs.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Extracts paragraph text from an in-memory DOCX, paragraphs in document
/// order, newline-separated.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AppError::DocumentParse(format!("failed to read DOCX: {e}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            paragraphs.push(paragraph_text(&p));
        }
    }

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(p: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &p.children {
        match child {
            ParagraphChild::Run(r) => append_run_text(&mut text, r),
            ParagraphChild::Hyperlink(h) => {
                // Hyperlink children are ParagraphChild again; only runs carry text.
                for nested in &h.children {
                    if let ParagraphChild::Run(r) = nested {
                        append_run_text(&mut text, r);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn append_run_text(out: &mut String, run: &docx_rs::Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let err = extract_text(b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }

    #[test]
    fn test_empty_input_is_a_parse_error() {
        assert!(extract_text(&[]).is_err());
    }

    #[test]
    fn test_paragraph_text_flattens_runs() {
        let p = docx_rs::Paragraph::new()
            .add_run(docx_rs::Run::new().add_text("Jane "))
            .add_run(docx_rs::Run::new().add_text("Doe"));
        assert_eq!(paragraph_text(&p), "Jane Doe");
    }

    #[test]
    fn test_built_document_round_trips_paragraphs() {
        let docx = docx_rs::Docx::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("Jane Doe")))
            .add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("Python developer")),
            );

        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("pack docx");

        let text = extract_text(buf.get_ref()).unwrap();
        assert_eq!(text, "Jane Doe\nPython developer");
    }
}
