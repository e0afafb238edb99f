//! Text Extractor: turns document bytes into one plain-text string.
//!
//! Failure is recoverable: a corrupt, encrypted, or otherwise unreadable
//! document yields `""`, and the caller decides what an empty result means.

use std::panic;

use tracing::warn;

/// Pluggable text-extraction backend. Default: [`PdfTextExtractor`].
pub trait TextExtractor: Send + Sync {
    /// Plain text of `bytes`, pages in order, each followed by `\n`.
    /// Returns `""` when the document cannot be read.
    fn extract(&self, bytes: &[u8]) -> String;
}

/// `pdf-extract` backed extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        extract_text(bytes)
    }
}

/// Extracts the text of an in-memory PDF.
///
/// `pdf-extract` can panic on malformed input; a panic is treated like any
/// other extraction error.
pub fn extract_text(bytes: &[u8]) -> String {
    let extracted = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
    let pages = match extracted {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            warn!("Error extracting text from PDF: {e}");
            return String::new();
        }
        Err(_) => {
            warn!("PDF text extraction panicked; treating document as unreadable");
            return String::new();
        }
    };

    join_pages(pages)
}

fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one page per entry of `pages`, each showing that text.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_garbage_bytes_yield_empty_string() {
        assert_eq!(extract_text(b"definitely not a pdf"), "");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(extract_text(&[]), "");
    }

    #[test]
    fn test_truncated_pdf_header_yields_empty_string() {
        assert_eq!(extract_text(b"%PDF-1.5\n%%EOF"), "");
    }

    #[test]
    fn test_pages_are_kept_in_order() {
        let text = extract_text(&build_pdf(&["Alpha", "Bravo"]));
        let alpha = text.find("Alpha").expect("first page text");
        let bravo = text.find("Bravo").expect("second page text");
        assert!(alpha < bravo);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_join_pages_appends_line_break_per_page() {
        let joined = join_pages(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(joined, "one\ntwo\n");
    }

    #[test]
    fn test_join_pages_of_nothing_is_empty() {
        assert_eq!(join_pages(Vec::<String>::new()), "");
    }
}
