//! Orchestrator: runs the Text Extractor, then every field detector.

use std::path::Path;

use thiserror::Error;

use crate::extraction::contact::extract_contact_info;
use crate::extraction::education::extract_education;
use crate::extraction::name::extract_name;
use crate::extraction::sections::{extract_experience, extract_projects};
use crate::extraction::skills::extract_skills;
use crate::extraction::social::extract_social_handles;
use crate::extraction::text::TextExtractor;
use crate::models::resume::ParsedResume;

const PREVIEW_CHARS: usize = 500;
const PREVIEW_ELLIPSIS: &str = "...";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Could not extract text from PDF")]
    NoText,
}

/// Parses the stored document at `path`.
///
/// A file that cannot be read is an I/O error; a document that reads but
/// yields no text is [`ParseError::NoText`].
pub fn parse_resume(
    path: &Path,
    extractor: &dyn TextExtractor,
) -> Result<ParsedResume, ParseError> {
    let bytes = std::fs::read(path)?;
    parse_document(&bytes, extractor)
}

/// Parses an in-memory document.
pub fn parse_document(
    bytes: &[u8],
    extractor: &dyn TextExtractor,
) -> Result<ParsedResume, ParseError> {
    let text = extractor.extract(bytes);
    if text.is_empty() {
        return Err(ParseError::NoText);
    }
    Ok(parse_text(&text))
}

/// Field Extractor: builds the record from plain text.
///
/// Pure and deterministic; the same text always yields the same record.
pub fn parse_text(text: &str) -> ParsedResume {
    ParsedResume {
        name: extract_name(text),
        contact: extract_contact_info(text),
        social_handles: extract_social_handles(text),
        education: extract_education(text),
        skills: extract_skills(text),
        projects: extract_projects(text),
        experience: extract_experience(text),
        raw_text_preview: raw_text_preview(text),
    }
}

/// First 500 characters of `text`, with `...` appended when it was cut.
pub fn raw_text_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{PREVIEW_ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
