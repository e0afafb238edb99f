// Résumé field extraction.
// Text Extractor (document bytes -> text) feeds independent, stateless
// detectors (text -> one field each); `parser` assembles the record.
// `upload` and `handlers` are the HTTP surface around the pipeline.

pub mod contact;
pub mod education;
pub mod handlers;
pub mod name;
pub mod parser;
pub mod patterns;
pub mod sections;
pub mod skills;
pub mod social;
pub mod text;
pub mod upload;

pub use text::{PdfTextExtractor, TextExtractor};
