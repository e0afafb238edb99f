//! Multipart intake and transient storage of uploaded documents.

use std::io::Write;
use std::path::Path;

use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use tempfile::{Builder, NamedTempFile};

use crate::errors::AppError;

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

pub const NO_FILE_SELECTED: &str = "No file selected";
pub const ONLY_PDF_SUPPORTED: &str = "Only PDF files are supported";

const FALLBACK_FILENAME: &str = "upload.pdf";

/// An accepted upload: a `.pdf` filename and its raw bytes.
#[derive(Debug)]
pub struct UploadedFile {
    /// Sanitised client filename; safe to use as a path component.
    pub filename: String,
    pub data: Bytes,
}

/// Reads the `file` field from a multipart form and validates its filename.
///
/// Other fields are drained and ignored. `max_bytes` is only used to word
/// the error when the body limit trips.
pub async fn read_upload(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<UploadedFile, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) || upload.is_some() {
            field.bytes().await.map_err(|e| multipart_error(e, max_bytes))?;
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;
        upload = Some((filename, data));
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation(NO_FILE_SELECTED.to_string()))?;
    let filename = validate_filename(&filename)?;

    Ok(UploadedFile { filename, data })
}

/// Rejects empty and non-`.pdf` names, then sanitises what is left.
pub fn validate_filename(raw: &str) -> Result<String, AppError> {
    if raw.is_empty() {
        return Err(AppError::Validation(NO_FILE_SELECTED.to_string()));
    }
    if !raw.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(ONLY_PDF_SUPPORTED.to_string()));
    }
    Ok(sanitize_filename(raw))
}

/// Reduces a client-supplied filename to `[A-Za-z0-9._-]`.
///
/// Directory components are stripped, whitespace becomes `_`, other
/// characters are dropped, and leading/trailing `.`/`_` are trimmed.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
            _ => None,
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() || !trimmed.contains('.') {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Writes the upload into `dir` as `<timestamp>_<random>_<filename>`.
///
/// The returned guard deletes the file when dropped, so every exit path
/// (success, error, or panic in the parser) leaves the directory clean.
pub fn store_upload(dir: &Path, upload: &UploadedFile) -> std::io::Result<NamedTempFile> {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let mut file = Builder::new()
        .prefix(&format!("{stamp}_"))
        .suffix(&format!("_{}", upload.filename))
        .tempfile_in(dir)?;
    file.write_all(&upload.data)?;
    file.flush()?;
    Ok(file)
}

fn multipart_error(err: axum::extract::multipart::MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_bytes)
    } else {
        AppError::Validation(format!("Failed to read upload: {}", err.body_text()))
    }
}
