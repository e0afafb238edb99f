//! Axum route handlers for résumé uploads.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::parser::parse_resume;
use crate::extraction::upload::{read_upload, store_upload, NO_FILE_SELECTED};
use crate::models::resume::ParsedResume;
use crate::state::AppState;

/// POST /upload
///
/// Accepts a multipart form with a `file` field holding a `.pdf` document and
/// returns the extracted record. The document is stored in the upload
/// directory only for the duration of the parse and is always removed.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParsedResume>, AppError> {
    let multipart = multipart.map_err(|_| AppError::Validation(NO_FILE_SELECTED.to_string()))?;
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Received resume upload"
    );

    let upload_dir = state.config.upload_dir.clone();
    let extractor = state.extractor.clone();

    // PDF parsing is CPU-bound; keep it off the async workers.
    let parsed = tokio::task::spawn_blocking(move || -> Result<ParsedResume, AppError> {
        let stored = store_upload(&upload_dir, &upload)
            .map_err(|e| AppError::Processing(e.to_string()))?;
        let result = parse_resume(stored.path(), extractor.as_ref());
        if let Err(e) = stored.close() {
            warn!("Failed to remove uploaded file: {e}");
        }
        Ok(result?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Parse task failed: {e}")))??;

    Ok(Json(parsed))
}
