use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::resume::{attachment_disposition, load_resume, RESUME_CONTENT_TYPE};
use crate::state::AppState;

/// GET /resume
///
/// Streams the resume PDF as an attachment. 404 when the file is absent.
pub async fn handle_download_resume(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let filename = state.content.profile.resume_filename.clone();
    let path = state.config.resume_path(&filename);

    let resume = tokio::task::spawn_blocking(move || load_resume(&path, &filename))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .ok_or_else(|| AppError::NotFound("Resume is not available".to_string()))?;

    info!("Serving resume ({} bytes)", resume.bytes.len());

    let disposition = HeaderValue::from_str(&attachment_disposition(&resume.filename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(RESUME_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(resume.bytes),
    ))
}
