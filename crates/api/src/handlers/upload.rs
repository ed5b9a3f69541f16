//! Handler for `/api/upload`: multipart file ingestion.

use axum::extract::{Multipart, State};
use axum::Json;
use retuco_core::upload;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Metadata returned for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Original client-supplied filename (metadata only, never a path).
    pub name: String,
    /// Path the file was stored under.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// POST /api/upload
///
/// Accept a multipart request with a single `file` field. The declared
/// MIME type must be on the allow-list and the payload under the
/// configured ceiling; both checks run before anything is written to
/// permanent storage. The file lands in the upload directory (created
/// on demand) under a generated name.
pub async fn upload_file(
    admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<UploadedFile>>> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field.content_type().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file = Some((original_name, mime_type, data.to_vec()));
    }

    let (original_name, mime_type, data) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    if !upload::is_allowed_mime(&mime_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{mime_type}' is not allowed"
        )));
    }

    let size = data.len() as u64;
    if size > state.config.max_upload_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} byte upload limit",
            state.config.max_upload_bytes
        )));
    }

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Upload directory error: {e}")))?;

    let stored_name = upload::stored_name(&original_name, &mime_type);
    let stored_path = state.config.upload_dir.join(&stored_name);
    tokio::fs::write(&stored_path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("File write error: {e}")))?;

    tracing::info!(
        admin_id = admin.user_id,
        stored_path = %stored_path.display(),
        size,
        "File uploaded",
    );

    Ok(Json(ApiResponse::ok_with(
        "File uploaded successfully",
        UploadedFile {
            name: original_name,
            path: stored_path.to_string_lossy().to_string(),
            size,
            mime_type,
        },
    )))
}
