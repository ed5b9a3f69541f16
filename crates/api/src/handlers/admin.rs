//! Handlers for the admin read endpoints.
//!
//! Both return every row of their table, newest first, and require a
//! verified admin session. No pagination: the dashboard consumes the
//! full list.

use axum::extract::State;
use axum::Json;
use retuco_db::models::contact_submission::ContactSubmission;
use retuco_db::models::project_request::ProjectRequest;
use retuco_db::repositories::{ContactSubmissionRepo, ProjectRequestRepo};

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/admin/contacts
pub async fn list_contacts(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ContactSubmission>>>> {
    let submissions = ContactSubmissionRepo::list_all(&state.pool).await?;
    Ok(Json(ApiResponse::ok(submissions)))
}

/// GET /api/admin/projects
pub async fn list_projects(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ProjectRequest>>>> {
    let requests = ProjectRequestRepo::list_all(&state.pool).await?;
    Ok(Json(ApiResponse::ok(requests)))
}
