//! Handlers for the `/api/projects` resource.

use axum::extract::State;
use axum::Json;
use retuco_core::types::DbId;
use retuco_core::validation::{optional_or_empty, required};
use retuco_db::models::project_request::{CreateProjectRequest, NewProjectRequest};
use retuco_db::repositories::ProjectRequestRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload returned on a successful project submission.
#[derive(Debug, Serialize)]
pub struct ProjectCreated {
    #[serde(rename = "projectId")]
    pub project_id: DbId,
}

/// POST /api/projects
///
/// Validate the inquiry form and insert a `project_requests` row.
/// Every required field must be present and non-empty before the store
/// is touched; the optional reference-links field defaults to `''`.
pub async fn submit_project(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<Json<ApiResponse<ProjectCreated>>> {
    let new_request = NewProjectRequest {
        client_name: required("clientName", input.client_name.as_deref())?,
        client_email: required("clientEmail", input.client_email.as_deref())?,
        client_phone: required("clientPhone", input.client_phone.as_deref())?,
        service_type: required("serviceType", input.service_type.as_deref())?,
        budget_range: required("budgetRange", input.budget_range.as_deref())?,
        timeline: required("timeline", input.timeline.as_deref())?,
        project_details: required("projectDetails", input.project_details.as_deref())?,
        reference_links: optional_or_empty(input.references.as_deref()),
    };

    let request = ProjectRequestRepo::create(&state.pool, &new_request).await?;

    tracing::info!(
        project_request_id = request.id,
        service_type = %request.service_type,
        "Project request submitted",
    );

    Ok(Json(ApiResponse::ok_with(
        "Project request submitted successfully. We will contact you within 24 hours.",
        ProjectCreated {
            project_id: request.id,
        },
    )))
}
