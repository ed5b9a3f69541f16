//! Project inquiry entity model and DTOs.

use retuco_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectRequest {
    pub id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub budget_range: String,
    pub timeline: String,
    pub project_details: String,
    pub reference_links: String,
    pub submitted_at: Timestamp,
}

/// Raw request body for `POST /api/projects`.
///
/// Every field is optional at the deserialization layer so the handler
/// can reject absent and empty values with the same 400, instead of a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub service_type: Option<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
    pub project_details: Option<String>,
    pub references: Option<String>,
}

/// Validated insert payload for the repository.
#[derive(Debug)]
pub struct NewProjectRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub budget_range: String,
    pub timeline: String,
    pub project_details: String,
    pub reference_links: String,
}
