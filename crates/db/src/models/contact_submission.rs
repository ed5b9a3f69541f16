//! Contact form entity model and DTOs.

use retuco_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: Timestamp,
}

/// Raw request body for `POST /api/contact`. See
/// [`CreateProjectRequest`](crate::models::project_request::CreateProjectRequest)
/// for why the fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct CreateContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Validated insert payload for the repository.
#[derive(Debug)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
