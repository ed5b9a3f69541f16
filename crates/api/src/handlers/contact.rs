//! Handlers for the `/api/contact` resource.

use axum::extract::State;
use axum::Json;
use retuco_core::types::DbId;
use retuco_core::validation::required;
use retuco_db::models::contact_submission::{CreateContactSubmission, NewContactSubmission};
use retuco_db::repositories::ContactSubmissionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload returned on a successful contact submission.
#[derive(Debug, Serialize)]
pub struct ContactCreated {
    #[serde(rename = "submissionId")]
    pub submission_id: DbId,
}

/// POST /api/contact
///
/// Validate the contact form and insert a `contact_submissions` row.
/// All four fields are required; absent and empty both reject before
/// any store write.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContactSubmission>,
) -> AppResult<Json<ApiResponse<ContactCreated>>> {
    let new_submission = NewContactSubmission {
        name: required("name", input.name.as_deref())?,
        email: required("email", input.email.as_deref())?,
        subject: required("subject", input.subject.as_deref())?,
        message: required("message", input.message.as_deref())?,
    };

    let submission = ContactSubmissionRepo::create(&state.pool, &new_submission).await?;

    tracing::info!(
        contact_submission_id = submission.id,
        "Contact form submitted",
    );

    Ok(Json(ApiResponse::ok_with(
        "Message sent successfully. We will get back to you soon.",
        ContactCreated {
            submission_id: submission.id,
        },
    )))
}
