//! Repository for the `contact_submissions` table.

use retuco_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_submission::{ContactSubmission, NewContactSubmission};

const COLUMNS: &str = "id, name, email, subject, message, submitted_at";

/// Provides insert and read operations for contact form submissions.
pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Insert a new contact submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (name, email, subject, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a contact submission by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contact submissions, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total row count. Used by tests to assert rejected submissions
    /// write nothing.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(pool)
            .await
    }
}
