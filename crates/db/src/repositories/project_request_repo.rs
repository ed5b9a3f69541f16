//! Repository for the `project_requests` table.

use retuco_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_request::{NewProjectRequest, ProjectRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, client_name, client_email, client_phone, service_type, \
    budget_range, timeline, project_details, reference_links, submitted_at";

/// Provides insert and read operations for project inquiries.
pub struct ProjectRequestRepo;

impl ProjectRequestRepo {
    /// Insert a new project request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewProjectRequest,
    ) -> Result<ProjectRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_requests \
                (client_name, client_email, client_phone, service_type, \
                 budget_range, timeline, project_details, reference_links) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRequest>(&query)
            .bind(&input.client_name)
            .bind(&input.client_email)
            .bind(&input.client_phone)
            .bind(&input.service_type)
            .bind(&input.budget_range)
            .bind(&input.timeline)
            .bind(&input.project_details)
            .bind(&input.reference_links)
            .fetch_one(pool)
            .await
    }

    /// Find a project request by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_requests WHERE id = $1");
        sqlx::query_as::<_, ProjectRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all project requests, newest submission first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProjectRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_requests ORDER BY submitted_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total row count. Used by tests to assert rejected submissions
    /// write nothing.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_requests")
            .fetch_one(pool)
            .await
    }
}
