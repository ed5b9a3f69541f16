//! Admin credential model.

use retuco_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `admin_users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// The login handler returns only the id and username.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}
