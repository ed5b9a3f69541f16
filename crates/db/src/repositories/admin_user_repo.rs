//! Repository for the `admin_users` table.
//!
//! The application only reads credentials; provisioning admin accounts
//! happens out of band.

use sqlx::PgPool;

use crate::models::admin_user::AdminUser;

const COLUMNS: &str = "id, username, password_hash, created_at";

pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Find an admin user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE username = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
