//! Handlers for `/api/admin/login`.

use axum::extract::State;
use axum::Json;
use retuco_core::error::CoreError;
use retuco_core::types::DbId;
use retuco_db::repositories::AdminUserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /api/admin/login`.
///
/// Fields are optional at the deserialization layer so a missing field
/// is a 400, not a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login payload: the session token plus non-secret
/// identity fields.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: AdminInfo,
}

/// Public admin info embedded in [`LoginData`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub username: String,
}

/// The one 401 used for every authentication failure. An unknown
/// username and a wrong password must be indistinguishable to the
/// caller.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

/// POST /api/admin/login
///
/// Authenticate with username + password. Returns a signed session
/// token for the admin endpoints.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginData>>> {
    let (username, password) = match (input.username.as_deref(), input.password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::BadRequest(
                "Username and password are required".into(),
            ))
        }
    };

    let user = AdminUserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid_credentials());
    }

    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = user.id, "Admin login succeeded");

    Ok(Json(ApiResponse::ok_with(
        "Login successful",
        LoginData {
            token,
            user: AdminInfo {
                id: user.id,
                username: user.username,
            },
        },
    )))
}
