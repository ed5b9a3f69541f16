//! Shared response envelope for API handlers.
//!
//! Every JSON response, success or failure, is shaped
//! `{ "success": bool, "message"?: string, "data"?: ... }` so callers
//! can branch on the `success` flag uniformly. Use [`ApiResponse`]
//! instead of ad-hoc `serde_json::json!` to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// Standard `{ success, message?, data? }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with a payload and no message.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success with a human-readable message and a payload.
    pub fn ok_with(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success with a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
