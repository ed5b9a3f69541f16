//! Portfolio artwork entity model and DTOs.

use retuco_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artworks` table.
///
/// `technologies` is stored as JSON text, exactly as serialized at
/// creation time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: String,
    pub media_type: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub website_url: Option<String>,
    pub prototype_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Raw request body for `POST /api/artworks`.
///
/// Only title, category, and description are required; everything else
/// is stored as provided.
#[derive(Debug, Default, Deserialize)]
pub struct CreateArtwork {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub media_type: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub website_url: Option<String>,
    pub prototype_url: Option<String>,
}

/// Validated insert payload for the repository.
#[derive(Debug)]
pub struct NewArtwork {
    pub title: String,
    pub category: String,
    pub description: String,
    /// JSON-serialized tag list.
    pub technologies: String,
    pub media_type: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub website_url: Option<String>,
    pub prototype_url: Option<String>,
}
