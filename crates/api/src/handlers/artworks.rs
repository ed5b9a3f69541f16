//! Handlers for the `/api/artworks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use retuco_core::types::DbId;
use retuco_core::validation::required;
use retuco_db::models::artwork::{Artwork, CreateArtwork, NewArtwork};
use retuco_db::repositories::ArtworkRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload returned on successful artwork creation.
#[derive(Debug, Serialize)]
pub struct ArtworkCreated {
    #[serde(rename = "artworkId")]
    pub artwork_id: DbId,
}

/// POST /api/artworks
///
/// Create a portfolio artwork. Requires an admin session. Title,
/// category, and description are required; the technology tag list is
/// serialized to JSON text for storage; everything else is stored
/// as provided.
pub async fn create_artwork(
    admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateArtwork>,
) -> AppResult<(StatusCode, Json<ApiResponse<ArtworkCreated>>)> {
    let technologies = serde_json::to_string(&input.technologies.unwrap_or_default())
        .map_err(|e| AppError::InternalError(format!("Tag serialization error: {e}")))?;

    let new_artwork = NewArtwork {
        title: required("title", input.title.as_deref())?,
        category: required("category", input.category.as_deref())?,
        description: required("description", input.description.as_deref())?,
        technologies,
        media_type: input.media_type,
        image_url: input.image_url,
        video_url: input.video_url,
        website_url: input.website_url,
        prototype_url: input.prototype_url,
    };

    let artwork = ArtworkRepo::create(&state.pool, &new_artwork).await?;

    tracing::info!(
        artwork_id = artwork.id,
        admin_id = admin.user_id,
        category = %artwork.category,
        "Artwork created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with(
            "Artwork created successfully",
            ArtworkCreated {
                artwork_id: artwork.id,
            },
        )),
    ))
}

/// GET /api/artworks
///
/// List active artworks, newest first. Public: this feeds the
/// portfolio page.
pub async fn list_artworks(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Artwork>>>> {
    let artworks = ArtworkRepo::list_active(&state.pool).await?;
    Ok(Json(ApiResponse::ok(artworks)))
}
