//! Repository for the `artworks` table.

use sqlx::PgPool;

use crate::models::artwork::{Artwork, NewArtwork};

const COLUMNS: &str = "\
    id, title, category, description, technologies, media_type, \
    image_url, video_url, website_url, prototype_url, is_active, created_at";

/// Provides insert and listing operations for portfolio artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, returning the created row. New artworks
    /// are active by default.
    pub async fn create(pool: &PgPool, input: &NewArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks \
                (title, category, description, technologies, media_type, \
                 image_url, video_url, website_url, prototype_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(&input.media_type)
            .bind(&input.image_url)
            .bind(&input.video_url)
            .bind(&input.website_url)
            .bind(&input.prototype_url)
            .fetch_one(pool)
            .await
    }

    /// List active artworks, newest first. Inactive rows never leave
    /// the database.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Artwork>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artworks WHERE is_active \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Artwork>(&query).fetch_all(pool).await
    }
}
