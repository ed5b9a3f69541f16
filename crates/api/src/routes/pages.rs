//! Static site routes.
//!
//! A fixed set of page paths maps one-to-one onto HTML files in the
//! public directory; everything else falls back to plain static-file
//! serving from the same directory. No templating.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Page routes plus the static-asset fallback.
///
/// ```text
/// GET /           -> index.html
/// GET /services   -> services.html
/// GET /portfolio  -> portfolio.html
/// GET /contact    -> contact.html
/// GET /*          -> any other asset under the public directory
/// ```
pub fn router(public_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route_service("/services", ServeFile::new(public_dir.join("services.html")))
        .route_service("/portfolio", ServeFile::new(public_dir.join("portfolio.html")))
        .route_service("/contact", ServeFile::new(public_dir.join("contact.html")))
        .fallback_service(ServeDir::new(public_dir))
}
