pub mod health;
pub mod pages;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Body limit for the upload route. Sits above the configurable upload
/// ceiling so the handler's own size check produces the enveloped 400
/// instead of an extractor rejection.
const UPLOAD_BODY_LIMIT: usize = 64 * 1024 * 1024;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /health          service + database health
///
/// POST /projects        submit a project inquiry (public)
/// POST /contact         submit a contact form (public)
///
/// POST /admin/login     exchange credentials for a session token
/// GET  /admin/contacts  all contact submissions, newest first (admin)
/// GET  /admin/projects  all project inquiries, newest first (admin)
///
/// POST /artworks        create a portfolio artwork (admin)
/// GET  /artworks        list active artworks, newest first (public)
/// POST /upload          store a multipart file upload (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/projects", post(handlers::projects::submit_project))
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/admin/login", post(handlers::auth::login))
        .route("/admin/contacts", get(handlers::admin::list_contacts))
        .route("/admin/projects", get(handlers::admin::list_projects))
        .route(
            "/artworks",
            post(handlers::artworks::create_artwork).get(handlers::artworks::list_artworks),
        )
        .route(
            "/upload",
            post(handlers::upload::upload_file).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
