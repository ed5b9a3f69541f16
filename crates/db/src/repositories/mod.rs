//! Per-table repositories. Each is a stateless unit struct whose
//! methods take the pool explicitly.

pub mod admin_user_repo;
pub mod artwork_repo;
pub mod contact_submission_repo;
pub mod project_request_repo;

pub use admin_user_repo::AdminUserRepo;
pub use artwork_repo::ArtworkRepo;
pub use contact_submission_repo::ContactSubmissionRepo;
pub use project_request_repo::ProjectRequestRepo;
