//! Request handlers, one submodule per resource.
//!
//! Each handler validates its input, delegates to the corresponding
//! repository in `retuco-db`, and maps failures via
//! [`AppError`](crate::error::AppError).

pub mod admin;
pub mod artworks;
pub mod auth;
pub mod contact;
pub mod projects;
pub mod upload;
