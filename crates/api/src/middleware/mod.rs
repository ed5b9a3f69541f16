//! Request extractors enforcing cross-cutting requirements.

pub mod auth;
