//! Request middleware.

pub mod auth;

pub use auth::{bearer_credential, require_access, require_session};
