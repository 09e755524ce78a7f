//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - SSO login and the current identity
//! - Dashboard statistics
//! - File-sensing and filtering job management
//! - Health checks and monitoring

pub mod handlers;
pub mod routes;

pub(crate) mod monitoring;
