//! HTTP request handlers.
//!
//! Job handlers are shared by both collections; the collection is selected by
//! an [`Extension<JobKind>`] layered onto each nested job router.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use jobwatch_core::{DashboardStats, Identity, JobKind, JobRecord, NewJob};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Auth
// ============================================================================

/// SSO login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsoLoginRequest {
    /// Opaque token issued by the SSO provider.
    pub token: String,
}

/// SSO login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsoLoginResponse {
    /// Session credential for the `Authorization: Bearer` header.
    pub token: String,
    pub user: Identity,
}

/// Current identity response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: Identity,
}

/// Exchange an SSO token for a session credential.
///
/// POST /api/auth/sso-login
pub async fn sso_login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SsoLoginRequest>, JsonRejection>,
) -> Result<Json<SsoLoginResponse>, ApiError> {
    let Json(request) = payload?;
    let outcome = state.auth.sso_login(&request.token).await?;
    Ok(Json(SsoLoginResponse {
        token: outcome.credential,
        user: outcome.identity,
    }))
}

/// GET /api/auth/me
pub async fn current_user(Extension(user): Extension<Identity>) -> Json<UserResponse> {
    Json(UserResponse { user })
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /api/dashboard/stats
pub async fn dashboard_stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(state.jobs.stats())
}

// ============================================================================
// Jobs
// ============================================================================

/// GET /api/{kind}/jobs
pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<JobKind>,
) -> Json<Vec<JobRecord>> {
    Json(state.jobs.collection(kind).list())
}

/// POST /api/{kind}/jobs
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<JobKind>,
    Extension(user): Extension<Identity>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<Json<JobRecord>, ApiError> {
    let Json(spec) = payload?;
    let record = state.jobs.collection(kind).create(spec)?;
    info!(kind = %kind, id = record.id, by = %user.email, "Job created via API");
    Ok(Json(record))
}

/// POST /api/{kind}/jobs/{id}/toggle
pub async fn toggle_job(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<JobKind>,
    Extension(user): Extension<Identity>,
    Path(id): Path<u64>,
) -> Result<Json<JobRecord>, ApiError> {
    let record = state.jobs.collection(kind).toggle(id)?;
    info!(kind = %kind, id, status = %record.status, by = %user.email, "Job toggled via API");
    Ok(Json(record))
}
