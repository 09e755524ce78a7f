//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};

use jobwatch_core::JobKind;

use crate::http::{handlers, monitoring};
use crate::middleware::{require_access, require_session};
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// /api/auth
///   POST   /api/auth/sso-login              - Exchange SSO token (public)
///   GET    /api/auth/me                     - Current identity (session)
///
/// /api (session + access)
///   GET    /api/dashboard/stats             - Dashboard statistics
///   GET    /api/file-sensing/jobs           - List file-sensing jobs
///   POST   /api/file-sensing/jobs           - Create file-sensing job
///   POST   /api/file-sensing/jobs/{id}/toggle
///   GET    /api/filtering/jobs              - List filtering jobs
///   POST   /api/filtering/jobs              - Create filtering job
///   POST   /api/filtering/jobs/{id}/toggle
///
/// /health  - Health check
/// /livez   - Liveness probe (Kubernetes)
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/me", get(handlers::current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
        .route("/sso-login", post(handlers::sso_login));

    let protected_routes = Router::new()
        .route("/dashboard/stats", get(handlers::dashboard_stats))
        .nest("/file-sensing/jobs", job_routes(JobKind::FileSensing))
        .nest("/filtering/jobs", job_routes(JobKind::Filtering))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access,
        ));

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .route("/livez", get(monitoring::liveness_probe));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    Router::new()
        .nest("/api", api_routes)
        .merge(monitoring_routes)
        .with_state(state)
}

/// Routes shared by both job collections.
fn job_routes(kind: JobKind) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_jobs).post(handlers::create_job))
        .route("/{id}/toggle", post(handlers::toggle_job))
        .layer(Extension(kind))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
