//! Session credential middleware.
//!
//! Both layers read `Authorization: Bearer <credential>` and re-run the gate
//! on every request. The resolved [`Identity`] is inserted into request
//! extensions for downstream handlers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use jobwatch_core::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the bearer credential, passed on verbatim.
///
/// The auth scheme is matched case-insensitively (`Bearer`, `bearer`, ...).
pub fn bearer_credential(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, credential)| credential.trim_start())
        .filter(|credential| !credential.is_empty())
        .ok_or(ApiError::MissingCredential)
}

/// Authenticate stage only: a valid credential for a known account.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate(&state, req, next, false).await
}

/// Authenticate and authorize: the account must also have access.
pub async fn require_access(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate(&state, req, next, true).await
}

async fn gate(
    state: &AppState,
    mut req: Request,
    next: Next,
    authorize: bool,
) -> Result<Response, ApiError> {
    let identity = resolve(state, req.headers(), authorize).inspect_err(|e| {
        warn!(path = %req.uri().path(), error = %e, "Rejected request");
    })?;
    req.extensions_mut().insert::<Identity>(identity);
    Ok(next.run(req).await)
}

fn resolve(state: &AppState, headers: &HeaderMap, authorize: bool) -> Result<Identity, ApiError> {
    let credential = bearer_credential(headers)?;
    let identity = if authorize {
        state.auth.authorize(credential)?
    } else {
        state.auth.authenticate(credential)?
    };
    Ok(identity)
}
