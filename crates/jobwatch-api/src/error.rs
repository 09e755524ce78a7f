//! API error types and their HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use jobwatch_core::{AuthError, JobError};

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Job(#[from] JobError),

    /// No `Authorization: Bearer` header.
    #[error("Missing or invalid Authorization header. Use: Bearer <token>")]
    MissingCredential,

    /// Unparseable or mistyped request body.
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// State could not be built from configuration.
    #[error("Startup failed: {0}")]
    Startup(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(AuthError::Forbidden(_)) => StatusCode::FORBIDDEN,
            ApiError::Auth(AuthError::SigningKey(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Job(JobError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Job(JobError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
