//! Error types for authentication and the job registry.

use thiserror::Error;

use crate::job::JobKind;

/// Authentication and authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The SSO provider token is not in the trust table.
    #[error("Invalid SSO token")]
    InvalidSsoToken,

    /// Bad signature, malformed payload, or expired credential.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// The credential decoded but lacks a required claim.
    #[error("Credential is missing the '{0}' claim")]
    MissingClaim(&'static str),

    /// Composite failure of the authenticate stage.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Valid identity without access.
    #[error("Access denied for {0}")]
    Forbidden(String),

    /// The signing secret cannot be used.
    #[error("Invalid signing key: {0}")]
    SigningKey(String),
}

/// Job registry failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("Job not found: {kind} job {id}")]
    NotFound { kind: JobKind, id: u64 },

    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credential_display() {
        let err = AuthError::InvalidCredential("expired".to_string());
        assert!(err.to_string().contains("Invalid credential"));
        assert!(err.to_string().contains("expired"));
    }

    #[test]
    fn test_missing_claim_display() {
        let err = AuthError::MissingClaim("email");
        assert!(err.to_string().contains("'email'"));
    }

    #[test]
    fn test_forbidden_display() {
        let err = AuthError::Forbidden("noaccess@company.com".to_string());
        assert!(err.to_string().contains("noaccess@company.com"));
    }

    #[test]
    fn test_job_not_found_display() {
        let err = JobError::NotFound {
            kind: JobKind::Filtering,
            id: 42,
        };
        let display = err.to_string();
        assert!(display.contains("filtering"));
        assert!(display.contains("42"));
    }

    #[test]
    fn test_validation_display() {
        let err = JobError::Validation("jobName is required".to_string());
        assert!(err.to_string().contains("jobName"));
    }
}
