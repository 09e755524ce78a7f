//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{Config, JobSeed, DEFAULT_SECRET, MAX_SESSION_TTL_HOURS};

const JOB_STATUSES: [&str; 3] = ["running", "failed", "paused"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error, if any, into a `ConfigError`.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_auth(config, &mut result);
        Self::validate_identities(config, &mut result);
        Self::validate_sso_tokens(config, &mut result);
        Self::validate_jobs("jobs.file_sensing", &config.jobs.file_sensing, &mut result);
        Self::validate_jobs("jobs.filtering", &config.jobs.filtering, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        for origin in &config.server.cors_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                result.add_error(ValidationError::new(
                    "server.cors_origins",
                    format!("Origin '{}' must start with http:// or https://", origin),
                ));
            }
        }
    }

    fn validate_auth(config: &Config, result: &mut ValidationResult) {
        if config.auth.secret.is_empty() {
            result.add_error(ValidationError::new(
                "auth.secret",
                "Signing secret cannot be empty",
            ));
        } else if config.auth.secret == DEFAULT_SECRET {
            result.add_warning(ValidationWarning::new(
                "auth.secret",
                "Using the built-in placeholder secret; set auth.secret before deploying",
            ));
        }

        if config.auth.session_ttl_hours == 0 {
            result.add_error(ValidationError::new(
                "auth.session_ttl_hours",
                "session_ttl_hours must be greater than 0",
            ));
        } else if config.auth.session_ttl_hours > MAX_SESSION_TTL_HOURS {
            result.add_error(ValidationError::new(
                "auth.session_ttl_hours",
                format!("session_ttl_hours must not exceed {}", MAX_SESSION_TTL_HOURS),
            ));
        }
    }

    fn validate_identities(config: &Config, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for identity in &config.identities {
            if identity.email.is_empty() {
                result.add_error(ValidationError::new(
                    "identities",
                    format!("Identity {} has an empty email", identity.id),
                ));
            }
            if !seen.insert(identity.email.as_str()) {
                result.add_error(ValidationError::new(
                    "identities",
                    format!("Duplicate identity email '{}'", identity.email),
                ));
            }
        }

        if config.identities.is_empty() {
            result.add_warning(ValidationWarning::new(
                "identities",
                "No identities configured, every login will be rejected",
            ));
        }
    }

    fn validate_sso_tokens(config: &Config, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for entry in &config.sso_tokens {
            if entry.token.is_empty() {
                result.add_error(ValidationError::new(
                    "sso_tokens",
                    format!("Empty SSO token for '{}'", entry.email),
                ));
            }
            if !seen.insert(entry.token.as_str()) {
                result.add_error(ValidationError::new(
                    "sso_tokens",
                    format!("Duplicate SSO token for '{}'", entry.email),
                ));
            }
            if !config.identities.iter().any(|i| i.email == entry.email) {
                result.add_warning(ValidationWarning::new(
                    "sso_tokens",
                    format!(
                        "SSO token maps to '{}', which is not a known identity",
                        entry.email
                    ),
                ));
            }
        }
    }

    fn validate_jobs(path: &str, jobs: &[JobSeed], result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for job in jobs {
            if job.id == 0 {
                result.add_error(ValidationError::new(
                    path,
                    format!("Job '{}' has id 0; ids start at 1", job.job_name),
                ));
            }
            if !seen.insert(job.id) {
                result.add_error(ValidationError::new(
                    path,
                    format!("Duplicate job id {}", job.id),
                ));
            }
            if !JOB_STATUSES.contains(&job.status.as_str()) {
                result.add_error(ValidationError::new(
                    path,
                    format!(
                        "Job {} has unknown status '{}', valid values: {:?}",
                        job.id, job.status, JOB_STATUSES
                    ),
                ));
            }
            if job.job_name.trim().is_empty() {
                result.add_error(ValidationError::new(
                    path,
                    format!("Job {} has an empty job_name", job.id),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
