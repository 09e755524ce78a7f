//! Application state.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use jobwatch_config::{Config, JobSeed};
use jobwatch_core::{
    AuthService, Identity, IdentityDirectory, JobCollection, JobKind, JobRecord, JobRegistry,
    JobStatus, NewJob, SessionCodec, StaticSsoVerifier,
};

use crate::error::ApiError;

/// Application state shared across handlers.
pub struct AppState {
    pub auth: AuthService,
    pub jobs: JobRegistry,
    start_time: Instant,
}

impl AppState {
    pub fn new(auth: AuthService, jobs: JobRegistry) -> Self {
        Self {
            auth,
            jobs,
            start_time: Instant::now(),
        }
    }

    /// Build the directory, trust table, codec and job collections from config.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let directory: IdentityDirectory = config
            .identities
            .iter()
            .map(|seed| Identity::new(seed.id, &seed.email, &seed.name, seed.has_access))
            .collect();

        let verifier = config
            .sso_tokens
            .iter()
            .fold(StaticSsoVerifier::new(), |verifier, seed| {
                verifier.with_token(&seed.token, &seed.email, &seed.name)
            });

        let hours = i64::try_from(config.auth.session_ttl_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .ok_or_else(|| {
                ApiError::Startup(format!(
                    "session_ttl_hours out of range: {}",
                    config.auth.session_ttl_hours
                ))
            })?;
        let codec = SessionCodec::new(&config.auth.secret, hours)?;

        let jobs = JobRegistry::with_collections(
            seed_collection(JobKind::FileSensing, &config.jobs.file_sensing)?,
            seed_collection(JobKind::Filtering, &config.jobs.filtering)?,
        );

        info!(
            accounts = directory.len(),
            sso_tokens = verifier.len(),
            jobs = jobs.total(),
            "Application state initialized"
        );

        let auth = AuthService::new(Arc::new(verifier), Arc::new(directory), Arc::new(codec));
        Ok(Self::new(auth, jobs))
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

fn seed_collection(kind: JobKind, seeds: &[JobSeed]) -> Result<JobCollection, ApiError> {
    let records = seeds
        .iter()
        .map(|seed| -> Result<JobRecord, ApiError> {
            let status: JobStatus = seed.status.parse()?;
            let spec = NewJob::new(
                &seed.job_name,
                &seed.schedule,
                &seed.server_name,
                &seed.file_location,
                &seed.file_pattern,
            );
            Ok(JobRecord::new(seed.id, spec)
                .with_status(status)
                .with_attempts(seed.last_successful_attempt, seed.last_sensing_attempt))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;
    Ok(JobCollection::with_records(kind, records)?)
}
