//! Job records and status.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::JobError;

/// Job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Job is active.
    Running,
    /// Last attempt failed.
    Failed,
    /// Job has been paused by an operator.
    Paused,
}

impl JobStatus {
    /// Status after a toggle: paused jobs resume, everything else pauses.
    pub fn toggled(self) -> Self {
        match self {
            JobStatus::Paused => JobStatus::Running,
            JobStatus::Running | JobStatus::Failed => JobStatus::Paused,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Running => "running",
            JobStatus::Failed => "failed",
            JobStatus::Paused => "paused",
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Running
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(JobStatus::Running),
            "failed" => Ok(JobStatus::Failed),
            "paused" => Ok(JobStatus::Paused),
            other => Err(JobError::Validation(format!("unknown job status '{}'", other))),
        }
    }
}

/// Which collection a job belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    FileSensing,
    Filtering,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::FileSensing => "file-sensing",
            JobKind::Filtering => "filtering",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub job_name: String,
    pub schedule: String,
    pub server_name: String,
    pub file_location: String,
    pub file_pattern: String,
}

impl NewJob {
    pub fn new(
        job_name: impl Into<String>,
        schedule: impl Into<String>,
        server_name: impl Into<String>,
        file_location: impl Into<String>,
        file_pattern: impl Into<String>,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            schedule: schedule.into(),
            server_name: server_name.into(),
            file_location: file_location.into(),
            file_pattern: file_pattern.into(),
        }
    }

    /// Reject blank required fields. The schedule is opaque and not parsed.
    pub fn validate(&self) -> Result<(), JobError> {
        let fields = [
            ("jobName", &self.job_name),
            ("schedule", &self.schedule),
            ("serverName", &self.server_name),
            ("fileLocation", &self.file_location),
            ("filePattern", &self.file_pattern),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(JobError::Validation(format!("{} is required", name)));
            }
        }
        Ok(())
    }
}

/// A job record as stored in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: u64,
    pub job_name: String,
    pub schedule: String,
    pub server_name: String,
    pub file_location: String,
    pub file_pattern: String,
    pub last_successful_attempt: Option<NaiveDateTime>,
    pub last_sensing_attempt: Option<NaiveDateTime>,
    pub status: JobStatus,
}

impl JobRecord {
    /// A freshly created record: running, never attempted.
    pub fn new(id: u64, spec: NewJob) -> Self {
        Self {
            id,
            job_name: spec.job_name,
            schedule: spec.schedule,
            server_name: spec.server_name,
            file_location: spec.file_location,
            file_pattern: spec.file_pattern,
            last_successful_attempt: None,
            last_sensing_attempt: None,
            status: JobStatus::Running,
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_attempts(
        mut self,
        last_successful: Option<NaiveDateTime>,
        last_sensing: Option<NaiveDateTime>,
    ) -> Self {
        self.last_successful_attempt = last_successful;
        self.last_sensing_attempt = last_sensing;
        self
    }

    /// Apply the toggle transition and return the new status.
    pub fn toggle(&mut self) -> JobStatus {
        self.status = self.status.toggled();
        self.status
    }
}
