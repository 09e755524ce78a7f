//! Dashboard statistics derived from job collections.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::definition::{JobRecord, JobStatus};

/// Fixed success rate reported until run history is modelled.
pub const AVERAGE_SUCCESS_RATE: f64 = 85.7;

/// Aggregate view across job collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub running: usize,
    pub failed: usize,
    pub paused: usize,
    pub last_successful_run: Option<NaiveDateTime>,
    pub average_success_rate: f64,
}

impl DashboardStats {
    /// Compute stats over any number of record snapshots.
    pub fn compute<'a, I>(collections: I) -> Self
    where
        I: IntoIterator<Item = &'a [JobRecord]>,
    {
        let mut stats = Self {
            total: 0,
            running: 0,
            failed: 0,
            paused: 0,
            last_successful_run: None,
            average_success_rate: AVERAGE_SUCCESS_RATE,
        };

        for record in collections.into_iter().flatten() {
            stats.total += 1;
            match record.status {
                JobStatus::Running => stats.running += 1,
                JobStatus::Failed => stats.failed += 1,
                JobStatus::Paused => stats.paused += 1,
            }
            if let Some(at) = record.last_successful_attempt {
                stats.last_successful_run = stats.last_successful_run.max(Some(at));
            }
        }

        stats
    }
}
