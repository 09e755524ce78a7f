//! Job registry owning both job collections.

use super::collection::JobCollection;
use super::definition::JobKind;
use super::stats::DashboardStats;

/// Owns the file-sensing and filtering collections.
pub struct JobRegistry {
    file_sensing: JobCollection,
    filtering: JobCollection,
}

impl JobRegistry {
    /// Create a registry with two empty collections.
    pub fn new() -> Self {
        Self {
            file_sensing: JobCollection::new(JobKind::FileSensing),
            filtering: JobCollection::new(JobKind::Filtering),
        }
    }

    /// Create a registry from pre-built collections.
    pub fn with_collections(file_sensing: JobCollection, filtering: JobCollection) -> Self {
        debug_assert_eq!(file_sensing.kind(), JobKind::FileSensing);
        debug_assert_eq!(filtering.kind(), JobKind::Filtering);
        Self {
            file_sensing,
            filtering,
        }
    }

    pub fn collection(&self, kind: JobKind) -> &JobCollection {
        match kind {
            JobKind::FileSensing => &self.file_sensing,
            JobKind::Filtering => &self.filtering,
        }
    }

    pub fn file_sensing(&self) -> &JobCollection {
        &self.file_sensing
    }

    pub fn filtering(&self) -> &JobCollection {
        &self.filtering
    }

    /// Snapshot each collection in turn and compute dashboard stats.
    pub fn stats(&self) -> DashboardStats {
        let file_sensing = self.file_sensing.list();
        let filtering = self.filtering.list();
        DashboardStats::compute([file_sensing.as_slice(), filtering.as_slice()])
    }

    /// Total number of jobs across both collections.
    pub fn total(&self) -> usize {
        self.file_sensing.len() + self.filtering.len()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
