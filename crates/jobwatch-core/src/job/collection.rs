//! A single job collection.
//!
//! Each collection owns its records and its id counter behind one mutex, so
//! id assignment plus append, and toggle's read-then-write, are atomic with
//! respect to each other. Collections never lock one another.

use std::collections::HashSet;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::definition::{JobKind, JobRecord, NewJob};
use crate::error::JobError;

struct CollectionState {
    records: Vec<JobRecord>,
    next_id: u64,
}

/// An ordered, independently id-spaced set of job records.
pub struct JobCollection {
    kind: JobKind,
    state: Mutex<CollectionState>,
}

impl JobCollection {
    /// Create an empty collection. The first id is 1.
    pub fn new(kind: JobKind) -> Self {
        Self {
            kind,
            state: Mutex::new(CollectionState {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a collection from existing records, keeping their ids.
    ///
    /// New ids continue after the largest seeded id.
    pub fn with_records(kind: JobKind, records: Vec<JobRecord>) -> Result<Self, JobError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(JobError::Validation(format!(
                    "duplicate {} job id {}",
                    kind, record.id
                )));
            }
        }
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Ok(Self {
            kind,
            state: Mutex::new(CollectionState { records, next_id }),
        })
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<JobRecord> {
        let records = self.state.lock().records.clone();
        debug!(kind = %self.kind, count = records.len(), "Listed jobs");
        records
    }

    /// Get a record by id.
    pub fn get(&self, id: u64) -> Option<JobRecord> {
        self.state.lock().records.iter().find(|r| r.id == id).cloned()
    }

    /// Validate `spec`, assign the next id and append a running record.
    pub fn create(&self, spec: NewJob) -> Result<JobRecord, JobError> {
        spec.validate()?;

        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let record = JobRecord::new(id, spec);
        state.records.push(record.clone());
        drop(state);

        info!(kind = %self.kind, id, name = %record.job_name, "Created job");
        Ok(record)
    }

    /// Flip a job between paused and running.
    pub fn toggle(&self, id: u64) -> Result<JobRecord, JobError> {
        let mut state = self.state.lock();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(JobError::NotFound {
                kind: self.kind,
                id,
            })?;
        let previous = record.status;
        let current = record.toggle();
        let updated = record.clone();
        drop(state);

        info!(kind = %self.kind, id, from = %previous, to = %current, "Toggled job");
        Ok(updated)
    }

    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().records.is_empty()
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
