//! Job registry module.
//!
//! Two in-memory collections (file-sensing and filtering jobs) with a
//! paused/running toggle and derived dashboard statistics.

mod collection;
mod definition;
mod registry;
mod stats;

pub use collection::JobCollection;
pub use definition::{JobKind, JobRecord, JobStatus, NewJob};
pub use registry::JobRegistry;
pub use stats::{DashboardStats, AVERAGE_SUCCESS_RATE};
