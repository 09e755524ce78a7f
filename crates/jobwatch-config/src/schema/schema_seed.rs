//! Seed data types (accounts, SSO trust table, initial job collections).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An account loaded into the identity directory at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySeed {
    pub id: u64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub has_access: bool,
}

impl IdentitySeed {
    fn new(id: u64, email: &str, name: &str, has_access: bool) -> Self {
        Self {
            id,
            email: email.to_string(),
            name: name.to_string(),
            has_access,
        }
    }
}

/// One entry of the SSO trust table: an opaque provider token and the
/// identity it vouches for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoTokenSeed {
    pub token: String,
    pub email: String,
    pub name: String,
}

impl SsoTokenSeed {
    fn new(token: &str, email: &str, name: &str) -> Self {
        Self {
            token: token.to_string(),
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

/// Initial contents of both job collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    #[serde(default = "default_file_sensing_jobs")]
    pub file_sensing: Vec<JobSeed>,

    #[serde(default = "default_filtering_jobs")]
    pub filtering: Vec<JobSeed>,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            file_sensing: default_file_sensing_jobs(),
            filtering: default_filtering_jobs(),
        }
    }
}

/// A pre-existing job record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSeed {
    pub id: u64,
    pub job_name: String,
    pub schedule: String,
    pub server_name: String,
    pub file_location: String,
    pub file_pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful_attempt: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sensing_attempt: Option<NaiveDateTime>,
    /// One of `running`, `failed`, `paused`.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "running".to_string()
}

pub(crate) fn default_identities() -> Vec<IdentitySeed> {
    vec![
        IdentitySeed::new(1, "admin@company.com", "Admin User", true),
        IdentitySeed::new(2, "user@company.com", "Regular User", true),
        IdentitySeed::new(3, "noaccess@company.com", "No Access User", false),
    ]
}

pub(crate) fn default_sso_tokens() -> Vec<SsoTokenSeed> {
    vec![
        SsoTokenSeed::new("mock-sso-token-admin", "admin@company.com", "Admin User"),
        SsoTokenSeed::new("mock-sso-token-user", "user@company.com", "Regular User"),
        SsoTokenSeed::new(
            "mock-sso-token-noaccess",
            "noaccess@company.com",
            "No Access User",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    job_name: &str,
    schedule: &str,
    server_name: &str,
    file_location: &str,
    file_pattern: &str,
    last_success: &str,
    last_sensing: &str,
    status: &str,
) -> JobSeed {
    JobSeed {
        id,
        job_name: job_name.to_string(),
        schedule: schedule.to_string(),
        server_name: server_name.to_string(),
        file_location: file_location.to_string(),
        file_pattern: file_pattern.to_string(),
        last_successful_attempt: last_success.parse().ok(),
        last_sensing_attempt: last_sensing.parse().ok(),
        status: status.to_string(),
    }
}

pub(crate) fn default_file_sensing_jobs() -> Vec<JobSeed> {
    vec![
        seed(
            1,
            "Customer Data Import",
            "0 6 * * *",
            "prod-server-01",
            "/data/imports/customers",
            "customer_*.csv",
            "2025-01-07T06:00:15",
            "2025-01-07T06:00:15",
            "running",
        ),
        seed(
            2,
            "Order Processing",
            "*/15 * * * *",
            "prod-server-02",
            "/data/orders",
            "orders_*.json",
            "2025-01-07T14:15:00",
            "2025-01-07T14:30:00",
            "failed",
        ),
        seed(
            3,
            "Inventory Updates",
            "0 */2 * * *",
            "prod-server-03",
            "/data/inventory",
            "inventory_*.xml",
            "2025-01-07T12:00:00",
            "2025-01-07T14:00:00",
            "paused",
        ),
    ]
}

pub(crate) fn default_filtering_jobs() -> Vec<JobSeed> {
    vec![
        seed(
            1,
            "Email Sanitization",
            "0 */4 * * *",
            "filter-server-01",
            "/data/emails",
            "emails_*.txt",
            "2025-01-07T12:00:00",
            "2025-01-07T16:00:00",
            "running",
        ),
        seed(
            2,
            "Log Cleaning",
            "0 2 * * *",
            "filter-server-02",
            "/logs/application",
            "app_*.log",
            "2025-01-07T02:00:00",
            "2025-01-07T02:00:00",
            "running",
        ),
    ]
}
