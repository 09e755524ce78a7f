//! # Jobwatch Core
//!
//! Domain layer for the Jobwatch backend.
//!
//! ## Components
//!
//! - [`IdentityDirectory`] - Accounts keyed by email, with an access flag
//! - [`SessionCodec`] - Issues and verifies signed, time-bounded session credentials
//! - [`SsoVerifier`] - Exchanges an external SSO token for an identity
//! - [`AccessGate`] - Per-request authenticate/authorize check
//! - [`AuthService`] - SSO login and gate composition
//! - [`JobRegistry`] - File-sensing and filtering job collections
//!
//! ## Request Flow
//!
//! ```text
//!  sso token ──▶ SsoVerifier ──▶ IdentityDirectory ──▶ SessionCodec::issue ──▶ credential
//!
//!  credential ──▶ AccessGate ─┬─ SessionCodec::verify
//!                             ├─ IdentityDirectory::lookup
//!                             └─ has_access? ──▶ JobRegistry
//! ```

pub mod auth;
pub mod error;
pub mod identity;
pub mod job;

pub use auth::{
    AccessGate, AuthService, LoginOutcome, SessionClaims, SessionCodec, SsoIdentity,
    SsoVerifier, StaticSsoVerifier,
};
pub use error::{AuthError, JobError};
pub use identity::{Identity, IdentityDirectory};
pub use job::{
    DashboardStats, JobCollection, JobKind, JobRecord, JobRegistry, JobStatus, NewJob,
};
