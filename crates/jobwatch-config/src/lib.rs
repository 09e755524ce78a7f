//! # Jobwatch Config
//!
//! Configuration management for the Jobwatch backend: server binding, session
//! signing, seed accounts, the SSO trust table and the initial job collections.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
