//! # Jobwatch API
//!
//! HTTP boundary for the Jobwatch backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        jobwatch-api                           │
//! │  ┌───────────────┐  ┌──────────────────┐  ┌────────────────┐  │
//! │  │ /api/auth     │  │ require_session  │  │ /health        │  │
//! │  │  sso-login    │  │ require_access   │  │ /livez         │  │
//! │  │  me           │  │   (middleware)   │  │                │  │
//! │  └───────┬───────┘  └────────┬─────────┘  └────────────────┘  │
//! │          │                   │                                │
//! │          ▼                   ▼                                │
//! │     AuthService         /api/dashboard, /api/*/jobs           │
//! └──────────┼───────────────────┼────────────────────────────────┘
//!            ▼                   ▼
//!      jobwatch-core:  AccessGate ──▶ JobRegistry
//! ```
//!
//! Every protected request re-runs the gate: the credential is verified and
//! the account re-read from the directory, so access changes apply at once.

pub mod error;
pub mod http;
pub mod middleware;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::{
    handlers::{SsoLoginRequest, SsoLoginResponse, UserResponse},
    routes::create_router,
};
pub use server::{cors_layer, InterfaceConfig, InterfaceServer};
pub use state::AppState;
