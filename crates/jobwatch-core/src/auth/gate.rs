//! Access control gate.
//!
//! Two stages run on every protected operation: authenticate (credential and
//! directory lookup) then authorize (the account's access flag). Nothing is
//! cached between calls, so a directory change applies to the next request.

use std::sync::Arc;

use tracing::warn;

use super::session::SessionCodec;
use crate::error::AuthError;
use crate::identity::{Identity, IdentityDirectory};

/// Per-request credential check.
#[derive(Clone)]
pub struct AccessGate {
    codec: Arc<SessionCodec>,
    directory: Arc<IdentityDirectory>,
}

impl AccessGate {
    pub fn new(codec: Arc<SessionCodec>, directory: Arc<IdentityDirectory>) -> Self {
        Self { codec, directory }
    }

    /// Resolve a credential to a known identity.
    pub fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        let email = self.codec.verify(credential).map_err(|e| {
            warn!(error = %e, "Rejected session credential");
            AuthError::Unauthenticated(e.to_string())
        })?;

        self.directory.lookup(&email).ok_or_else(|| {
            warn!(email = %email, "Credential for unknown identity");
            AuthError::Unauthenticated("User not found".to_string())
        })
    }

    /// Authenticate, then require the access flag.
    pub fn authorize(&self, credential: &str) -> Result<Identity, AuthError> {
        let identity = self.authenticate(credential)?;
        Self::check_access(identity)
    }

    /// Require the access flag on an already resolved identity.
    pub fn check_access(identity: Identity) -> Result<Identity, AuthError> {
        if identity.has_access {
            Ok(identity)
        } else {
            warn!(email = %identity.email, "Access denied");
            Err(AuthError::Forbidden(identity.email))
        }
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
