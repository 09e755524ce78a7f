//! Authentication pipeline: SSO exchange, session credentials and the access gate.

mod gate;
mod session;
mod sso;

use std::sync::Arc;

use tracing::{info, warn};

pub use gate::AccessGate;
pub use session::{
    SessionClaims, SessionCodec, DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS,
};
pub use sso::{SsoIdentity, SsoVerifier, StaticSsoVerifier};

use crate::error::AuthError;
use crate::identity::{Identity, IdentityDirectory};

/// Result of a successful SSO login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub credential: String,
    pub identity: Identity,
}

/// Composes the SSO verifier, the identity directory and the session codec.
pub struct AuthService {
    verifier: Arc<dyn SsoVerifier>,
    directory: Arc<IdentityDirectory>,
    codec: Arc<SessionCodec>,
    gate: AccessGate,
}

impl AuthService {
    pub fn new(
        verifier: Arc<dyn SsoVerifier>,
        directory: Arc<IdentityDirectory>,
        codec: Arc<SessionCodec>,
    ) -> Self {
        let gate = AccessGate::new(codec.clone(), directory.clone());
        Self {
            verifier,
            directory,
            codec,
            gate,
        }
    }

    /// Exchange an SSO token for a session credential.
    ///
    /// Both an unrecognized token and a token for an account missing from the
    /// directory fail with [`AuthError::Unauthenticated`].
    pub async fn sso_login(&self, sso_token: &str) -> Result<LoginOutcome, AuthError> {
        let asserted = self.verifier.exchange(sso_token).await.map_err(|e| {
            warn!(error = %e, "SSO exchange failed");
            AuthError::Unauthenticated(e.to_string())
        })?;

        let identity = self.directory.lookup(&asserted.email).ok_or_else(|| {
            warn!(email = %asserted.email, "SSO identity has no account");
            AuthError::Unauthenticated("User not found in system".to_string())
        })?;

        let credential = self.codec.issue(&identity.email);
        info!(email = %identity.email, "Issued session credential");

        Ok(LoginOutcome {
            credential,
            identity,
        })
    }

    /// Authenticate stage only.
    pub fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        self.gate.authenticate(credential)
    }

    /// Authenticate and authorize.
    pub fn authorize(&self, credential: &str) -> Result<Identity, AuthError> {
        self.gate.authorize(credential)
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn directory(&self) -> &Arc<IdentityDirectory> {
        &self.directory
    }

    pub fn codec(&self) -> &Arc<SessionCodec> {
        &self.codec
    }
}
