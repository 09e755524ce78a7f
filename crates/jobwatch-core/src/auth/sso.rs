//! SSO token exchange.
//!
//! [`SsoVerifier`] is the seam where a real SAML/OIDC client plugs in.
//! [`StaticSsoVerifier`] resolves tokens from a configured trust table.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::AuthError;

/// Identity asserted by the SSO provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoIdentity {
    pub email: String,
    pub name: String,
}

/// Exchanges an opaque provider token for the identity it vouches for.
///
/// Implementations must be idempotent and free of side effects.
#[async_trait]
pub trait SsoVerifier: Send + Sync {
    async fn exchange(&self, sso_token: &str) -> Result<SsoIdentity, AuthError>;
}

/// Trust-table backed verifier.
#[derive(Debug, Default, Clone)]
pub struct StaticSsoVerifier {
    trusted: HashMap<String, SsoIdentity>,
}

impl StaticSsoVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trust `token` as an assertion of `email`.
    pub fn with_token(
        mut self,
        token: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.trust(token, email, name);
        self
    }

    pub fn trust(
        &mut self,
        token: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.trusted.insert(
            token.into(),
            SsoIdentity {
                email: email.into(),
                name: name.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.trusted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trusted.is_empty()
    }
}

#[async_trait]
impl SsoVerifier for StaticSsoVerifier {
    async fn exchange(&self, sso_token: &str) -> Result<SsoIdentity, AuthError> {
        match self.trusted.get(sso_token) {
            Some(identity) => {
                debug!(email = %identity.email, "SSO token accepted");
                Ok(identity.clone())
            }
            None => {
                warn!("Rejected unknown SSO token");
                Err(AuthError::InvalidSsoToken)
            }
        }
    }
}
