//! Session credential codec.
//!
//! Credentials are compact HS256 JWS tokens (`header.payload.signature`,
//! base64url without padding) carrying `{"email", "exp"}` claims. Nothing is
//! stored server side; a credential is valid until `exp` and rotating the
//! secret invalidates every outstanding one.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "HS256";

/// Default credential lifetime.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Longest accepted credential lifetime (ten years).
pub const MAX_SESSION_TTL_HOURS: i64 = 87_600;

/// Decoded credential payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry as unix seconds.
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct Header {
    alg: String,
}

/// Issues and verifies session credentials with a process-wide secret.
#[derive(Clone)]
pub struct SessionCodec {
    mac: HmacSha256,
    ttl: Duration,
}

impl SessionCodec {
    /// Create a codec with an explicit credential lifetime.
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Result<Self, AuthError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(AuthError::SigningKey("secret is empty".to_string()));
        }
        if ttl <= Duration::zero() {
            return Err(AuthError::SigningKey("ttl must be positive".to_string()));
        }
        if ttl > Duration::hours(MAX_SESSION_TTL_HOURS) {
            return Err(AuthError::SigningKey(format!(
                "ttl must not exceed {} hours",
                MAX_SESSION_TTL_HOURS
            )));
        }
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| AuthError::SigningKey(e.to_string()))?;
        Ok(Self { mac, ttl })
    }

    /// Create a codec with the 24 hour default lifetime.
    pub fn with_default_ttl(secret: impl AsRef<[u8]>) -> Result<Self, AuthError> {
        Self::new(secret, Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }

    /// Credential lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a credential for `email`, expiring one TTL from now.
    pub fn issue(&self, email: &str) -> String {
        self.issue_at(email, Utc::now())
    }

    /// Issue a credential as if the current time were `now`.
    pub fn issue_at(&self, email: &str, now: DateTime<Utc>) -> String {
        // Saturate instead of overflowing near the end of the chrono range.
        let exp = now
            .checked_add_signed(self.ttl)
            .map_or(i64::MAX, |expiry| expiry.timestamp());
        let payload = serde_json::json!({ "email": email, "exp": exp });
        self.sign_payload(&payload.to_string())
    }

    /// Verify a credential and return the email it is bound to.
    pub fn verify(&self, credential: &str) -> Result<String, AuthError> {
        self.verify_at(credential, Utc::now())
    }

    /// Verify a credential against the given clock.
    pub fn verify_at(&self, credential: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = self.decode_at(credential, now)?;
        claims.email.ok_or(AuthError::MissingClaim("email"))
    }

    /// Check signature, header and expiry, returning the raw claims.
    pub fn decode_at(
        &self,
        credential: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, AuthError> {
        let mut parts = credential.split('.');
        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected three dot-separated segments"));
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| invalid("signature is not base64url"))?;
        let mut mac = self.mac.clone();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| invalid("signature mismatch"))?;

        let header: Header = decode_segment(header)?;
        if header.alg != ALGORITHM {
            return Err(invalid("unsupported algorithm"));
        }

        let claims: SessionClaims = decode_segment(payload)?;
        if now.timestamp() >= claims.exp {
            return Err(invalid("credential expired"));
        }
        Ok(claims)
    }

    /// Sign an arbitrary JSON payload. Exposed to the crate for malformed-claim tests.
    pub(crate) fn sign_payload(&self, payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json);
        let mut mac = self.mac.clone();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{}.{}.{}", header, payload, signature)
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn invalid(reason: &str) -> AuthError {
    AuthError::InvalidCredential(reason.to_string())
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| invalid("segment is not base64url"))?;
    serde_json::from_slice(&bytes).map_err(|_| invalid("malformed payload"))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
