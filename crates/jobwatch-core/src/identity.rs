//! Identity directory.
//!
//! Accounts are keyed by email with an exact byte match; no case folding is
//! applied so lookups agree with whatever the SSO provider asserted.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An account known to this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: u64,
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub has_access: bool,
}

impl Identity {
    pub fn new(
        id: u64,
        email: impl Into<String>,
        display_name: impl Into<String>,
        has_access: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            has_access,
        }
    }
}

/// Directory of accounts, populated at startup.
pub struct IdentityDirectory {
    accounts: DashMap<String, Identity>,
}

impl IdentityDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Add an account. A later account with the same email replaces the earlier one.
    pub fn insert(&self, identity: Identity) {
        self.accounts.insert(identity.email.clone(), identity);
    }

    /// Look up an account by exact email.
    pub fn lookup(&self, email: &str) -> Option<Identity> {
        let found = self.accounts.get(email).map(|entry| entry.value().clone());
        debug!(email, found = found.is_some(), "identity lookup");
        found
    }

    /// Change an account's access flag. Returns `false` if the account is unknown.
    pub fn set_access(&self, email: &str, has_access: bool) -> bool {
        match self.accounts.get_mut(email) {
            Some(mut entry) => {
                entry.has_access = has_access;
                true
            }
            None => false,
        }
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for IdentityDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Identity> for IdentityDirectory {
    fn from_iter<I: IntoIterator<Item = Identity>>(iter: I) -> Self {
        let directory = Self::new();
        for identity in iter {
            directory.insert(identity);
        }
        directory
    }
}
