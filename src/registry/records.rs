//! Credential registry
//!
//! Append-only, insertion-ordered store of username/password pairs.

use super::strength::{StrengthPolicy, StrengthVerdict};
use log::debug;

/// A registered username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registry of credentials owned by a single session.
///
/// Duplicate usernames are kept as separate records.
pub struct Registry {
    records: Vec<CredentialRecord>,
    policy: StrengthPolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_policy(StrengthPolicy::default())
    }

    pub fn with_policy(policy: StrengthPolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    /// Stores the pair, whatever its strength, and returns the verdict.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> StrengthVerdict {
        let record = CredentialRecord::new(username, password);
        let verdict = self.policy.classify(&record.password);
        debug!("Registered '{}' ({:?})", record.username, verdict);
        self.records.push(record);
        verdict
    }

    pub fn list_usernames(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.username.as_str()).collect()
    }

    /// Records whose password is weak, in registration order.
    pub fn audit_weak(&self) -> Vec<&CredentialRecord> {
        self.records
            .iter()
            .filter(|r| !self.policy.classify(&r.password).is_strong())
            .collect()
    }

    pub fn policy(&self) -> &StrengthPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
