//! In-memory secret store for tests

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult, SecretVersionRef};

/// In-memory secret store, keyed by full resource name.
///
/// Supports preloaded payloads, injectable failures, and per-name access
/// counters so tests can assert exactly which lookups were attempted.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple
/// tasks.
///
/// # Example
///
/// ```
/// use saslcfg_core::secrets::{MemorySecretStore, SecretVersionRef};
///
/// let store = MemorySecretStore::new();
/// let reference = SecretVersionRef::new("123456", "src-user", "1");
/// store.insert(&reference, "alice");
/// assert_eq!(store.access_count(&reference), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    payloads: RwLock<HashMap<String, Vec<u8>>>,
    failures: RwLock<HashMap<String, String>>,
    access_counts: RwLock<HashMap<String, usize>>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a payload for a secret version
    pub fn insert(&self, reference: &SecretVersionRef, payload: impl Into<Vec<u8>>) {
        let mut payloads = self.payloads.write().unwrap();
        payloads.insert(reference.resource_name(), payload.into());
    }

    /// Make lookups of `reference` fail with the given message
    pub fn fail_with(&self, reference: &SecretVersionRef, message: impl Into<String>) {
        let mut failures = self.failures.write().unwrap();
        failures.insert(reference.resource_name(), message.into());
    }

    /// How many times `reference` has been looked up
    pub fn access_count(&self, reference: &SecretVersionRef) -> usize {
        let counts = self.access_counts.read().unwrap();
        counts.get(&reference.resource_name()).copied().unwrap_or(0)
    }

    /// Total number of lookups across all references
    pub fn total_accesses(&self) -> usize {
        let counts = self.access_counts.read().unwrap();
        counts.values().sum()
    }

    fn record_access(&self, name: &str) {
        let mut counts = self.access_counts.write().unwrap();
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn access_secret_version(
        &self,
        reference: &SecretVersionRef,
    ) -> SecretStoreResult<Vec<u8>> {
        let name = reference.resource_name();
        self.record_access(&name);

        if let Some(message) = self.failures.read().unwrap().get(&name) {
            return Err(SecretStoreError::Access {
                name,
                source: message.clone().into(),
            });
        }

        let payloads = self.payloads.read().unwrap();
        match payloads.get(&name) {
            Some(payload) => Ok(payload.clone()),
            None => Err(SecretStoreError::Access {
                name: name.clone(),
                source: format!("secret version not found: {name}").into(),
            }),
        }
    }
}
