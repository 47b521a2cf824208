//! Core trait and types for versioned secret access

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Fully-qualified reference to one versioned secret.
///
/// Renders as `projects/{project}/secrets/{secret_id}/versions/{version}`,
/// the resource-name format the secret service expects. Constructed per
/// call and discarded once the lookup completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretVersionRef {
    pub project: String,
    pub secret_id: String,
    pub version: String,
}

impl SecretVersionRef {
    pub fn new(
        project: impl Into<String>,
        secret_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            secret_id: secret_id.into(),
            version: version.into(),
        }
    }

    /// The resource name used as the lookup key
    pub fn resource_name(&self) -> String {
        format!(
            "projects/{}/secrets/{}/versions/{}",
            self.project, self.secret_id, self.version
        )
    }
}

impl fmt::Display for SecretVersionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_name())
    }
}

/// Errors that can occur while accessing the secret store.
///
/// Variants carry the secret's resource name and the underlying cause so
/// operators can tell "permission denied" from "not found" from "network
/// unreachable". No variant ever carries a secret value.
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("failed to connect to the secret service: {source}")]
    Connect {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to access {name}: {source}")]
    Access {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("secret {name} has no payload")]
    EmptyPayload { name: String },

    #[error("secret {name} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Trait for versioned secret stores.
///
/// Implementations:
/// - `GcpSecretStore`: Secret Manager over the official client
/// - `MemorySecretStore`: in-memory, for tests
///
/// A store performs point lookups only; it never lists, writes, or caches.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store, for diagnostics
    fn name(&self) -> &str;

    /// Resolve one versioned secret reference to its byte payload
    async fn access_secret_version(
        &self,
        reference: &SecretVersionRef,
    ) -> SecretStoreResult<Vec<u8>>;
}
