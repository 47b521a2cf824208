//! Secret Manager backed secret store

use async_trait::async_trait;
use google_cloud_secretmanager_v1::client::SecretManagerService;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult, SecretVersionRef};

/// Secret store backed by Google Secret Manager.
///
/// Holds one service client for the lifetime of the store; the client and
/// its connections are released when the store is dropped, on every exit
/// path. Credentials and endpoint come from the ambient application
/// default configuration of the official client.
pub struct GcpSecretStore {
    client: SecretManagerService,
}

impl GcpSecretStore {
    /// Connect to Secret Manager using application default credentials
    pub async fn connect() -> SecretStoreResult<Self> {
        let client = SecretManagerService::builder()
            .build()
            .await
            .map_err(|e| SecretStoreError::Connect {
                source: Box::new(e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SecretStore for GcpSecretStore {
    fn name(&self) -> &str {
        "secret-manager"
    }

    async fn access_secret_version(
        &self,
        reference: &SecretVersionRef,
    ) -> SecretStoreResult<Vec<u8>> {
        let name = reference.resource_name();
        tracing::debug!(secret = %name, "accessing secret version");

        let response = self
            .client
            .access_secret_version()
            .set_name(name.clone())
            .send()
            .await
            .map_err(|e| SecretStoreError::Access {
                name: name.clone(),
                source: Box::new(e),
            })?;

        let payload = response
            .payload
            .ok_or(SecretStoreError::EmptyPayload { name })?;

        Ok(payload.data.to_vec())
    }
}
