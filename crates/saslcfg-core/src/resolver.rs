//! Credential resolution against the secret store
//!
//! Two sequential point lookups per invocation: the username secret first,
//! then the password secret. A failed first lookup aborts before the second
//! is attempted; a failed second lookup aborts the whole call. There is no
//! partial result and no retry.

use secrecy::SecretString;

use crate::credentials::SaslCredentials;
use crate::options::SourceOptions;
use crate::secrets::{SecretStore, SecretStoreError, SecretStoreResult, SecretVersionRef};

/// Resolve the username/password pair named by `options`.
///
/// The returned pair preserves lookup order: `.username` is the decoded
/// payload of the username secret, `.password` the decoded payload of the
/// password secret. Payload bytes must be valid UTF-8.
pub async fn resolve_credentials(
    store: &dyn SecretStore,
    options: &SourceOptions,
) -> SecretStoreResult<SaslCredentials> {
    let username_ref = SecretVersionRef::new(
        &options.project_id,
        &options.username_secret_id,
        &options.username_version_id,
    );
    tracing::debug!(store = store.name(), secret = %username_ref, "resolving username secret");
    let username = decode_payload(&username_ref, store.access_secret_version(&username_ref).await?)?;

    let password_ref = SecretVersionRef::new(
        &options.project_id,
        &options.password_secret_id,
        &options.password_version_id,
    );
    tracing::debug!(store = store.name(), secret = %password_ref, "resolving password secret");
    let password = decode_payload(&password_ref, store.access_secret_version(&password_ref).await?)?;

    Ok(SaslCredentials {
        username,
        password: SecretString::from(password),
    })
}

fn decode_payload(reference: &SecretVersionRef, payload: Vec<u8>) -> SecretStoreResult<String> {
    String::from_utf8(payload).map_err(|e| SecretStoreError::InvalidUtf8 {
        name: reference.resource_name(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::MemorySecretStore;
    use secrecy::ExposeSecret;

    fn options() -> SourceOptions {
        SourceOptions {
            project_id: "123456".to_string(),
            bootstrap_servers: "broker:9092".to_string(),
            username_secret_id: "src-user".to_string(),
            username_version_id: "1".to_string(),
            password_secret_id: "src-pass".to_string(),
            password_version_id: "2".to_string(),
        }
    }

    fn username_ref() -> SecretVersionRef {
        SecretVersionRef::new("123456", "src-user", "1")
    }

    fn password_ref() -> SecretVersionRef {
        SecretVersionRef::new("123456", "src-pass", "2")
    }

    #[tokio::test]
    async fn test_resolve_returns_pair_in_lookup_order() {
        let store = MemorySecretStore::new();
        store.insert(&username_ref(), "alice");
        store.insert(&password_ref(), "s3cr3t");

        let credentials = resolve_credentials(&store, &options()).await.unwrap();
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password.expose_secret(), "s3cr3t");
        assert_eq!(store.access_count(&username_ref()), 1);
        assert_eq!(store.access_count(&password_ref()), 1);
    }

    #[tokio::test]
    async fn test_username_failure_skips_password_lookup() {
        let store = MemorySecretStore::new();
        store.fail_with(&username_ref(), "permission denied");
        store.insert(&password_ref(), "s3cr3t");

        let err = resolve_credentials(&store, &options()).await.unwrap_err();
        assert!(matches!(err, SecretStoreError::Access { .. }));
        assert_eq!(store.access_count(&username_ref()), 1);
        assert_eq!(store.access_count(&password_ref()), 0);
    }

    #[tokio::test]
    async fn test_password_failure_aborts_whole_call() {
        let store = MemorySecretStore::new();
        store.insert(&username_ref(), "alice");

        let err = resolve_credentials(&store, &options()).await.unwrap_err();
        assert!(matches!(err, SecretStoreError::Access { .. }));
        assert_eq!(store.access_count(&username_ref()), 1);
        assert_eq!(store.access_count(&password_ref()), 1);
    }

    #[tokio::test]
    async fn test_non_utf8_payload_is_rejected() {
        let store = MemorySecretStore::new();
        store.insert(&username_ref(), vec![0xff, 0xfe]);
        store.insert(&password_ref(), "s3cr3t");

        let err = resolve_credentials(&store, &options()).await.unwrap_err();
        assert!(matches!(err, SecretStoreError::InvalidUtf8 { .. }));
    }

    #[tokio::test]
    async fn test_unusual_utf8_credentials_survive_decoding() {
        let store = MemorySecretStore::new();
        store.insert(&username_ref(), "usuário");
        store.insert(&password_ref(), "pa£sw☺rd");

        let credentials = resolve_credentials(&store, &options()).await.unwrap();
        assert_eq!(credentials.username, "usuário");
        assert_eq!(credentials.password.expose_secret(), "pa£sw☺rd");
    }
}
