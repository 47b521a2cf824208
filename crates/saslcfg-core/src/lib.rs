//! saslcfg core
//!
//! Resolves a SASL username/password pair from a managed secret store and
//! assembles an immutable Kafka client configuration for SASL/PLAIN over
//! TLS. One-shot: every invocation is independent, touches no process-wide
//! state, and is safe to run concurrently with others.
//!
//! ```rust,ignore
//! use saslcfg_core::{assemble, GcpSecretStore, SourceOptions};
//!
//! let store = GcpSecretStore::connect().await?;
//! let properties = assemble(&store, &options).await?;
//! // hand `properties` to the broker client constructor
//! ```

pub mod config;
pub mod credentials;
pub mod options;
pub mod resolver;
pub mod secrets;

use thiserror::Error;

pub use config::{
    build_consumer_properties, ConfigError, ConsumerProperties, ConsumerPropertiesBuilder,
    BOOTSTRAP_SERVERS, SASL_JAAS_CONFIG, SASL_MECHANISM, SECURITY_PROTOCOL,
};
pub use credentials::SaslCredentials;
pub use options::{OptionsError, SourceOptions};
pub use resolver::resolve_credentials;
pub use secrets::{
    GcpSecretStore, MemorySecretStore, SecretStore, SecretStoreError, SecretStoreResult,
    SecretVersionRef,
};

/// Any failure of the resolve-and-assemble operation.
///
/// All variants abort the whole operation; there is no partial success.
/// Retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Secrets(#[from] SecretStoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Validate the options, resolve both credentials, and build the
/// consumer properties. One call chain, no retained state.
pub async fn assemble(
    store: &dyn SecretStore,
    options: &SourceOptions,
) -> Result<ConsumerProperties, Error> {
    options.validate()?;
    tracing::info!(
        project = %options.project_id,
        bootstrap = %options.bootstrap_servers,
        "assembling consumer properties"
    );
    let credentials = resolver::resolve_credentials(store, options).await?;
    let properties = config::build_consumer_properties(&options.bootstrap_servers, &credentials)?;
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    async fn test_assemble_end_to_end() {
        let store = MemorySecretStore::new();
        store.insert(&username_ref(), "alice");
        store.insert(&password_ref(), "s3cr3t");

        let properties = assemble(&store, &options()).await.unwrap();

        assert_eq!(properties.get(BOOTSTRAP_SERVERS), Some("broker:9092"));
        assert_eq!(properties.get(SASL_MECHANISM), Some("PLAIN"));
        assert_eq!(properties.get(SECURITY_PROTOCOL), Some("SASL_SSL"));
        assert_eq!(
            properties.get(SASL_JAAS_CONFIG),
            Some(
                "org.apache.kafka.common.security.plain.PlainLoginModule required \
                 username='alice' password='s3cr3t';"
            )
        );
        assert_eq!(properties.len(), 4);
    }

    #[tokio::test]
    async fn test_assemble_fails_when_password_secret_missing() {
        let store = MemorySecretStore::new();
        store.insert(&username_ref(), "alice");

        let err = assemble(&store, &options()).await.unwrap_err();
        assert!(matches!(err, Error::Secrets(SecretStoreError::Access { .. })));
        assert_eq!(store.access_count(&username_ref()), 1);
    }

    #[tokio::test]
    async fn test_assemble_validates_before_any_lookup() {
        let store = MemorySecretStore::new();
        let mut opts = options();
        opts.bootstrap_servers = String::new();

        let err = assemble(&store, &opts).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Options(OptionsError::Empty("bootstrap_servers"))
        ));
        assert_eq!(store.total_accesses(), 0);
    }
}
