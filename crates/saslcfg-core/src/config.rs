//! Kafka consumer property assembly
//!
//! Deterministically builds the four-entry client configuration for
//! SASL/PLAIN over TLS. The map is insertion-ordered and immutable once
//! built; the builder fails fast on duplicate keys.

use std::fmt;

use indexmap::IndexMap;
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::credentials::SaslCredentials;

pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";
pub const SASL_MECHANISM: &str = "sasl.mechanism";
pub const SECURITY_PROTOCOL: &str = "security.protocol";
pub const SASL_JAAS_CONFIG: &str = "sasl.jaas.config";

/// Login module named in the composed JAAS entry
const PLAIN_LOGIN_MODULE: &str = "org.apache.kafka.common.security.plain.PlainLoginModule";

/// Errors raised while assembling consumer properties
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate configuration key `{0}`")]
    DuplicateKey(String),

    /// The JAAS entry quotes credential values with single quotes and
    /// performs no escaping, so a credential containing the delimiter is
    /// rejected rather than interpolated.
    #[error("the resolved {0} contains a single-quote character and cannot be embedded in the SASL configuration")]
    DelimiterInCredential(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Immutable, insertion-ordered configuration map.
///
/// Read accessors only; there is no mutation API once built. `Debug`
/// output redacts the SASL entry so the composed credential string never
/// reaches diagnostics.
#[derive(Clone)]
pub struct ConsumerProperties {
    entries: IndexMap<String, String>,
}

impl ConsumerProperties {
    pub fn builder() -> ConsumerPropertiesBuilder {
        ConsumerPropertiesBuilder::new()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Debug for ConsumerProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.entries {
            if key == SASL_JAAS_CONFIG {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

/// Builder with build-or-throw-on-duplicate semantics
#[derive(Debug, Default)]
pub struct ConsumerPropertiesBuilder {
    entries: IndexMap<String, String>,
}

impl ConsumerPropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, failing if the key was already present
    pub fn put(mut self, key: impl Into<String>, value: impl Into<String>) -> ConfigResult<Self> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(ConfigError::DuplicateKey(key));
        }
        self.entries.insert(key, value.into());
        Ok(self)
    }

    pub fn build(self) -> ConsumerProperties {
        ConsumerProperties {
            entries: self.entries,
        }
    }
}

/// Assemble the consumer properties for SASL/PLAIN over TLS.
///
/// Exactly four entries, in order: `bootstrap.servers` (the input,
/// unmodified), `sasl.mechanism`, `security.protocol`, and the composed
/// `sasl.jaas.config`. Credential values are interpolated verbatim;
/// values containing the single-quote delimiter are rejected up front.
pub fn build_consumer_properties(
    bootstrap_servers: &str,
    credentials: &SaslCredentials,
) -> ConfigResult<ConsumerProperties> {
    if credentials.username.contains('\'') {
        return Err(ConfigError::DelimiterInCredential("username"));
    }
    if credentials.password.expose_secret().contains('\'') {
        return Err(ConfigError::DelimiterInCredential("password"));
    }

    let jaas = format!(
        "{PLAIN_LOGIN_MODULE} required username='{}' password='{}';",
        credentials.username,
        credentials.password.expose_secret(),
    );

    let properties = ConsumerPropertiesBuilder::new()
        .put(BOOTSTRAP_SERVERS, bootstrap_servers)?
        .put(SASL_MECHANISM, "PLAIN")?
        .put(SECURITY_PROTOCOL, "SASL_SSL")?
        .put(SASL_JAAS_CONFIG, jaas)?
        .build();

    Ok(properties)
}
