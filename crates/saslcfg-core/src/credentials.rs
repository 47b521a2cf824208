//! Resolved SASL credential pair

use secrecy::SecretString;

/// Username/password pair resolved from the secret store.
///
/// Ordered: the username always comes from the first lookup, the password
/// from the second. The password is wrapped in [`SecretString`] as soon as
/// it is decoded, so `Debug` formatting and tracing output can never
/// contain it. The pair is consumed by the configuration assembler and
/// dropped afterwards; nothing in this crate caches it.
#[derive(Debug)]
pub struct SaslCredentials {
    pub username: String,
    pub password: SecretString,
}

impl SaslCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_credentials_hold_both_values() {
        let credentials = SaslCredentials::new("alice", "s3cr3t");
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password.expose_secret(), "s3cr3t");
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let credentials = SaslCredentials::new("alice", "s3cr3t");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cr3t"));
    }
}
