//! Validated input bundle for one resolve-and-assemble invocation

use thiserror::Error;

/// Errors raised while validating [`SourceOptions`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("required option `{0}` is empty")]
    Empty(&'static str),
}

/// Input parameters for one configuration build.
///
/// The surrounding command surface (CLI, pipeline options, ...) is expected
/// to have populated every field; [`SourceOptions::validate`] only guards
/// against empty strings so no network call is ever attempted with a
/// half-formed secret reference.
///
/// The project id is an explicit input. There is deliberately no ambient
/// default-project discovery inside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// Secret Manager project the secrets live in
    pub project_id: String,
    /// Kafka bootstrap address, passed through to the client unmodified
    pub bootstrap_servers: String,
    /// Secret id holding the SASL username
    pub username_secret_id: String,
    /// Version of the username secret to access
    pub username_version_id: String,
    /// Secret id holding the SASL password
    pub password_secret_id: String,
    /// Version of the password secret to access
    pub password_version_id: String,
}

impl SourceOptions {
    /// Fail fast if any required field is empty
    pub fn validate(&self) -> Result<(), OptionsError> {
        let fields = [
            ("project_id", &self.project_id),
            ("bootstrap_servers", &self.bootstrap_servers),
            ("username_secret_id", &self.username_secret_id),
            ("username_version_id", &self.username_version_id),
            ("password_secret_id", &self.password_secret_id),
            ("password_version_id", &self.password_version_id),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(OptionsError::Empty(name));
            }
        }
        Ok(())
    }
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

    #[test]
    fn test_validate_accepts_complete_options() {
        assert_eq!(options().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_project() {
        let mut opts = options();
        opts.project_id = String::new();
        assert_eq!(opts.validate(), Err(OptionsError::Empty("project_id")));
    }

    #[test]
    fn test_validate_rejects_empty_version() {
        let mut opts = options();
        opts.password_version_id = String::new();
        assert_eq!(
            opts.validate(),
            Err(OptionsError::Empty("password_version_id"))
        );
    }
}
