//! Error types shared across services.
//!
//! Nothing here is fatal to the process. Storage errors are absorbed by the
//! theme store; contact errors are mapped to a fixed user-facing message and
//! surfaced through the submission status.

use std::path::PathBuf;

use thiserror::Error;

/// Shown when local validation rejects the contact form.
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields with a valid email.";

/// Shown for missing relay credentials and any transport or provider failure.
pub const DELIVERY_MESSAGE: &str = "Failed to send message. Try again or contact via email.";

/// Failure reading or writing durable key-value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure talking to the transactional email provider.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid relay endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Relay credentials are missing from the deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration values: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// Why a contact submission did not go through.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact form is incomplete or the email address is malformed")]
    Validation,

    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ContactError {
    /// Returns the message shown to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Validation => VALIDATION_MESSAGE,
            ContactError::Configuration(_) | ContactError::Relay(_) => DELIVERY_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_fixed() {
        assert_eq!(ContactError::Validation.user_message(), VALIDATION_MESSAGE);

        let config = ContactError::from(ConfigError::Incomplete {
            missing: vec!["service id"],
        });
        assert_eq!(config.user_message(), DELIVERY_MESSAGE);

        let relay = ContactError::from(RelayError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        });
        assert_eq!(relay.user_message(), DELIVERY_MESSAGE);
    }

    #[test]
    fn json_errors_convert_into_storage_errors() {
        let source = serde_json::from_str::<bool>("{").unwrap_err();
        let err = StorageError::from(source);
        assert!(matches!(err, StorageError::Json(_)));
        assert!(err.to_string().starts_with("stored value is not valid JSON"));
    }

    #[test]
    fn incomplete_config_lists_missing_values() {
        let err = ConfigError::Incomplete {
            missing: vec!["service id", "public key"],
        };
        assert_eq!(
            err.to_string(),
            "missing configuration values: service id, public key"
        );
    }
}
