//! Site configuration loaded from the environment.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ConfigError;

/// Default EmailJS REST endpoint.
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Address that receives contact messages unless overridden.
pub const DEFAULT_CONTACT_EMAIL: &str = "abhibhardwaj622@gmail.com";

/// EmailJS settings. All three identifiers are opaque strings issued by
/// the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    /// Service identifier.
    pub service_id: Option<String>,
    /// Template identifier.
    pub template_id: Option<String>,
    /// Public key (sent as `user_id`).
    pub public_key: Option<String>,
    /// REST endpoint.
    pub endpoint: String,
}

/// Complete relay credentials, available only when nothing is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    /// Creates a config with all three identifiers set.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
        }
    }

    /// Reads `EMAILJS_*` variables, falling back to the `VITE_EMAILJS_*`
    /// names used by the old frontend build.
    pub fn from_env() -> Self {
        Self {
            service_id: env_value(&["EMAILJS_SERVICE_ID", "VITE_EMAILJS_SERVICE_ID"]),
            template_id: env_value(&["EMAILJS_TEMPLATE_ID", "VITE_EMAILJS_TEMPLATE_ID"]),
            public_key: env_value(&["EMAILJS_PUBLIC_KEY", "VITE_EMAILJS_PUBLIC_KEY"]),
            endpoint: env_value(&["EMAILJS_ENDPOINT"])
                .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
        }
    }

    /// Returns the credentials, or which values are absent.
    pub fn credentials(&self) -> Result<RelayCredentials, ConfigError> {
        let mut missing = Vec::new();
        let service_id = present(&self.service_id, "service id", &mut missing);
        let template_id = present(&self.template_id, "template id", &mut missing);
        let public_key = present(&self.public_key, "public key", &mut missing);

        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(RelayCredentials {
                service_id,
                template_id,
                public_key,
            }),
            _ => Err(ConfigError::Incomplete { missing }),
        }
    }

    /// Returns whether all three identifiers are present.
    pub fn is_complete(&self) -> bool {
        self.credentials().is_ok()
    }
}

/// Top-level configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Relay settings.
    pub emailjs: EmailJsConfig,
    /// Recipient of contact messages.
    pub contact_email: String,
    /// Directory holding persisted preferences.
    pub data_dir: PathBuf,
}

impl SiteConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let data_dir = env_value(&["PORTFOLIO_DATA_DIR"])
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self {
            emailjs: EmailJsConfig::from_env(),
            contact_email: env_value(&["PORTFOLIO_CONTACT_EMAIL"])
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            data_dir,
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "portfolio", "portfolio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".portfolio"))
}

fn env_value(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

fn present(
    value: &Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            missing.push(name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_yields_credentials() {
        let config = EmailJsConfig::new("service_x", "template_y", "key_z");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.service_id, "service_x");
        assert_eq!(creds.template_id, "template_y");
        assert_eq!(creds.public_key, "key_z");
        assert!(config.is_complete());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = EmailJsConfig {
            service_id: Some("service_x".to_string()),
            template_id: Some("   ".to_string()),
            public_key: None,
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
        };

        let err = config.credentials().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Incomplete {
                missing: vec!["template id", "public key"]
            }
        );
    }

    #[test]
    fn default_config_is_incomplete() {
        assert!(!EmailJsConfig::default().is_complete());
    }
}
