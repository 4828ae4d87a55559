use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[cfg(not(target_arch = "wasm32"))]
use std::{env, fs, path::Path};

/// Errors raised while resolving the client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("unsupported configuration format '{0}'. Use 'yaml' or 'json'.")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Endpoints and identity used by the Holocron clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the catalogue API; listings live at `{root}/{kind}`.
    pub catalogue_base_url: String,

    /// Root of the contacts API; collections live at `{root}/agendas/{user}`.
    pub contacts_base_url: String,

    /// Owner of the contact collection.
    pub contacts_user: String,

    /// Root of the authentication API.
    pub auth_base_url: String,

    /// Logging level used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            catalogue_base_url: "https://www.swapi.tech/api".to_owned(),
            contacts_base_url: "https://playground.4geeks.com/contact".to_owned(),
            contacts_user: "chanchitoFeliz".to_owned(),
            auth_base_url: "http://localhost:3001".to_owned(),
            log_level: "info".to_owned(),
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// File values win over environment variables, which only fill in fields
    /// still at their default.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, has an unknown
    /// extension, or the resolved configuration is invalid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::with_defaults(),
        };

        let defaults = Self::with_defaults();
        let overrides: [(&str, fn(&mut Self) -> &mut String, &String); 5] = [
            (
                "HOLOCRON_CATALOGUE_URL",
                |config| &mut config.catalogue_base_url,
                &defaults.catalogue_base_url,
            ),
            (
                "HOLOCRON_CONTACTS_URL",
                |config| &mut config.contacts_base_url,
                &defaults.contacts_base_url,
            ),
            (
                "HOLOCRON_CONTACTS_USER",
                |config| &mut config.contacts_user,
                &defaults.contacts_user,
            ),
            (
                "HOLOCRON_AUTH_URL",
                |config| &mut config.auth_base_url,
                &defaults.auth_base_url,
            ),
            (
                "HOLOCRON_LOG_LEVEL",
                |config| &mut config.log_level,
                &defaults.log_level,
            ),
        ];
        for (variable, field, default) in overrides {
            let slot = field(&mut config);
            if slot == default
                && let Ok(value) = env::var(variable)
            {
                *slot = value;
            }
        }

        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_owned(),
            )),
        }
    }

    /// Checks every endpoint and the contacts user.
    ///
    /// # Errors
    /// Returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("catalogue_base_url", &self.catalogue_base_url),
            ("contacts_base_url", &self.contacts_base_url),
            ("auth_base_url", &self.auth_base_url),
        ] {
            match Url::parse(value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(format!(
                    "{name} must use http or https, got '{}'",
                    url.scheme()
                )),
                Err(error) => errors.push(format!("{name} is not a valid URL: {error}")),
            }
        }

        if self.contacts_user.trim().is_empty() {
            errors.push("contacts_user must not be empty".to_owned());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    const VARIABLES: [&str; 5] = [
        "HOLOCRON_CATALOGUE_URL",
        "HOLOCRON_CONTACTS_URL",
        "HOLOCRON_CONTACTS_USER",
        "HOLOCRON_AUTH_URL",
        "HOLOCRON_LOG_LEVEL",
    ];

    fn cleanup_env_vars() {
        for variable in VARIABLES {
            unsafe {
                std::env::remove_var(variable);
            }
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = ClientConfig::with_defaults();
        assert_eq!(config.contacts_user, "chanchitoFeliz");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn load_without_file_uses_defaults() {
        cleanup_env_vars();
        let config = ClientConfig::load_config(None).unwrap();
        assert_eq!(config, ClientConfig::with_defaults());
    }

    #[test]
    #[serial]
    fn environment_fills_default_fields() {
        cleanup_env_vars();
        unsafe {
            std::env::set_var("HOLOCRON_CONTACTS_USER", "lukeskywalker");
            std::env::set_var("HOLOCRON_LOG_LEVEL", "debug");
        }

        let config = ClientConfig::load_config(None).unwrap();
        cleanup_env_vars();

        assert_eq!(config.contacts_user, "lukeskywalker");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn file_values_win_over_environment() {
        cleanup_env_vars();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("holocron.yaml");
        fs::write(&path, "contacts_user: hansolo\n").unwrap();
        unsafe {
            std::env::set_var("HOLOCRON_CONTACTS_USER", "lukeskywalker");
        }

        let config = ClientConfig::load_config(Some(&path)).unwrap();
        cleanup_env_vars();

        assert_eq!(config.contacts_user, "hansolo");
        assert_eq!(config.catalogue_base_url, "https://www.swapi.tech/api");
    }

    #[test]
    #[serial]
    fn json_files_are_supported() {
        cleanup_env_vars();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("holocron.json");
        fs::write(&path, r#"{"auth_base_url": "https://auth.example.com"}"#).unwrap();

        let config = ClientConfig::load_config(Some(&path)).unwrap();
        assert_eq!(config.auth_base_url, "https://auth.example.com");
    }

    #[test]
    #[serial]
    fn unknown_extension_is_rejected() {
        cleanup_env_vars();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("holocron.toml");
        fs::write(&path, "").unwrap();

        let error = ClientConfig::load_config(Some(&path)).unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn validation_reports_every_problem() {
        let config = ClientConfig {
            catalogue_base_url: "ftp://swapi".into(),
            contacts_base_url: "not a url".into(),
            contacts_user: " ".into(),
            ..ClientConfig::with_defaults()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("http or https"));
    }
}
