//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `opdesk.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use opdesk_adapter_rest::RestConfig;
use opdesk_app::config::FormConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hospital backend REST settings.
    pub backend: RestConfig,
    /// Form feature flags and calendar colors.
    pub form: FormConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `opdesk.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("opdesk.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("OPDESK_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("OPDESK_BACKEND_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.backend.timeout_secs = secs;
            }
        }
        if let Some(val) = Self::logging_override(
            std::env::var("OPDESK_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        ) {
            self.logging.filter = val;
        }
    }

    /// The app-specific variable beats the generic one.
    fn logging_override(opdesk_log: Option<String>, rust_log: Option<String>) -> Option<String> {
        opdesk_log.or(rust_log)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend timeout must be non-zero".to_string(),
            ));
        }
        if self.backend.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "backend base URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "opdesk_cli=info,opdesk=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(
            config.backend.base_url,
            "http://localhost:8080/openmrs/ws/rest/v1"
        );
        assert_eq!(config.backend.timeout_secs, 30);
        assert!(!config.form.enable_specialities);
        assert!(config.form.colors.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [backend]
            base_url = 'https://emr.example.org/openmrs/ws/rest/v1'
            timeout_secs = 10

            [form]
            enable_specialities = true
            enable_service_types = true
            enable_calendar_view = true
            colors = ['#000000', '#111111']

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.backend.base_url,
            "https://emr.example.org/openmrs/ws/rest/v1"
        );
        assert_eq!(config.backend.timeout_secs, 10);
        assert!(config.form.enable_specialities);
        assert_eq!(config.form.colors.len(), 2);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [form]
            enable_calendar_view = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.form.enable_calendar_view);
        assert!(!config.form.enable_specialities);
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.backend.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_base_url() {
        let mut config = Config::default();
        config.backend.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_prefer_app_specific_log_variable_over_generic() {
        let filter =
            Config::logging_override(Some("opdesk=debug".to_string()), Some("warn".to_string()));
        assert_eq!(filter.as_deref(), Some("opdesk=debug"));
    }

    #[test]
    fn should_fall_back_to_generic_log_variable() {
        let filter = Config::logging_override(None, Some("warn".to_string()));
        assert_eq!(filter.as_deref(), Some("warn"));
    }

    #[test]
    fn should_keep_configured_filter_when_no_log_variables_set() {
        assert_eq!(Config::logging_override(None, None), None);
    }
}
