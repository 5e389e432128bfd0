//! Transport configuration.
//!
//! Configuration is read from a TOML file. Both the snake_case field names
//! and the dotted property keys used by the API team's existing property
//! files are accepted:
//!
//! ```toml
//! "base.url" = "http://localhost:5000"
//! "api.timeout" = 30000
//! "log.request" = true
//! "log.response" = true
//! "default.distributor.id" = "ss"
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Unknown keys are rejected. Dotted keys must be quoted: an unquoted
//! `base.url = ...` is a nested TOML table and fails to load.

use std::{path::Path, time::Duration};

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{HarnessError, Result};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "DIF_API_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_FILE: &str = "dif-api.toml";

/// Connection settings for the API under test.
///
/// Immutable once loaded; shared by every client built from it.
///
/// # Examples
///
/// ```
/// use dif_api_harness::transport::TransportConfig;
///
/// let config = TransportConfig::from_toml("\"base.url\" = \"http://api.test:8080\"").unwrap();
/// assert_eq!(config.base_url, "http://api.test:8080");
/// assert_eq!(config.timeout_ms, 30_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportConfig {
    /// Root URL of the API, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url", alias = "base.url")]
    pub base_url: String,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms", alias = "api.timeout")]
    pub timeout_ms: u64,

    /// Log every outgoing request.
    #[serde(default = "default_true", alias = "log.request")]
    pub log_requests: bool,

    /// Log the status and body of every non-success response.
    #[serde(default = "default_true", alias = "log.response")]
    pub log_responses: bool,

    /// Distributor used when a test does not name one.
    #[serde(default = "default_distributor_id", alias = "default.distributor.id")]
    pub default_distributor_id: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            log_requests: true,
            log_responses: true,
            default_distributor_id: default_distributor_id(),
        }
    }
}

impl TransportConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the text is not valid TOML, holds
    /// an unknown key or a value has the wrong type.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| HarnessError::Config(format!("invalid TOML: {e}")))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded transport configuration");
        Self::from_toml(&text)
    }

    /// Loads configuration from the file named by `DIF_API_CONFIG`, or from
    /// `dif-api.toml` in the working directory.
    ///
    /// A missing file is fatal: there is no base URL to test against.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the file is missing, unreadable,
    /// unparseable or fails [`validate`](Self::validate).
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
        let config = Self::from_file(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::InvalidBaseUrl`] if `base_url` does not parse or is
    ///   not http(s)
    /// - [`HarnessError::Config`] if `timeout_ms` is zero
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        if self.timeout_ms == 0 {
            return Err(HarnessError::Config("timeout_ms must be positive".to_owned()));
        }
        Ok(())
    }

    /// Parses `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidBaseUrl`] if the URL does not parse, has
    /// no host or uses a scheme other than http or https.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| HarnessError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HarnessError::InvalidBaseUrl(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                self.base_url
            )));
        }
        if url.host_str().is_none() {
            return Err(HarnessError::InvalidBaseUrl(format!("missing host in {}", self.base_url)));
        }
        Ok(url)
    }

    /// Returns the timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_owned()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_true() -> bool {
    true
}

fn default_distributor_id() -> String {
    "ss".to_owned()
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_transport_config_default() {
        let config = TransportConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_ms, 30_000);
        assert!(config.log_requests);
        assert!(config.log_responses);
        assert_eq!(config.default_distributor_id, "ss");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TransportConfig::from_toml("").unwrap();
        assert_eq!(config, TransportConfig::default());
    }

    #[test]
    fn test_dotted_keys() {
        let toml = r#"
            "base.url" = "https://dif.example.com"
            "api.timeout" = 5000
            "log.request" = false
            "log.response" = false
            "default.distributor.id" = "sanmar"
        "#;

        let config = TransportConfig::from_toml(toml).unwrap();
        assert_eq!(config.base_url, "https://dif.example.com");
        assert_eq!(config.timeout_ms, 5000);
        assert!(!config.log_requests);
        assert!(!config.log_responses);
        assert_eq!(config.default_distributor_id, "sanmar");
    }

    #[test]
    fn test_snake_case_keys() {
        let toml = "
            base_url = \"http://127.0.0.1:9000\"
            timeout_ms = 1500
        ";

        let config = TransportConfig::from_toml(toml).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_ms, 1500);
        assert!(config.log_requests); // default
        assert_eq!(config.default_distributor_id, "ss"); // default
    }

    #[test]
    fn test_unquoted_dotted_key_rejected() {
        let err = TransportConfig::from_toml("base.url = \"http://api.test:8080\"").unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
        assert!(err.to_string().contains("base"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = TransportConfig::from_toml("timeout = 5000");
        assert!(matches!(result, Err(HarnessError::Config(_))));
    }

    #[test]
    fn test_timeout_duration() {
        let config = TransportConfig { timeout_ms: 2500, ..Default::default() };
        assert_eq!(config.timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn test_invalid_toml() {
        let result = TransportConfig::from_toml("base_url = ");
        assert!(matches!(result, Err(HarnessError::Config(_))));
    }

    #[test]
    fn test_wrong_value_type() {
        let result = TransportConfig::from_toml("timeout_ms = \"thirty\"");
        assert!(matches!(result, Err(HarnessError::Config(_))));
    }

    #[test]
    fn test_validate_default() {
        assert!(TransportConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = TransportConfig { timeout_ms: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(HarnessError::Config(_))));
    }

    #[test]
    fn test_validate_unparseable_base_url() {
        let config = TransportConfig { base_url: "not a url".to_owned(), ..Default::default() };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_validate_non_http_scheme() {
        let config = TransportConfig {
            base_url: "ftp://files.example.com".to_owned(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = TransportConfig::from_file("/nonexistent/dif-api.toml");
        let err = result.unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/dif-api.toml"));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir()
            .join(format!("dif-api-harness-config-{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "\"base.url\" = \"http://fixture.local:5000\"").unwrap();
        }

        let config = TransportConfig::from_file(&path).unwrap();
        assert_eq!(config.base_url, "http://fixture.local:5000");

        std::fs::remove_file(&path).unwrap();
    }
}
