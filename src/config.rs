//! Client configuration for the Zendesk API.
//!
//! This module handles construction-time configuration: the account base
//! URL, the authentication credentials, the API version selector, and the
//! transport timeout. Configuration can be built directly or loaded from
//! environment variables, with validation to ensure all required values
//! are present.

use std::env;
use std::time::Duration;

use url::Url;

use crate::auth::Credentials;
use crate::error::ZdeskError;

/// Default transport timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which generation of the Zendesk REST API to target.
///
/// The version only selects the path prefix endpoints are served under;
/// the endpoint registry itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Legacy v1 endpoints, served from the account root.
    V1,

    /// Current v2 endpoints, served under `/api/v2`.
    #[default]
    V2,
}

impl ApiVersion {
    /// Returns the path prefix requests are issued under.
    pub fn path_prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "",
            ApiVersion::V2 => "/api/v2",
        }
    }

    /// Parses a version selector as found in `ZENDESK_API_VERSION`.
    fn parse(value: &str) -> Result<Self, ZdeskError> {
        match value.trim() {
            "1" => Ok(ApiVersion::V1),
            "2" => Ok(ApiVersion::V2),
            other => Err(ZdeskError::invalid_config(format!(
                "unsupported Zendesk API version: {}",
                other
            ))),
        }
    }
}

/// Configuration for connecting to a Zendesk account.
///
/// Immutable once a client has been constructed from it. The credentials
/// are stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the account (e.g. `https://company.zendesk.com`),
    /// validated and stripped of any trailing slash.
    pub base_url: String,

    /// Authentication credentials; exactly one scheme per client.
    pub credentials: Credentials,

    /// API version selector, `V2` unless overridden.
    pub version: ApiVersion,

    /// Transport timeout applied to the underlying HTTP client.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration from a base URL and credentials.
    ///
    /// # Errors
    ///
    /// Returns `ZdeskError::Config` if the base URL is not a valid http or
    /// https URL.
    ///
    /// # Example
    ///
    /// ```
    /// use zdesk::auth::Credentials;
    /// use zdesk::config::Config;
    ///
    /// let config = Config::new(
    ///     "https://company.zendesk.com",
    ///     Credentials::token("agent@company.com", "api-token"),
    /// )?;
    /// # Ok::<(), zdesk::error::ZdeskError>(())
    /// ```
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, ZdeskError> {
        let base_url = Self::validate_base_url(base_url.into())?;

        Ok(Config {
            base_url,
            credentials,
            version: ApiVersion::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Selects the API version (default: [`ApiVersion::V2`]).
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Overrides the transport timeout (default: 30 seconds).
    ///
    /// This is the only timeout the library knows about; it is handed to
    /// the underlying HTTP client verbatim.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZENDESK_URL`: Base URL of the account
    /// - `ZENDESK_EMAIL`: Account email used for authentication
    /// - Exactly one of:
    ///   - `ZENDESK_TOKEN`: API token (preferred)
    ///   - `ZENDESK_PASSWORD`: Account password
    ///
    /// # Optional Environment Variables
    ///
    /// - `ZENDESK_API_VERSION`: `1` or `2` (default `2`)
    ///
    /// # Errors
    ///
    /// Returns `ZdeskError::Config` if any required variable is missing,
    /// if both secret variables are set, or if values fail validation.
    pub fn from_env() -> Result<Self, ZdeskError> {
        let base_url = Self::get_required_env("ZENDESK_URL")?;
        let email = Self::get_required_env("ZENDESK_EMAIL")?;

        let token = Self::get_optional_env("ZENDESK_TOKEN");
        let password = Self::get_optional_env("ZENDESK_PASSWORD");

        let credentials = match (token, password) {
            (Some(_), Some(_)) => {
                return Err(ZdeskError::invalid_config(
                    "set exactly one of ZENDESK_TOKEN and ZENDESK_PASSWORD",
                ))
            }
            (Some(token), None) => Credentials::token(email, token),
            (None, Some(password)) => Credentials::basic(email, password),
            (None, None) => {
                return Err(ZdeskError::missing_env("ZENDESK_TOKEN or ZENDESK_PASSWORD"))
            }
        };

        let mut config = Config::new(base_url, credentials)?;
        if let Some(version) = Self::get_optional_env("ZENDESK_API_VERSION") {
            config.version = ApiVersion::parse(&version)?;
        }

        Ok(config)
    }

    /// Gets a required environment variable, returning an error if missing
    /// or empty.
    fn get_required_env(name: &str) -> Result<String, ZdeskError> {
        env::var(name)
            .map_err(|_| ZdeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(ZdeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Gets an optional environment variable, treating empty values as unset.
    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, ZdeskError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url)
            .map_err(|e| ZdeskError::invalid_config(format!("invalid base URL: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ZdeskError::invalid_config(
                "base URL must start with http:// or https://",
            ));
        }

        if parsed.host_str().is_none() {
            return Err(ZdeskError::invalid_config("base URL must include a host"));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: tests that modify environment variables would race under the
    // default parallel test runner, so only the pure validators are covered
    // here.

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let result = Config::validate_base_url("https://company.zendesk.com/".to_string()).unwrap();
        assert_eq!(result, "https://company.zendesk.com");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        let result = Config::validate_base_url("company.zendesk.com".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_base_url_rejects_other_schemes() {
        let result = Config::validate_base_url("ftp://company.zendesk.com".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_api_version_prefixes() {
        assert_eq!(ApiVersion::V1.path_prefix(), "");
        assert_eq!(ApiVersion::V2.path_prefix(), "/api/v2");
    }

    #[test]
    fn test_api_version_parse() {
        assert_eq!(ApiVersion::parse("1").unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::parse("2").unwrap(), ApiVersion::V2);
        assert!(ApiVersion::parse("3").is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new(
            "https://company.zendesk.com",
            Credentials::token("agent@company.com", "tok"),
        )
        .unwrap();
        assert_eq!(config.version, ApiVersion::V2);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new(
            "https://company.zendesk.com",
            Credentials::basic("agent@company.com", "pw"),
        )
        .unwrap()
        .with_version(ApiVersion::V1)
        .with_timeout(Duration::from_secs(5));
        assert_eq!(config.version, ApiVersion::V1);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
