//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Billbee API key.
///
/// The key identifies the integrating application and is sent with every
/// request in the `X-Billbee-Api-Key` header. Its value is masked in debug
/// output.
///
/// # Example
///
/// ```rust
/// use billbee_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Billbee account username, used for HTTP Basic authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Billbee API password.
///
/// This is the dedicated API password configured in the Billbee account
/// settings, not the login password.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiPassword(*****)`.
///
/// # Example
///
/// ```rust
/// use billbee_api::ApiPassword;
///
/// let password = ApiPassword::new("s3cret").unwrap();
/// assert_eq!(format!("{:?}", password), "ApiPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiPassword(String);

impl ApiPassword {
    /// Creates a new validated API password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyApiPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for ApiPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiPassword(*****)")
    }
}

/// A validated base URL for the Billbee API.
///
/// The URL must carry a scheme and a host. Trailing slashes are removed so
/// request paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use billbee_api::BaseUrl;
///
/// let url = BaseUrl::new("https://app.billbee.io/api/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://app.billbee.io/api/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("app.billbee.io"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The public Billbee API endpoint.
    pub const DEFAULT: &'static str = "https://app.billbee.io/api/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 22,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("very-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("very-secret-key"));
    }

    #[test]
    fn test_username_rejects_empty_string() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
        assert_eq!(Username::new("shop@example.com").unwrap().as_ref(), "shop@example.com");
    }

    #[test]
    fn test_api_password_masks_value_in_debug() {
        let password = ApiPassword::new("hunter2").unwrap();
        let debug_output = format!("{:?}", password);
        assert_eq!(debug_output, "ApiPassword(*****)");
        assert!(!debug_output.contains("hunter2"));
        assert!(matches!(
            ApiPassword::new(""),
            Err(ConfigError::EmptyApiPassword)
        ));
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://app.billbee.io/api/v1").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("app.billbee.io"));

        // With port
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://app.billbee.io/api/v1//").unwrap();
        assert_eq!(url.as_ref(), "https://app.billbee.io/api/v1");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("app.billbee.io").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://app.billbee.io").is_err());
        assert!(BaseUrl::new("https://:443/api").is_err());
    }

    #[test]
    fn test_default_base_url_matches_parsed_default() {
        let parsed = BaseUrl::new(BaseUrl::DEFAULT).unwrap();
        assert_eq!(BaseUrl::default(), parsed);
        assert_eq!(BaseUrl::default().host_name(), Some("app.billbee.io"));
    }
}
