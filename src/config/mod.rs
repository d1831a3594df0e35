//! Configuration types for the Billbee API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with Billbee.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BillbeeConfig`]: The configuration struct holding credentials and endpoint settings
//! - [`BillbeeConfigBuilder`]: A builder for constructing [`BillbeeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Username`]: A validated account username
//! - [`ApiPassword`]: A validated API password with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use billbee_api::{ApiKey, ApiPassword, BillbeeConfig, Username};
//!
//! let config = BillbeeConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .username(Username::new("shop@example.com").unwrap())
//!     .api_password(ApiPassword::new("api-password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://app.billbee.io/api/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiPassword, BaseUrl, Username};

use crate::error::ConfigError;

/// Configuration for the Billbee API client.
///
/// # Thread Safety
///
/// `BillbeeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct BillbeeConfig {
    api_key: ApiKey,
    username: Username,
    api_password: ApiPassword,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl BillbeeConfig {
    /// Creates a new builder for constructing a `BillbeeConfig`.
    #[must_use]
    pub fn builder() -> BillbeeConfigBuilder {
        BillbeeConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the account username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API password.
    #[must_use]
    pub const fn api_password(&self) -> &ApiPassword {
        &self.api_password
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BillbeeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BillbeeConfig>();
};

/// Builder for constructing [`BillbeeConfig`] instances.
///
/// Required fields are `api_key`, `username` and `api_password`.
///
/// # Defaults
///
/// - `base_url`: `https://app.billbee.io/api/v1`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use billbee_api::{ApiKey, ApiPassword, BaseUrl, BillbeeConfig, Username};
///
/// let config = BillbeeConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .username(Username::new("user").unwrap())
///     .api_password(ApiPassword::new("password").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/api/v1").unwrap())
///     .user_agent_prefix("MyShopSync/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyShopSync/2.1"));
/// ```
#[derive(Debug, Default)]
pub struct BillbeeConfigBuilder {
    api_key: Option<ApiKey>,
    username: Option<Username>,
    api_password: Option<ApiPassword>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl BillbeeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the account username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API password (required).
    #[must_use]
    pub fn api_password(mut self, password: ApiPassword) -> Self {
        self.api_password = Some(password);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BillbeeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key`, `username`
    /// or `api_password` are not set.
    pub fn build(self) -> Result<BillbeeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let api_password = self
            .api_password
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_password",
            })?;

        Ok(BillbeeConfig {
            api_key,
            username,
            api_password,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> BillbeeConfigBuilder {
        BillbeeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .username(Username::new("user").unwrap())
            .api_password(ApiPassword::new("password").unwrap())
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = BillbeeConfigBuilder::new()
            .username(Username::new("user").unwrap())
            .api_password(ApiPassword::new("password").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_username() {
        let result = BillbeeConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .api_password(ApiPassword::new("password").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));
    }

    #[test]
    fn test_builder_requires_api_password() {
        let result = BillbeeConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .username(Username::new("user").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_password"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = complete_builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:9000/api/v1").unwrap();
        let config = complete_builder()
            .base_url(base_url.clone())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_secrets() {
        let config = BillbeeConfig::builder()
            .api_key(ApiKey::new("top-secret-key").unwrap())
            .username(Username::new("user").unwrap())
            .api_password(ApiPassword::new("top-secret-password").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("BillbeeConfig"));
        assert!(!debug_str.contains("top-secret-key"));
        assert!(!debug_str.contains("top-secret-password"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BillbeeConfig>();
    }
}
