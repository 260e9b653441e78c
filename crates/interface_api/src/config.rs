//! API configuration

use argon2::password_hash::PasswordHash;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
    /// Email of the account allowed to log in
    pub login_email: String,
    /// Argon2 PHC string of that account's password
    pub login_password_hash: String,
    /// Single origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
            login_email: String::new(),
            login_password_hash: String::new(),
            cors_allowed_origin: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset keys keep their [`Default`] values.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&ApiConfig::default())?)
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks the settings the server cannot run without
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(CoreError::configuration("jwt_secret must not be empty"));
        }
        if self.jwt_expiration_secs == 0 {
            return Err(CoreError::configuration("jwt_expiration_secs must be positive"));
        }
        if self.login_email.trim().is_empty() {
            return Err(CoreError::configuration("login_email must be set"));
        }
        PasswordHash::new(&self.login_password_hash).map_err(|e| {
            CoreError::configuration(format!("login_password_hash is not a PHC string: {e}"))
        })?;
        if let Some(origin) = &self.cors_allowed_origin {
            HeaderValue::from_str(origin).map_err(|_| {
                CoreError::configuration(format!("cors_allowed_origin is not a valid origin: {origin}"))
            })?;
        }
        Ok(())
    }
}
