//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum byte length for the HS256 signing secret.
const MIN_JWT_SECRET_LEN: usize = 32;

/// Authentication configuration (session JWTs plus the auth directory API)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret used to verify session tokens
    pub jwt_secret: SecretString,

    /// Base URL of the auth directory admin API
    pub directory_url: String,

    /// Service-role key sent as a bearer token to the directory
    pub service_role_key: SecretString,

    /// Directory request timeout in seconds
    #[serde(default = "default_directory_timeout")]
    pub directory_timeout_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the directory URL.
    /// In development, allows localhost with HTTP/HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.expose_secret().len() < MIN_JWT_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.directory_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__DIRECTORY_URL"));
        }
        if !self.directory_url.starts_with("http://") && !self.directory_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidDirectoryUrl);
        }
        if self.service_role_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SERVICE_ROLE_KEY"));
        }

        // In production, require HTTPS
        if *environment == Environment::Production && !self.directory_url.starts_with("https://") {
            return Err(ValidationError::DirectoryMustBeHttps);
        }

        Ok(())
    }
}

fn default_directory_timeout() -> u64 {
    10
}
