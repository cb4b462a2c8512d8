//! HS256 JWT adapter for session validation.
//!
//! This adapter implements the `SessionValidator` port for tokens signed with
//! a shared HS256 secret, the scheme used by the hosted auth directory. It
//! validates the signature and expiry, then maps the `sub` and `email` claims
//! to the domain `AuthenticatedUser` type.
//!
//! Role claims are deliberately ignored here: authorization always reads the
//! profile row, never the token.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::str::FromStr;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT session validator.
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HS256 signing secret.
    pub secret: SecretString,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }
}

/// Session token claims.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    /// Subject - the user ID
    sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    #[allow(dead_code)]
    exp: i64,

    /// User's email address
    #[serde(default)]
    email: Option<String>,
}

/// HS256 session validator.
///
/// This is the production implementation of `SessionValidator`.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Create a new validator from the shared secret.
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // The directory sets aud to a fixed marker; it carries no information
        // we act on, so skip it rather than pin the marker string.
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::warn!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;

        let claims = token_data.claims;

        let user_id = UserId::from_str(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser {
            id: user_id,
            email: claims.email,
        })
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator").finish_non_exhaustive()
    }
}
