//! HTTP client for the hosted auth directory's admin API.
//!
//! This adapter implements the `AuthDirectory` port against a GoTrue-style
//! admin surface: invite by email, delete an account, set a password. Every
//! request carries the service-role key as a bearer token; that key never
//! reaches request logs or Debug output.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::AuthDirectory;

/// Configuration for the directory client.
#[derive(Clone)]
pub struct DirectoryConfig {
    /// Base URL of the admin API (no trailing slash required).
    pub base_url: String,

    /// Service-role key sent as a bearer token.
    pub service_role_key: SecretString,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl DirectoryConfig {
    pub fn new(base_url: impl Into<String>, service_role_key: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            service_role_key,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Response body for a successful invite.
#[derive(Debug, Deserialize)]
struct InvitedAccount {
    id: UserId,
}

/// Error body the directory returns on failure. Fields vary by endpoint.
#[derive(Debug, Default, Deserialize)]
struct DirectoryErrorBody {
    #[serde(default)]
    msg: Option<String>,

    #[serde(default)]
    message: Option<String>,
}

impl DirectoryErrorBody {
    fn into_message(self, status: reqwest::StatusCode) -> String {
        self.msg
            .or(self.message)
            .unwrap_or_else(|| format!("directory returned {}", status))
    }
}

/// Production implementation of `AuthDirectory`.
pub struct DirectoryClient {
    config: DirectoryConfig,
    http_client: reqwest::Client,
}

impl DirectoryClient {
    /// Create a new client. Fails only if the TLS backend cannot initialize.
    pub fn new(config: DirectoryConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::AuthDirectoryError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(self.config.service_role_key.expose_secret())
    }

    async fn check(
        &self,
        response: reqwest::Response,
        operation: &str,
    ) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: DirectoryErrorBody = response.json().await.unwrap_or_default();
        let message = body.into_message(status);
        tracing::warn!(%status, operation, "directory request failed: {}", message);

        Err(DomainError::new(ErrorCode::AuthDirectoryError, message))
    }
}

#[async_trait]
impl AuthDirectory for DirectoryClient {
    async fn invite_by_email(&self, email: &str) -> Result<UserId, DomainError> {
        let response = self
            .authorized(self.http_client.post(self.config.endpoint("invite")))
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::AuthDirectoryError,
                    format!("Invite request failed: {}", e),
                )
            })?;

        let response = self.check(response, "invite").await?;

        let account: InvitedAccount = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::AuthDirectoryError,
                format!("Invalid invite response: {}", e),
            )
        })?;

        Ok(account.id)
    }

    async fn delete_account(&self, user_id: &UserId) -> Result<(), DomainError> {
        let response = self
            .authorized(
                self.http_client
                    .delete(self.config.endpoint(&format!("admin/users/{}", user_id))),
            )
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::AuthDirectoryError,
                    format!("Delete request failed: {}", e),
                )
            })?;

        self.check(response, "delete_account").await?;
        Ok(())
    }

    async fn set_password(&self, user_id: &UserId, password: &str) -> Result<(), DomainError> {
        let response = self
            .authorized(
                self.http_client
                    .put(self.config.endpoint(&format!("admin/users/{}", user_id))),
            )
            .json(&json!({ "password": password }))
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::AuthDirectoryError,
                    format!("Password request failed: {}", e),
                )
            })?;

        self.check(response, "set_password").await?;
        Ok(())
    }
}

impl std::fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
