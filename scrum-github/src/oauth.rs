//! GitHub OAuth code exchange.
//!
//! Two chained calls: POST the authorization code for an access token, then
//! GET the authenticated user's profile. No state is kept between calls.

use crate::config::{GitHubConfig, USER_AGENT};
use crate::error::{GitHubError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Reply of the access token endpoint. GitHub reports OAuth failures in the
/// body with HTTP 200, so the error fields are part of the success shape.
#[derive(Debug, Deserialize)]
struct AccessTokenReply {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// The slice of the user profile the service reads.
#[derive(Debug, Deserialize)]
struct UserReply {
    login: String,
    avatar_url: Option<String>,
}

/// Result of a completed code exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorizedUser {
    pub access_token: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// The OAuth exchange seam the HTTP surface depends on.
#[async_trait]
pub trait CodeExchanger: Send + Sync {
    /// The OAuth app client id for the browser's authorize redirect.
    fn client_id(&self) -> &str;

    /// Exchange an authorization code for a token and the user's identity.
    async fn exchange_code(&self, code: &str) -> Result<AuthorizedUser>;
}

/// OAuth client backed by the real GitHub endpoints.
pub struct OauthClient {
    client: Client,
    config: GitHubConfig,
}

impl OauthClient {
    /// Create a new OAuth client.
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitHubError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn token_url(&self) -> String {
        format!(
            "{}/login/oauth/access_token",
            self.config.effective_oauth_base().trim_end_matches('/')
        )
    }

    fn user_url(&self) -> String {
        format!("{}/user", self.config.effective_api_base().trim_end_matches('/'))
    }
}

#[async_trait]
impl CodeExchanger for OauthClient {
    fn client_id(&self) -> &str {
        &self.config.client_id
    }

    async fn exchange_code(&self, code: &str) -> Result<AuthorizedUser> {
        let reply = self
            .client
            .post(self.token_url())
            .header("Accept", "application/json")
            .json(&json!({
                "client_id": self.config.client_id,
                "client_secret": self.config.client_secret,
                "code": code,
            }))
            .send()
            .await
            .map_err(|e| GitHubError::Transport(format!("token exchange failed: {}", e)))?;

        let token: AccessTokenReply = reply
            .json()
            .await
            .map_err(|e| GitHubError::Transport(format!("failed to read token reply: {}", e)))?;

        if let Some(error) = token.error {
            return Err(GitHubError::OauthRejected(
                token.error_description.unwrap_or(error),
            ));
        }

        let access_token = token
            .access_token
            .ok_or_else(|| GitHubError::OauthRejected("reply carried no access token".to_string()))?;

        let reply = self
            .client
            .get(self.user_url())
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| GitHubError::Transport(format!("user fetch failed: {}", e)))?;

        let status = reply.status();
        if !status.is_success() {
            let body = reply.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status: status.as_u16(), body });
        }

        let user: UserReply = reply
            .json()
            .await
            .map_err(|e| GitHubError::Transport(format!("failed to read user reply: {}", e)))?;

        tracing::info!(username = %user.login, "GitHub OAuth exchange completed");

        Ok(AuthorizedUser {
            access_token,
            username: user.login,
            avatar_url: user.avatar_url,
        })
    }
}
