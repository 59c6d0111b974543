//! Configuration types for the GitHub integration.

use serde::{Deserialize, Serialize};

/// Default GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Default GitHub OAuth base URL.
pub const GITHUB_OAUTH_BASE: &str = "https://github.com";

/// User-Agent sent on every GitHub call; the API rejects anonymous clients.
pub const USER_AGENT: &str = "scrumagent";

/// OAuth app credentials plus optional base URL overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// OAuth app client id, handed to the browser for the authorize step.
    pub client_id: String,
    /// OAuth app client secret, used server-side only.
    pub client_secret: String,
    /// Optional custom REST API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Optional custom OAuth base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_base: Option<String>,
}

impl GitHubConfig {
    /// Create a config with the given OAuth app credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Default::default()
        }
    }

    /// Set a custom REST API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set a custom OAuth base URL.
    pub fn with_oauth_base(mut self, oauth_base: impl Into<String>) -> Self {
        self.oauth_base = Some(oauth_base.into());
        self
    }

    /// Get the effective REST API base URL.
    pub fn effective_api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(GITHUB_API_BASE)
    }

    /// Get the effective OAuth base URL.
    pub fn effective_oauth_base(&self) -> &str {
        self.oauth_base.as_deref().unwrap_or(GITHUB_OAUTH_BASE)
    }
}
