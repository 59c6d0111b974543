//! Error types for the GitHub integration.

use thiserror::Error;

/// Result type alias for GitHub operations.
pub type Result<T> = std::result::Result<T, GitHubError>;

#[derive(Debug, Error)]
pub enum GitHubError {
    /// The OAuth endpoint rejected the authorization code. Carries the
    /// upstream `error_description` (or `error`) verbatim.
    #[error("{0}")]
    OauthRejected(String),

    /// Any non-success reply from the GitHub REST API.
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request never produced an HTTP reply.
    #[error("GitHub request failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_rejection_passes_description_through() {
        let err = GitHubError::OauthRejected("The code passed is incorrect.".to_string());
        assert_eq!(err.to_string(), "The code passed is incorrect.");
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = GitHubError::Api { status: 422, body: "name exists".to_string() };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("name exists"));
    }
}
