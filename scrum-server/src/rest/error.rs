//! Error-to-response mapping.
//!
//! Every failure leaves the server as `{ "error": "<message>" }` with the
//! status the category dictates; upstream detail goes to the log, not the
//! caller, unless `expose_error_details` is set.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scrum_auth::AuthError;
use scrum_core::ScrumError;
use scrum_github::GitHubError;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Map an analyzer failure, optionally appending upstream detail.
pub fn scrum_error_response(err: ScrumError, expose_details: bool) -> ApiError {
    let (status, message) = match &err {
        ScrumError::RateLimited(_) => (
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests, try again in a few moments.",
        ),
        ScrumError::CreditsExhausted(_) => (StatusCode::PAYMENT_REQUIRED, "Insufficient credits."),
        ScrumError::ModelFormat(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Invalid format in AI response")
        }
        ScrumError::MissingField(field) => {
            return ApiError::bad_request(format!("Missing field: {}", field));
        }
        ScrumError::Gateway(_)
        | ScrumError::Config(_)
        | ScrumError::Io(_)
        | ScrumError::Serde(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed"),
    };

    tracing::error!(error = %err, "analysis request failed");

    if expose_details {
        ApiError::new(status, format!("{} ({})", message, err))
    } else {
        ApiError::new(status, message)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match err {
            AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::InvalidToken
            | AuthError::InvalidPayload
            | AuthError::UnknownUser
            | AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AuthError::UnknownEmail => StatusCode::NOT_FOUND,
            AuthError::DuplicateEmail | AuthError::DuplicateUsername => StatusCode::BAD_REQUEST,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<GitHubError> for ApiError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::OauthRejected(description) => ApiError::bad_request(description),
            GitHubError::Api { .. } | GitHubError::Transport(_) => {
                tracing::error!(error = %err, "GitHub request failed");
                ApiError::new(StatusCode::BAD_GATEWAY, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_maps_to_429() {
        let err = scrum_error_response(ScrumError::RateLimited("429".to_string()), false);
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_credits_map_to_402() {
        let err = scrum_error_response(ScrumError::CreditsExhausted("402".to_string()), false);
        assert_eq!(err.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_format_error_maps_to_500() {
        let err = scrum_error_response(ScrumError::ModelFormat("eof".to_string()), false);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_token_maps_to_401() {
        let err: ApiError = AuthError::MissingToken.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unknown_email_maps_to_404() {
        let err: ApiError = AuthError::UnknownEmail.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_oauth_rejection_maps_to_400() {
        let err: ApiError = GitHubError::OauthRejected("bad code".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
