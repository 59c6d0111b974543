//! HS256 session tokens.

use crate::error::{AuthError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub username: String,
    pub exp: i64,
}

/// Issues and verifies HS256 session tokens with a fixed lifetime.
pub struct TokenManager {
    secret: String,
    lifetime: Duration,
}

impl TokenManager {
    /// Create a manager with the default 24-hour token lifetime.
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into(), lifetime: Duration::hours(24) }
    }

    /// Override the token lifetime.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Issue a token for the given user.
    pub fn issue(&self, user_id: &str, username: &str) -> Result<String> {
        let claims = Claims {
            user_id: user_id.to_string(),
            username: username.to_string(),
            exp: (Utc::now() + self.lifetime).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        if data.claims.user_id.is_empty() {
            return Err(AuthError::InvalidPayload);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify_round_trip() {
        let manager = TokenManager::new("man7ebbech");
        let token = manager.issue("u-1", "alice").unwrap();
        let claims = manager.verify(&token).unwrap();
        assert_eq!(claims.user_id, "u-1");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_expired_token_is_rejected_distinctly() {
        let manager = TokenManager::new("secret").with_lifetime(Duration::hours(-1));
        let token = manager.issue("u-1", "alice").unwrap();
        let fresh = TokenManager::new("secret");
        assert_eq!(fresh.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = TokenManager::new("secret-a").issue("u-1", "alice").unwrap();
        let err = TokenManager::new("secret-b").verify(&token).unwrap_err();
        assert_eq!(err, AuthError::InvalidToken);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let err = TokenManager::new("secret").verify("not.a.jwt").unwrap_err();
        assert_eq!(err, AuthError::InvalidToken);
    }

    #[test]
    fn test_empty_user_id_is_an_invalid_payload() {
        let manager = TokenManager::new("secret");
        let token = manager.issue("", "alice").unwrap();
        assert_eq!(manager.verify(&token).unwrap_err(), AuthError::InvalidPayload);
    }
}
