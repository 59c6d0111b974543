//! Error types for authentication.
//!
//! Display strings double as the API error messages, so they are part of
//! the wire contract.

use thiserror::Error;

/// Result type alias for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Token is missing!")]
    MissingToken,

    #[error("Token has expired!")]
    TokenExpired,

    #[error("Invalid token!")]
    InvalidToken,

    #[error("Invalid token payload!")]
    InvalidPayload,

    /// The token's user no longer exists in the store.
    #[error("User not found!")]
    UnknownUser,

    /// Login attempt with an unregistered email.
    #[error("User not found")]
    UnknownEmail,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Auth error: {0}")]
    Internal(String),
}
