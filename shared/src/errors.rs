//! Error types for the Authgate service

use crate::models::UserId;
use thiserror::Error;

/// Authentication and authorization failures.
///
/// Messages are deliberately generic; none of them reveal which part of a
/// credential or token check failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or invalid authorization header")]
    MissingOrInvalidHeader,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("No role information")]
    NoRoleInformation,

    #[error("Access denied")]
    Forbidden,
}

/// Token verification failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,

    #[error("Token expired")]
    Expired,
}

impl From<TokenError> for AuthError {
    fn from(_: TokenError) -> Self {
        AuthError::InvalidOrExpiredToken
    }
}

/// Credential store failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("User {0} not found")]
    NotFound(UserId),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}
