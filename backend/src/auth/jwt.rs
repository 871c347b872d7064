//! JWT token generation and validation
//!
//! Tokens are HS256-signed and carry the caller's identity and role. They are
//! verified statelessly: no store lookup, no revocation list.

use anyhow::Result;
use authgate_shared::{Role, TokenError, UserId, UserSummary};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lifetime of every issued token (1 hour)
pub const TOKEN_TTL_SECS: i64 = 3600;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Cheap to clone; keys are shared behind `Arc`.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` with an exclusive bound and no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            validation,
        }
    }

    /// Issue a token for a user, valid from now for [`TOKEN_TTL_SECS`]
    #[inline]
    pub fn issue(&self, user: &UserSummary) -> Result<String> {
        self.issue_at(user, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, user: &UserSummary, now: i64) -> Result<String> {
        let claims = Claims {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token and return its claims
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// Signature and structure are checked before expiry, so a tampered
    /// token is `Invalid` even when it is also past its `exp`.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map_err(|_| TokenError::Invalid)?
            .claims;

        if now >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
