//! API request and response types

use crate::models::{Role, UserId, UserSummary};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Registration request
///
/// Fields are optional at the serde level so that an absent field turns into
/// a validation failure instead of a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User block returned alongside a fresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<UserSummary> for LoginUser {
    fn from(user: UserSummary) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// Role change request (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    pub user_id: UserId,
    pub new_role: Role,
}

/// User block returned after a role change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleChangeUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl From<UserSummary> for RoleChangeUser {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// Role change response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChangeResponse {
    pub message: String,
    pub user: RoleChangeUser,
}

/// Plain informational message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Message plus the caller's verified claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsResponse<C> {
    pub message: String,
    pub user: C,
}
