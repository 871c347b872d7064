//! Authentication module
//!
//! Provides JWT-based authentication with argon2 password hashing and
//! role-based authorization.

pub mod gate;
mod jwt;
mod middleware;
mod password;
mod rbac;

pub use jwt::{Claims, JwtService, TOKEN_TTL_SECS};
pub use middleware::{auth_middleware, require_roles, AuthUser};
pub use password::PasswordService;
pub use rbac::AllowedRoles;
