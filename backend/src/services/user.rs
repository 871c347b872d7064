//! User service for authentication and user management
//!
//! Coordinates the credential store, password hashing and token issuance.
//! Hashing always runs on the blocking pool and never under a store lock.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use authgate_shared::{AuthError, LoginUser, Role, UserId, UserSummary};
use tracing::{info, warn};

/// Accounts created at startup when seeding is enabled
pub const SEED_USERS: [(&str, &str, &str, Role); 3] = [
    ("admin@example.com", "adminpass", "Admin User", Role::Admin),
    ("moderator@example.com", "modpass", "Moderator User", Role::Moderator),
    ("user@example.com", "userpass", "Regular User", Role::User),
];

/// Successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: LoginUser,
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// A caller-supplied role is accepted as-is, including `admin`.
    pub async fn register(
        users: &UserRepository,
        email: &str,
        password: &str,
        name: &str,
        role: Option<Role>,
    ) -> Result<UserSummary, ApiError> {
        let role = role.unwrap_or_default();

        let user = users
            .create(email, password, name, role)
            .await
            .map_err(|e| {
                warn!(reason = %e, "registration rejected");
                ApiError::from(e)
            })?;

        info!(user_id = user.id, role = %user.role, "user registered");
        Ok(user.summary())
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error, and both pay
    /// for one argon2 verification.
    pub async fn login(
        users: &UserRepository,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let user = users.find_by_email(email).await;
        let hash = user
            .as_ref()
            .map_or_else(|| PasswordService::dummy_hash(), |u| u.password_hash())
            .to_string();

        let valid = PasswordService::verify_async(password.to_string(), hash).await?;

        let Some(user) = user.filter(|_| valid) else {
            warn!("login failed");
            return Err(AuthError::InvalidCredentials.into());
        };

        let summary = user.summary();
        let token = jwt_service.issue(&summary)?;

        info!(user_id = user.id, "user logged in");
        Ok(LoginOutcome {
            token,
            user: summary.into(),
        })
    }

    /// Change a user's role
    ///
    /// Tokens issued before the change keep their old role until they expire.
    pub async fn change_role(
        users: &UserRepository,
        user_id: UserId,
        new_role: Role,
    ) -> Result<UserSummary, ApiError> {
        let (user, old_role) = users.set_role(user_id, new_role).await?;

        info!(user_id, old_role = %old_role, new_role = %new_role, "role changed");
        Ok(user.summary())
    }

    /// All users, redacted
    pub async fn list_users(users: &UserRepository) -> Vec<UserSummary> {
        users.list_all().await.iter().map(|u| u.summary()).collect()
    }

    /// Create the demo accounts, skipping any that already exist
    pub async fn seed_default_users(users: &UserRepository) -> anyhow::Result<()> {
        for (email, password, name, role) in SEED_USERS {
            if users.email_exists(email).await {
                continue;
            }
            let user = users
                .create(email, password, name, role)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to seed {}: {}", email, e))?;
            info!(user_id = user.id, role = %user.role, "seeded account");
        }
        Ok(())
    }
}
