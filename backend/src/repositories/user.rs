//! User repository: the in-memory credential store

use crate::auth::PasswordService;
use authgate_shared::{Role, StoreError, UserId, UserSummary};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Stored user record
///
/// The password hash stays inside the crate; everything that leaves it goes
/// through [`UserRecord::summary`].
#[derive(Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    password_hash: String,
}

impl UserRecord {
    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Redacted view
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Credential store
///
/// Writers (`create`, `set_role`) hold the write lock for the whole
/// read-modify-write, so id assignment and insertion cannot interleave.
/// Password hashing happens before any lock is taken.
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user, hashing `password` first
    ///
    /// Emails are compared exactly (case-sensitive).
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<UserRecord, StoreError> {
        // Cheap early exit so duplicates don't pay for a hash
        if self.email_exists(email).await {
            return Err(StoreError::DuplicateEmail);
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(|e| StoreError::Hashing(e.to_string()))?;

        let mut users = self.users.write().await;

        // Another writer may have taken the email while we were hashing
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let user = UserRecord {
            id,
            email: email.to_string(),
            name: name.to_string(),
            role,
            password_hash,
        };
        users.push(user.clone());

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    /// Change a user's role, returning the updated record and the role it
    /// replaced (read under the same write lock)
    pub async fn set_role(&self, id: UserId, role: Role) -> Result<(UserRecord, Role), StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let previous = std::mem::replace(&mut user.role, role);

        Ok((user.clone(), previous))
    }

    /// All users in insertion order
    pub async fn list_all(&self) -> Vec<UserRecord> {
        self.users.read().await.clone()
    }

    /// Check if email exists
    pub async fn email_exists(&self, email: &str) -> bool {
        self.users.read().await.iter().any(|u| u.email == email)
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
