//! Per-resource role policy.

use authgate_shared::Role;
use std::fmt;

/// Fixed, non-empty set of roles allowed through a protected resource.
///
/// Built once when the router is assembled and attached to the route it
/// guards. Only the predefined sets exist, so an empty policy cannot be built.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AllowedRoles {
    admin: bool,
    moderator: bool,
    user: bool,
}

impl AllowedRoles {
    /// `{admin}`
    pub const ADMIN: Self = Self {
        admin: true,
        moderator: false,
        user: false,
    };

    /// `{moderator, admin}`
    pub const STAFF: Self = Self {
        admin: true,
        moderator: true,
        user: false,
    };

    /// `{user, moderator, admin}`
    pub const ANY: Self = Self {
        admin: true,
        moderator: true,
        user: true,
    };

    /// Whether `role` is in the set
    pub fn allows(&self, role: Role) -> bool {
        match role {
            Role::Admin => self.admin,
            Role::Moderator => self.moderator,
            Role::User => self.user,
        }
    }

    /// Members of the set, most privileged first
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL.into_iter().filter(|r| self.allows(*r)).collect()
    }
}

impl fmt::Debug for AllowedRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.roles()).finish()
    }
}
