//! User directory entries.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;
use super::role::{Role, UserRole};

/// A user in the fixture directory.
///
/// The directory is keyed by email (unique at all times) but preserves
/// insertion order for listing. The password is stored and echoed verbatim -
/// these are test fixtures standing in for a backend, not real credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address - the directory lookup key.
    pub email: Email,
    /// Fixture password, compared exactly (case-sensitive) on login.
    pub password: String,
    /// Roles held by this user, in assignment order.
    pub roles: Vec<UserRole>,
}

impl User {
    /// True if the user holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }
}
