//! User roles.

use serde::{Deserialize, Serialize};

/// A role a user can hold.
///
/// Serialized lowercase (`"diner"`), matching the pizza-service wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular customer.
    #[default]
    Diner,
    /// Administers one or more franchises.
    Franchisee,
    /// Global administrator.
    Admin,
}

/// A role entry as it appears in a user's `roles` array.
///
/// The wire format wraps each role in an object (`{"role": "diner"}`) so that
/// franchisee entries can carry an `objectId` scoping the role to a
/// franchise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    /// The role held.
    pub role: Role,
    /// Franchise the role is scoped to, for franchisee entries.
    #[serde(rename = "objectId", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
}

impl UserRole {
    /// A role entry with no scoping object.
    #[must_use]
    pub const fn of(role: Role) -> Self {
        Self {
            role,
            object_id: None,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        Self::of(role)
    }
}
