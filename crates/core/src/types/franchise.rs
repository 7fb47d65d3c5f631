//! Franchise and store fixtures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::{FranchiseId, StoreId, UserId};

/// A pizza franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    /// Unique franchise ID.
    pub id: FranchiseId,
    /// Franchise name.
    pub name: String,
    /// Users who administer this franchise. Omitted from the wire when the
    /// fixture carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<Vec<FranchiseAdmin>>,
    /// Stores operated by this franchise, in creation order.
    pub stores: Vec<Store>,
}

impl Franchise {
    /// True if the given user administers this franchise.
    #[must_use]
    pub fn is_administered_by(&self, user_id: &UserId, email: &Email) -> bool {
        self.admins
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|a| a.id == *user_id || a.email == *email)
    }
}

/// An admin entry on a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    /// The administering user's ID.
    pub id: UserId,
    /// The administering user's display name.
    pub name: String,
    /// The administering user's email.
    pub email: Email,
}

/// A store belonging to a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique store ID (within the fixture set).
    pub id: StoreId,
    /// Store name.
    pub name: String,
    /// Revenue figure shown on franchisee dashboards. Optional - some
    /// fixtures omit it.
    #[serde(rename = "totalRevenue", skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<Decimal>,
}
