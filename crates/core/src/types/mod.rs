//! Core types for Pizza Stub.
//!
//! This module provides type-safe wrappers and wire-shape structs for the
//! mocked pizza-service domain.

pub mod email;
pub mod franchise;
pub mod id;
pub mod menu;
pub mod order;
pub mod role;
pub mod user;

pub use email::{Email, EmailError};
pub use franchise::{Franchise, FranchiseAdmin, Store};
pub use id::*;
pub use menu::MenuItem;
pub use order::{OrderHistory, OrderItem, OrderReceipt, OrderRequest, PlacedOrder};
pub use role::{Role, UserRole};
pub use user::User;
