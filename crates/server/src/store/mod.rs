//! The in-memory fixture store.
//!
//! One [`FixtureStore`] holds all state for one simulated browser context:
//! the user directory, the active session, the franchise list, the menu, and
//! placed orders. Nothing is persisted; tests construct a fresh store (via
//! [`FixtureStore::standard`] or piecewise) per context, so no state leaks
//! across test executions.
//!
//! Operations are grouped by entity:
//!
//! - [`users`] - login, registration, session, directory listing and edits
//! - [`franchises`] - franchise/store fixtures and their listing
//! - [`orders`] - menu, order placement, history, token verification

mod franchises;
mod orders;
mod seed;
mod users;

use std::collections::HashSet;

use thiserror::Error;

use pizza_stub_core::{
    Email, Franchise, FranchiseId, MenuItem, OrderId, PlacedOrder, StoreId, User, UserId,
};

/// Errors surfaced by fixture-store operations.
///
/// Each maps to a structured `{"error": ...}` HTTP response; see
/// `crate::error::AppError` for the status mapping.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Login with an unknown email or a wrong password.
    #[error("unauthorized")]
    BadCredentials,

    /// Registration with an email already present in the directory.
    #[error("email already registered")]
    EmailTaken,

    /// A session-gated operation with no active session.
    #[error("not logged in")]
    NotLoggedIn,

    /// Lookup of a user id not present in the directory.
    #[error("user with id {0} not found")]
    UserNotFound(UserId),

    /// Lookup of a user email not present in the directory.
    #[error("no user with email {0}")]
    UserEmailNotFound(Email),

    /// Lookup of a franchise id not present in the fixtures.
    #[error("franchise {0} not found")]
    FranchiseNotFound(FranchiseId),

    /// Lookup of a store id not present under the given franchise.
    #[error("store {store} not found in franchise {franchise}")]
    StoreNotFound {
        /// Franchise searched.
        franchise: FranchiseId,
        /// Store requested.
        store: StoreId,
    },

    /// A profile update whose merge result no longer carries a usable email.
    #[error("update removed the required email field")]
    PatchDroppedEmail,

    /// A profile update whose merge result is not a valid user record.
    #[error("invalid update: {0}")]
    InvalidPatch(String),

    /// A malformed field in a request body (e.g. an unparseable email).
    #[error("{0}")]
    InvalidField(String),

    /// An order-verification token this instance never issued.
    #[error("invalid order token")]
    InvalidOrderToken,
}

/// All fixture state for one simulated browser context.
#[derive(Debug, Default)]
pub struct FixtureStore {
    /// User directory in insertion order. Emails are unique at all times.
    users: Vec<User>,
    /// Email of the logged-in user, if any. At most one session per store.
    session: Option<Email>,
    /// Franchise fixtures in insertion order.
    franchises: Vec<Franchise>,
    /// The static menu.
    menu: Vec<MenuItem>,
    /// Orders placed this run, attributed to the diner who placed them.
    orders: Vec<(UserId, PlacedOrder)>,
    /// Proof-of-purchase tokens issued by this instance.
    issued_tokens: HashSet<String>,
    /// Next franchise id to hand out.
    franchise_seq: i64,
    /// Next store id to hand out.
    store_seq: i64,
    /// Next order id to hand out.
    order_seq: i64,
}

impl FixtureStore {
    /// An empty store: no users, no franchises, no menu.
    #[must_use]
    pub fn new() -> Self {
        Self {
            franchise_seq: 1,
            store_seq: 1,
            order_seq: 1,
            ..Self::default()
        }
    }

    /// Replace the menu fixture.
    pub fn set_menu(&mut self, menu: Vec<MenuItem>) {
        self.menu = menu;
    }

    /// Add a user fixture directly, bypassing registration.
    ///
    /// Silently ignored if the email is already present - seeding is
    /// idempotent per email.
    pub fn add_user(&mut self, user: User) {
        if self.user_by_email(user.email.as_str()).is_none() {
            self.users.push(user);
        }
    }

    /// Add a franchise fixture directly, bumping the id sequences past it.
    pub fn add_franchise(&mut self, franchise: Franchise) {
        self.franchise_seq = self.franchise_seq.max(franchise.id.as_i64() + 1);
        if let Some(max_store) = franchise.stores.iter().map(|s| s.id.as_i64()).max() {
            self.store_seq = self.store_seq.max(max_store + 1);
        }
        self.franchises.push(franchise);
    }

    fn next_order_id(&mut self) -> OrderId {
        let id = OrderId::new(self.order_seq);
        self.order_seq += 1;
        id
    }

    fn next_franchise_id(&mut self) -> FranchiseId {
        let id = FranchiseId::new(self.franchise_seq);
        self.franchise_seq += 1;
        id
    }

    fn next_store_id(&mut self) -> StoreId {
        let id = StoreId::new(self.store_seq);
        self.store_seq += 1;
        id
    }
}
