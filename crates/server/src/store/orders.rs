//! Menu, order placement, history, and token verification.

use chrono::Utc;

use pizza_stub_core::{MenuItem, OrderHistory, OrderReceipt, OrderRequest, PlacedOrder};

use crate::token;

use super::{FixtureStore, StoreError};

impl FixtureStore {
    /// The static menu fixture.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuItem> {
        self.menu.clone()
    }

    /// Accept an order: echo it back with a fresh id and a minted
    /// proof-of-purchase token.
    ///
    /// No session is required to pay; when one is active, the order is
    /// recorded in that diner's history.
    pub fn place_order(&mut self, request: OrderRequest) -> OrderReceipt {
        let order = PlacedOrder {
            id: self.next_order_id(),
            franchise_id: request.franchise_id,
            store_id: request.store_id,
            date: Utc::now(),
            items: request.items,
        };

        if let Some(user) = self.current_user() {
            self.orders.push((user.id, order.clone()));
        }

        let jwt = token::mint();
        self.issued_tokens.insert(jwt.clone());
        OrderReceipt { order, jwt }
    }

    /// The order history of the logged-in diner.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotLoggedIn`] when no session is active. The
    /// route layer turns this into a structured 401 rather than aborting the
    /// test run.
    pub fn order_history(&self) -> Result<OrderHistory, StoreError> {
        let user = self.current_user().ok_or(StoreError::NotLoggedIn)?;
        let orders = self
            .orders
            .iter()
            .filter(|(diner, _)| *diner == user.id)
            .map(|(_, order)| order.clone())
            .collect();

        Ok(OrderHistory {
            diner_id: user.id,
            orders,
            page: 1,
        })
    }

    /// Check a proof-of-purchase token against this instance's issuance
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidOrderToken`] for tokens this instance
    /// never issued.
    pub fn verify_order(&self, jwt: &str) -> Result<(), StoreError> {
        if self.issued_tokens.contains(jwt) {
            Ok(())
        } else {
            Err(StoreError::InvalidOrderToken)
        }
    }
}
