//! Order types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{FranchiseId, MenuId, OrderId, StoreId, UserId};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item ordered.
    #[serde(rename = "menuId")]
    pub menu_id: MenuId,
    /// Item description, echoed from the menu.
    pub description: String,
    /// Item price at order time.
    pub price: Decimal,
}

/// An order as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Items ordered, in selection order.
    pub items: Vec<OrderItem>,
    /// Store the order is placed against.
    #[serde(rename = "storeId")]
    pub store_id: StoreId,
    /// Franchise the store belongs to.
    #[serde(rename = "franchiseId")]
    pub franchise_id: FranchiseId,
}

impl OrderRequest {
    /// Sum of the item prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// An accepted order: the submitted order plus server-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Server-assigned order ID.
    pub id: OrderId,
    /// Franchise the store belongs to.
    #[serde(rename = "franchiseId")]
    pub franchise_id: FranchiseId,
    /// Store the order was placed against.
    #[serde(rename = "storeId")]
    pub store_id: StoreId,
    /// When the order was accepted.
    pub date: DateTime<Utc>,
    /// Items ordered.
    pub items: Vec<OrderItem>,
}

/// Response to placing an order: the accepted order plus the opaque
/// proof-of-purchase token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// The accepted order.
    pub order: PlacedOrder,
    /// Opaque JWT-shaped proof of purchase.
    pub jwt: String,
}

/// A diner's order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    /// The diner whose history this is.
    #[serde(rename = "dinerId")]
    pub diner_id: UserId,
    /// Orders placed, oldest first.
    pub orders: Vec<PlacedOrder>,
    /// History page number.
    pub page: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total() {
        let request = OrderRequest {
            items: vec![
                OrderItem {
                    menu_id: MenuId::new(1),
                    description: "Veggie".to_owned(),
                    price: Decimal::new(38, 4),
                },
                OrderItem {
                    menu_id: MenuId::new(2),
                    description: "Pepperoni".to_owned(),
                    price: Decimal::new(42, 4),
                },
            ],
            store_id: StoreId::new(4),
            franchise_id: FranchiseId::new(2),
        };

        assert_eq!(request.total(), Decimal::new(8, 3));
    }

    #[test]
    fn test_order_request_wire_shape() {
        let json = r#"{"items":[{"menuId":1,"description":"Veggie","price":0.0038}],"storeId":1,"franchiseId":1}"#;
        let request: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.store_id, StoreId::new(1));
        assert_eq!(request.franchise_id, FranchiseId::new(1));
    }
}
