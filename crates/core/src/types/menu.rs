//! The pizza menu fixture.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::MenuId;

/// An item on the pizza menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique menu item ID.
    pub id: MenuId,
    /// Item title, e.g. "Veggie".
    pub title: String,
    /// Image filename shown by the UI.
    pub image: String,
    /// Price in bitcoin. Serialized as a JSON number (`0.0038`).
    pub price: Decimal,
    /// Marketing copy.
    pub description: String,
}
