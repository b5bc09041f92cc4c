use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{OrderId, ProductId};

/// Sales order line item. References a product by id without owning it;
/// deleting the product does not touch existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Unit price in smallest currency unit.
    pub price: u64,
    /// Unit cost in smallest currency unit.
    pub cost: u64,
}

/// Sales order record.
///
/// `status` is a free-form string ("pending", "completed", ...) with no
/// enforced transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub date: NaiveDate,
    pub status: String,
    pub items: Vec<OrderLine>,
}
