use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{ProductId, PurchaseOrderId};

/// Purchase order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Unit cost in smallest currency unit.
    pub cost: u64,
}

/// Purchase order record. Status is free-form, like [`crate::Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub supplier: String,
    pub date: NaiveDate,
    pub status: String,
    pub items: Vec<PurchaseLine>,
}
