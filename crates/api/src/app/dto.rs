use chrono::NaiveDate;
use serde::Deserialize;

use stockroom_core::{OrderId, ProductId, PurchaseOrderId};
use stockroom_ledger::{
    AdjustmentKind, Order, OrderLine, Product, PurchaseLine, PurchaseOrder,
};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: u64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,
    pub quantity: i64,
    pub reason: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: u64,
    pub name: String,
    pub quantity: i64,
    pub price: u64,
    pub cost: u64,
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub id: u64,
    pub customer: String,
    pub date: NaiveDate,
    pub status: String,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseLineRequest {
    pub product_id: u64,
    pub name: String,
    pub quantity: i64,
    pub cost: u64,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseOrderRequest {
    pub id: u64,
    pub supplier: String,
    pub date: NaiveDate,
    pub status: String,
    pub items: Vec<PurchaseLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl OrderRequest {
    pub fn into_order(self) -> Order {
        Order {
            id: OrderId::new(self.id),
            customer: self.customer,
            date: self.date,
            status: self.status,
            items: self
                .items
                .into_iter()
                .map(|line| OrderLine {
                    product_id: ProductId::new(line.product_id),
                    name: line.name,
                    quantity: line.quantity,
                    price: line.price,
                    cost: line.cost,
                })
                .collect(),
        }
    }
}

impl PurchaseOrderRequest {
    pub fn into_purchase_order(self) -> PurchaseOrder {
        PurchaseOrder {
            id: PurchaseOrderId::new(self.id),
            supplier: self.supplier,
            date: self.date,
            status: self.status,
            items: self
                .items
                .into_iter()
                .map(|line| PurchaseLine {
                    product_id: ProductId::new(line.product_id),
                    name: line.name,
                    quantity: line.quantity,
                    cost: line.cost,
                })
                .collect(),
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.value(),
        "name": product.name,
        "category": product.category.as_str(),
        "stock": product.stock,
        "price": product.price,
        "status": product.status.to_string(),
        "statusClass": product.status.css_class(),
        "description": product.description,
        "history": product.history.iter().map(|entry| serde_json::json!({
            "id": entry.id.value(),
            "date": entry.occurred_at.to_rfc3339(),
            "type": match entry.kind { AdjustmentKind::Add => "add", AdjustmentKind::Remove => "remove" },
            "quantity": entry.quantity,
            "reason": entry.reason,
            "notes": entry.notes,
        })).collect::<Vec<_>>(),
    })
}

pub fn order_to_json(order: &Order) -> serde_json::Value {
    serde_json::json!({
        "id": order.id.value(),
        "customer": order.customer,
        "date": order.date.to_string(),
        "status": order.status,
        "items": order.items.iter().map(|line| serde_json::json!({
            "product_id": line.product_id.value(),
            "name": line.name,
            "quantity": line.quantity,
            "price": line.price,
            "cost": line.cost,
        })).collect::<Vec<_>>(),
    })
}

pub fn purchase_order_to_json(order: &PurchaseOrder) -> serde_json::Value {
    serde_json::json!({
        "id": order.id.value(),
        "supplier": order.supplier,
        "date": order.date.to_string(),
        "status": order.status,
        "items": order.items.iter().map(|line| serde_json::json!({
            "product_id": line.product_id.value(),
            "name": line.name,
            "quantity": line.quantity,
            "cost": line.cost,
        })).collect::<Vec<_>>(),
    })
}
