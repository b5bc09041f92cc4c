//! Fixture data the ledger ships with.
//!
//! The catalog, orders, and purchase orders below are the development data
//! set; loading goes through the public add path so every status is derived
//! rather than hand-maintained.

use chrono::NaiveDate;

use stockroom_core::{OrderId, ProductId, PurchaseOrderId};

use crate::ledger::InventoryLedger;
use crate::order::{Order, OrderLine};
use crate::product::{Category, Product};
use crate::purchase::{PurchaseLine, PurchaseOrder};
use crate::thresholds::StockThresholds;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded seed date is valid")
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Polo", Category::Uniform, 30, 450, "School polo uniform"),
        Product::new(ProductId::new(2), "Jogging Pants", Category::Uniform, 25, 400, "School jogging pants"),
        Product::new(ProductId::new(3), "Blouse", Category::Uniform, 8, 425, "School blouse uniform"),
        Product::new(ProductId::new(4), "Physics Book", Category::Books, 15, 750, "Physics textbook"),
        Product::new(ProductId::new(5), "Chemistry Book", Category::Books, 12, 750, "Chemistry textbook"),
        Product::new(ProductId::new(6), "PE Book", Category::Books, 3, 500, "Physical Education textbook"),
        Product::new(ProductId::new(7), "Scantron", Category::Other, 45, 5, "Scantron answer sheets"),
    ]
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1),
            customer: "John Doe".to_string(),
            date: date(2025, 3, 11),
            status: "pending".to_string(),
            items: vec![
                OrderLine {
                    product_id: ProductId::new(1),
                    name: "Polo".to_string(),
                    quantity: 2,
                    price: 450,
                    cost: 350,
                },
                OrderLine {
                    product_id: ProductId::new(2),
                    name: "Jogging Pants".to_string(),
                    quantity: 1,
                    price: 400,
                    cost: 300,
                },
            ],
        },
        Order {
            id: OrderId::new(2),
            customer: "Jane Smith".to_string(),
            date: date(2025, 3, 10),
            status: "completed".to_string(),
            items: vec![
                OrderLine {
                    product_id: ProductId::new(4),
                    name: "Physics Book".to_string(),
                    quantity: 1,
                    price: 750,
                    cost: 600,
                },
                OrderLine {
                    product_id: ProductId::new(5),
                    name: "Chemistry Book".to_string(),
                    quantity: 1,
                    price: 750,
                    cost: 600,
                },
            ],
        },
        Order {
            id: OrderId::new(3),
            customer: "Alice Brown".to_string(),
            date: date(2025, 3, 12),
            status: "pending".to_string(),
            items: vec![
                OrderLine {
                    product_id: ProductId::new(7),
                    name: "Scantron".to_string(),
                    quantity: 20,
                    price: 5,
                    cost: 3,
                },
                OrderLine {
                    product_id: ProductId::new(3),
                    name: "Blouse".to_string(),
                    quantity: 1,
                    price: 425,
                    cost: 325,
                },
            ],
        },
    ]
}

fn seed_purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            id: PurchaseOrderId::new(1),
            supplier: "Uniform Supplier".to_string(),
            date: date(2025, 3, 11),
            status: "pending".to_string(),
            items: vec![PurchaseLine {
                product_id: ProductId::new(1),
                name: "Polo".to_string(),
                quantity: 50,
                cost: 350,
            }],
        },
        PurchaseOrder {
            id: PurchaseOrderId::new(2),
            supplier: "Book Store".to_string(),
            date: date(2025, 3, 10),
            status: "processing".to_string(),
            items: vec![PurchaseLine {
                product_id: ProductId::new(4),
                name: "Physics Book".to_string(),
                quantity: 20,
                cost: 600,
            }],
        },
    ]
}

impl InventoryLedger {
    /// Ledger pre-loaded with the development fixture data.
    pub fn seeded() -> Self {
        let mut ledger = Self::new(StockThresholds::default());
        for product in seed_products() {
            ledger.add_product(product).expect("seed product is valid");
        }
        for order in seed_orders() {
            ledger.add_order(order).expect("seed order is valid");
        }
        for po in seed_purchase_orders() {
            ledger.add_purchase_order(po).expect("seed purchase order is valid");
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::StockStatus;

    #[test]
    fn seeded_ledger_has_the_full_fixture() {
        let ledger = InventoryLedger::seeded();
        assert_eq!(ledger.products().len(), 7);
        assert_eq!(ledger.orders().len(), 3);
        assert_eq!(ledger.purchase_orders().len(), 2);
    }

    #[test]
    fn seeded_statuses_are_derived_not_hand_set() {
        let ledger = InventoryLedger::seeded();
        let by_name = |name: &str| {
            ledger
                .products()
                .iter()
                .find(|p| p.name == name)
                .unwrap()
                .status
        };
        assert_eq!(by_name("Polo"), StockStatus::InStock);
        assert_eq!(by_name("Blouse"), StockStatus::LowStock);
        assert_eq!(by_name("PE Book"), StockStatus::LowStock);
        // 45 on hand still counts as low against the bulk threshold of 50.
        assert_eq!(by_name("Scantron"), StockStatus::LowStock);
    }

    #[test]
    fn seeded_histories_start_empty() {
        let ledger = InventoryLedger::seeded();
        assert!(ledger.products().iter().all(|p| p.history.is_empty()));
    }
}
