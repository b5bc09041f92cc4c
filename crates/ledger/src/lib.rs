//! Inventory ledger domain module.
//!
//! This crate contains the business rules for the product catalog, stock
//! adjustment bookkeeping, sales orders, and purchase orders, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod ledger;
pub mod order;
pub mod product;
pub mod purchase;
pub mod seed;
pub mod snapshot;
pub mod thresholds;

pub use ledger::{InventoryLedger, LedgerSummary, StockAdjustment};
pub use order::{Order, OrderLine};
pub use product::{AdjustmentKind, Category, Product, StockEntry, StockStatus};
pub use purchase::{PurchaseLine, PurchaseOrder};
pub use thresholds::StockThresholds;
