use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, EntryId, OrderId, ProductId, PurchaseOrderId};

use crate::order::Order;
use crate::product::{AdjustmentKind, Product, StockEntry, StockStatus};
use crate::purchase::PurchaseOrder;
use crate::thresholds::StockThresholds;

/// A requested stock adjustment.
///
/// `occurred_at` is supplied by the caller (normally the request handler
/// stamping the current time) so the ledger itself stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub product_id: ProductId,
    pub kind: AdjustmentKind,
    pub quantity: i64,
    pub reason: String,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Aggregate counts for the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub orders: usize,
    pub pending_orders: usize,
    pub purchase_orders: usize,
}

/// In-memory authority for products, sales orders, and purchase orders.
///
/// One ledger value owns its three collections and the threshold table;
/// consumers receive it explicitly instead of importing a global. All
/// operations run to completion on the calling thread — hosts with more
/// than one writer must wrap the whole ledger in a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLedger {
    products: Vec<Product>,
    orders: Vec<Order>,
    purchase_orders: Vec<PurchaseOrder>,
    thresholds: StockThresholds,
    next_entry_id: u64,
}

impl InventoryLedger {
    pub fn new(thresholds: StockThresholds) -> Self {
        Self {
            products: Vec::new(),
            orders: Vec::new(),
            purchase_orders: Vec::new(),
            thresholds,
            next_entry_id: 1,
        }
    }

    pub fn thresholds(&self) -> &StockThresholds {
        &self.thresholds
    }

    // ---------------------------------------------------------------------
    // Reads (full snapshots in insertion order)
    // ---------------------------------------------------------------------

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    pub fn product(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)
    }

    pub fn order(&self, id: OrderId) -> DomainResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)
    }

    pub fn purchase_order(&self, id: PurchaseOrderId) -> DomainResult<&PurchaseOrder> {
        self.purchase_orders
            .iter()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)
    }

    /// Aggregate counts for the dashboard view.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            products: self.products.len(),
            low_stock: self
                .products
                .iter()
                .filter(|p| p.status == StockStatus::LowStock)
                .count(),
            out_of_stock: self
                .products
                .iter()
                .filter(|p| p.status == StockStatus::OutOfStock)
                .count(),
            orders: self.orders.len(),
            pending_orders: self.orders.iter().filter(|o| o.status == "pending").count(),
            purchase_orders: self.purchase_orders.len(),
        }
    }

    // ---------------------------------------------------------------------
    // Product catalog
    // ---------------------------------------------------------------------

    /// Append a product. The identifier is caller-supplied; duplicates are
    /// rejected rather than silently shadowed. Status is derived here,
    /// whatever the caller put in the record.
    pub fn add_product(&mut self, mut product: Product) -> DomainResult<&Product> {
        Self::validate_product(&product)?;
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id
            )));
        }
        product.status = self.thresholds.derive_status(product.stock, product.category)?;

        let idx = self.products.len();
        self.products.push(product);
        Ok(&self.products[idx])
    }

    /// Replace the full record at the matching identifier, re-deriving
    /// status. A missing identifier is reported, never swallowed.
    pub fn update_product(&mut self, mut product: Product) -> DomainResult<&Product> {
        Self::validate_product(&product)?;
        let idx = self
            .products
            .iter()
            .position(|p| p.id == product.id)
            .ok_or(DomainError::NotFound)?;
        product.status = self.thresholds.derive_status(product.stock, product.category)?;

        self.products[idx] = product;
        Ok(&self.products[idx])
    }

    /// Remove the matching record. Idempotent: returns whether a record was
    /// actually removed. References from existing orders are not checked.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Apply a stock adjustment: move the stock level, re-derive status, and
    /// prepend one history entry. Fails without touching state if the
    /// product is unknown, the quantity is not positive, or the removal
    /// would drive stock negative (there is deliberately no upper bound).
    pub fn adjust_stock(&mut self, adjustment: StockAdjustment) -> DomainResult<&Product> {
        if adjustment.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let idx = self
            .products
            .iter()
            .position(|p| p.id == adjustment.product_id)
            .ok_or(DomainError::NotFound)?;
        let (stock, category) = (self.products[idx].stock, self.products[idx].category);

        let new_stock = match adjustment.kind {
            AdjustmentKind::Add => stock + adjustment.quantity,
            AdjustmentKind::Remove => stock - adjustment.quantity,
        };
        if new_stock < 0 {
            return Err(DomainError::insufficient_stock(stock, adjustment.quantity));
        }

        // Derive before mutating so a threshold error leaves the record intact.
        let status = self.thresholds.derive_status(new_stock, category)?;
        let entry = StockEntry {
            id: self.allocate_entry_id(),
            occurred_at: adjustment.occurred_at,
            kind: adjustment.kind,
            quantity: adjustment.quantity,
            reason: adjustment.reason,
            notes: adjustment.notes,
        };

        let product = &mut self.products[idx];
        product.stock = new_stock;
        product.status = status;
        product.history.insert(0, entry);
        Ok(&self.products[idx])
    }

    // ---------------------------------------------------------------------
    // Sales orders
    // ---------------------------------------------------------------------

    pub fn add_order(&mut self, order: Order) -> DomainResult<&Order> {
        if self.orders.iter().any(|o| o.id == order.id) {
            return Err(DomainError::conflict(format!(
                "order {} already exists",
                order.id
            )));
        }
        let idx = self.orders.len();
        self.orders.push(order);
        Ok(&self.orders[idx])
    }

    pub fn update_order(&mut self, order: Order) -> DomainResult<&Order> {
        let idx = self
            .orders
            .iter()
            .position(|o| o.id == order.id)
            .ok_or(DomainError::NotFound)?;
        self.orders[idx] = order;
        Ok(&self.orders[idx])
    }

    // ---------------------------------------------------------------------
    // Purchase orders
    // ---------------------------------------------------------------------

    pub fn add_purchase_order(&mut self, order: PurchaseOrder) -> DomainResult<&PurchaseOrder> {
        if self.purchase_orders.iter().any(|o| o.id == order.id) {
            return Err(DomainError::conflict(format!(
                "purchase order {} already exists",
                order.id
            )));
        }
        let idx = self.purchase_orders.len();
        self.purchase_orders.push(order);
        Ok(&self.purchase_orders[idx])
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn validate_product(product: &Product) -> DomainResult<()> {
        if product.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if product.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        Ok(())
    }

    fn allocate_entry_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    /// Restore the entry counter after loading a snapshot. `next` must be
    /// greater than every entry id already present in product histories.
    pub(crate) fn set_next_entry_id(&mut self, next: u64) {
        self.next_entry_id = next;
    }
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new(StockThresholds::default())
    }
}
