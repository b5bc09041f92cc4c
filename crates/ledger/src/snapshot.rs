//! Line-oriented snapshot format for the ledger.
//!
//! One tagged JSON record per line: the threshold table first, then every
//! product (with history), order, and purchase order in insertion order.
//! Reading replays the records through the ledger's own add path, so
//! statuses are re-derived and the entry-id counter resumes past the
//! largest id seen in any history.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::DomainError;

use crate::ledger::InventoryLedger;
use crate::order::Order;
use crate::product::Product;
use crate::purchase::PurchaseOrder;
use crate::thresholds::StockThresholds;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot record: {0}")]
    Serialize(serde_json::Error),

    #[error("malformed snapshot record on line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },

    #[error("snapshot rejected by ledger: {0}")]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "record", content = "data", rename_all = "snake_case")]
enum SnapshotRecord {
    Thresholds(StockThresholds),
    Product(Product),
    Order(Order),
    PurchaseOrder(PurchaseOrder),
}

/// Write the full ledger, one record per line.
pub fn write<W: Write>(ledger: &InventoryLedger, mut writer: W) -> Result<(), SnapshotError> {
    let mut emit = |record: &SnapshotRecord| -> Result<(), SnapshotError> {
        serde_json::to_writer(&mut writer, record).map_err(SnapshotError::Serialize)?;
        writer.write_all(b"\n")?;
        Ok(())
    };

    emit(&SnapshotRecord::Thresholds(ledger.thresholds().clone()))?;
    for product in ledger.products() {
        emit(&SnapshotRecord::Product(product.clone()))?;
    }
    for order in ledger.orders() {
        emit(&SnapshotRecord::Order(order.clone()))?;
    }
    for po in ledger.purchase_orders() {
        emit(&SnapshotRecord::PurchaseOrder(po.clone()))?;
    }
    Ok(())
}

/// Rebuild a ledger from a snapshot. Blank lines are ignored; a missing
/// thresholds record falls back to the shipped defaults.
pub fn read<R: BufRead>(reader: R) -> Result<InventoryLedger, SnapshotError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: SnapshotRecord = serde_json::from_str(&line)
            .map_err(|source| SnapshotError::Malformed { line: idx + 1, source })?;
        records.push(record);
    }

    let thresholds = records
        .iter()
        .find_map(|r| match r {
            SnapshotRecord::Thresholds(t) => Some(t.clone()),
            _ => None,
        })
        .unwrap_or_default();

    let mut ledger = InventoryLedger::new(thresholds);
    let mut max_entry_id = 0u64;
    for record in records {
        match record {
            SnapshotRecord::Thresholds(_) => {}
            SnapshotRecord::Product(product) => {
                for entry in &product.history {
                    max_entry_id = max_entry_id.max(entry.id.value());
                }
                ledger.add_product(product)?;
            }
            SnapshotRecord::Order(order) => {
                ledger.add_order(order)?;
            }
            SnapshotRecord::PurchaseOrder(po) => {
                ledger.add_purchase_order(po)?;
            }
        }
    }
    ledger.set_next_entry_id(max_entry_id + 1);
    Ok(ledger)
}
