use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, EntryId, ProductId};

/// Product category.
///
/// The catalog uses a small fixed set; parsing an unknown name at the API
/// boundary reports `InvalidCategory` instead of carrying a free-form string
/// into threshold lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Uniform,
    Books,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Uniform, Category::Books, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Uniform => "Uniform",
            Category::Books => "Books",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Uniform" => Ok(Category::Uniform),
            "Books" => Ok(Category::Books),
            "Other" => Ok(Category::Other),
            other => Err(DomainError::invalid_category(other)),
        }
    }
}

/// Stock status derived from stock level and the category threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Display class paired with the status for list views.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockStatus::InStock => f.write_str("In Stock"),
            StockStatus::LowStock => f.write_str("Low Stock"),
            StockStatus::OutOfStock => f.write_str("Out of Stock"),
        }
    }
}

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    Add,
    Remove,
}

/// One stock adjustment applied to a product. Immutable once created;
/// the ledger prepends it to the product's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: EntryId,
    pub occurred_at: DateTime<Utc>,
    pub kind: AdjustmentKind,
    pub quantity: i64,
    pub reason: String,
    pub notes: Option<String>,
}

/// Catalog record.
///
/// `status` is derived from `stock` and the category threshold whenever the
/// ledger accepts or mutates the record; callers never set it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub stock: i64,
    /// Unit price in smallest currency unit.
    pub price: u64,
    pub status: StockStatus,
    pub description: String,
    /// Adjustment history, most recent first.
    #[serde(default)]
    pub history: Vec<StockEntry>,
}

impl Product {
    /// Build a catalog record with an empty history. The status field is a
    /// placeholder until the ledger derives it on insert.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        stock: i64,
        price: u64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            stock,
            price,
            status: StockStatus::OutOfStock,
            description: description.into(),
            history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_rejects_unknown_names() {
        let err = "Stationery".parse::<Category>().unwrap_err();
        match err {
            DomainError::InvalidCategory(name) => assert_eq!(name, "Stationery"),
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn status_serializes_with_display_text() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");
    }

    #[test]
    fn status_css_class_matches_status() {
        assert_eq!(StockStatus::InStock.css_class(), "in-stock");
        assert_eq!(StockStatus::LowStock.css_class(), "low-stock");
        assert_eq!(StockStatus::OutOfStock.css_class(), "out-of-stock");
    }
}
