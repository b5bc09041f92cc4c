use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::product::{Category, StockStatus};

/// Per-category minimum stock before a product counts as low.
///
/// Read-only at runtime. Construction validates that every category has an
/// entry, so a status derivation can never compare against a missing
/// threshold; lookups still report `InvalidCategory` explicitly rather than
/// defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockThresholds {
    map: BTreeMap<Category, i64>,
}

impl StockThresholds {
    pub fn new(map: BTreeMap<Category, i64>) -> DomainResult<Self> {
        for category in Category::ALL {
            match map.get(&category) {
                None => return Err(DomainError::invalid_category(category.as_str())),
                Some(threshold) if *threshold < 0 => {
                    return Err(DomainError::validation(format!(
                        "threshold for {category} cannot be negative"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(Self { map })
    }

    pub fn threshold_for(&self, category: Category) -> DomainResult<i64> {
        self.map
            .get(&category)
            .copied()
            .ok_or_else(|| DomainError::invalid_category(category.as_str()))
    }

    /// Derive a product's status from its stock level.
    ///
    /// Rules, in order: zero stock is out of stock; below the category
    /// threshold is low; otherwise in stock.
    pub fn derive_status(&self, stock: i64, category: Category) -> DomainResult<StockStatus> {
        if stock == 0 {
            return Ok(StockStatus::OutOfStock);
        }
        let threshold = self.threshold_for(category)?;
        if stock < threshold {
            Ok(StockStatus::LowStock)
        } else {
            Ok(StockStatus::InStock)
        }
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            map: BTreeMap::from([
                (Category::Uniform, 10),
                (Category::Books, 5),
                (Category::Other, 50),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_out_of_stock_for_every_category() {
        let thresholds = StockThresholds::default();
        for category in Category::ALL {
            assert_eq!(
                thresholds.derive_status(0, category).unwrap(),
                StockStatus::OutOfStock
            );
        }
    }

    #[test]
    fn below_threshold_is_low_stock() {
        let thresholds = StockThresholds::default();
        assert_eq!(
            thresholds.derive_status(8, Category::Uniform).unwrap(),
            StockStatus::LowStock
        );
    }

    #[test]
    fn at_or_above_threshold_is_in_stock() {
        let thresholds = StockThresholds::default();
        assert_eq!(
            thresholds.derive_status(30, Category::Uniform).unwrap(),
            StockStatus::InStock
        );
        // Boundary: exactly at threshold counts as in stock.
        assert_eq!(
            thresholds.derive_status(10, Category::Uniform).unwrap(),
            StockStatus::InStock
        );
    }

    #[test]
    fn construction_rejects_missing_category() {
        let map = BTreeMap::from([(Category::Uniform, 10), (Category::Books, 5)]);
        let err = StockThresholds::new(map).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategory(_)));
    }

    #[test]
    fn construction_rejects_negative_threshold() {
        let map = BTreeMap::from([
            (Category::Uniform, 10),
            (Category::Books, -1),
            (Category::Other, 50),
        ]);
        let err = StockThresholds::new(map).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn defaults_match_the_shipped_table() {
        let thresholds = StockThresholds::default();
        assert_eq!(thresholds.threshold_for(Category::Uniform).unwrap(), 10);
        assert_eq!(thresholds.threshold_for(Category::Books).unwrap(), 5);
        assert_eq!(thresholds.threshold_for(Category::Other).unwrap(), 50);
    }
}
