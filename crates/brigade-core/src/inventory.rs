//! Inventory items and stock arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Stock status derived from the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

/// A tracked inventory item.
///
/// The level never exceeds `max_capacity` (restock clamps) and never
/// drops below zero (consume rejects over-withdrawal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub level: u32,
    pub reorder_threshold: u32,
    pub max_capacity: u32,
}

impl StockItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        level: u32,
        reorder_threshold: u32,
        max_capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            level,
            reorder_threshold,
            max_capacity,
        }
    }

    /// Derived stock status.
    pub fn status(&self) -> StockStatus {
        if self.level == 0 {
            StockStatus::OutOfStock
        } else if self.level <= self.reorder_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Withdraw `quantity` units. Rejects over-withdrawal without
    /// mutating the level.
    pub fn consume(&mut self, quantity: u32) -> Result<(), DomainError> {
        if quantity > self.level {
            return Err(DomainError::InsufficientStock {
                item: self.name.clone(),
                requested: quantity,
                available: self.level,
            });
        }
        self.level -= quantity;
        Ok(())
    }

    /// Add `quantity` units, clamping at `max_capacity`.
    pub fn restock(&mut self, quantity: u32) {
        self.level = self.level.saturating_add(quantity).min(self.max_capacity);
    }
}
