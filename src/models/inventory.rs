//! Inventory items
//!
//! Inventory is the one master-data area with client-initiated CRUD; the
//! backend owns the records, this side validates before forwarding.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// An inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Stock-keeping unit, unique per item
    pub sku: String,

    /// Item name
    pub name: String,

    /// Units on hand
    #[serde(default)]
    pub quantity: i64,

    /// Selling price per unit
    pub unit_price: Money,

    /// Reorder threshold; a listing flags items at or below it
    #[serde(default)]
    pub reorder_level: i64,
}

impl InventoryItem {
    /// Create an item
    pub fn new(sku: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            quantity: 0,
            unit_price,
            reorder_level: 0,
        }
    }

    /// Total value of units on hand
    pub fn stock_value(&self) -> Money {
        Money::from_cents(self.unit_price.cents() * self.quantity)
    }

    /// Whether the item is at or below its reorder level
    pub fn needs_reorder(&self) -> bool {
        self.reorder_level > 0 && self.quantity <= self.reorder_level
    }

    /// Validate the item before sending it to the backend
    pub fn validate(&self) -> Result<(), InventoryValidationError> {
        if self.sku.trim().is_empty() {
            return Err(InventoryValidationError::EmptySku);
        }
        if self.name.trim().is_empty() {
            return Err(InventoryValidationError::EmptyName);
        }
        if self.quantity < 0 {
            return Err(InventoryValidationError::NegativeQuantity(self.quantity));
        }
        if self.unit_price.is_negative() {
            return Err(InventoryValidationError::NegativePrice(self.unit_price));
        }
        Ok(())
    }
}

/// Validation errors for inventory items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryValidationError {
    EmptySku,
    EmptyName,
    NegativeQuantity(i64),
    NegativePrice(Money),
}

impl fmt::Display for InventoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySku => write!(f, "SKU cannot be empty"),
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NegativeQuantity(q) => write!(f, "Quantity must not be negative, got {}", q),
            Self::NegativePrice(p) => write!(f, "Unit price must not be negative, got {}", p),
        }
    }
}

impl std::error::Error for InventoryValidationError {}
