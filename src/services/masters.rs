//! Master data service
//!
//! Customers and suppliers are read-only listings; inventory additionally
//! supports create/update/delete, validated client-side before forwarding.

use crate::api::{ApiClient, PostReceipt};
use crate::error::{TallyError, TallyResult};
use crate::models::{Customer, InventoryItem, Supplier};

/// Service for master-data listings and inventory CRUD
pub struct MastersService<'a> {
    api: &'a ApiClient,
}

impl<'a> MastersService<'a> {
    /// Create a new masters service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List customers
    pub fn customers(&self) -> TallyResult<Vec<Customer>> {
        self.api.customers()
    }

    /// List suppliers
    pub fn suppliers(&self) -> TallyResult<Vec<Supplier>> {
        self.api.suppliers()
    }

    /// List inventory items
    pub fn inventory(&self) -> TallyResult<Vec<InventoryItem>> {
        self.api.inventory()
    }

    /// Validate and create an inventory item
    pub fn create_item(&self, item: &InventoryItem) -> TallyResult<PostReceipt> {
        item.validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;
        self.api.create_item(item)
    }

    /// Validate and update an inventory item
    pub fn update_item(&self, sku: &str, item: &InventoryItem) -> TallyResult<PostReceipt> {
        item.validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;
        self.api.update_item(sku, item)
    }

    /// Delete an inventory item by SKU
    pub fn delete_item(&self, sku: &str) -> TallyResult<PostReceipt> {
        if sku.trim().is_empty() {
            return Err(TallyError::Validation("SKU cannot be empty".into()));
        }
        self.api.delete_item(sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::time::Duration;

    #[test]
    fn test_create_item_validates_first() {
        let api = ApiClient::new("http://localhost:8080/api", Duration::from_secs(1)).unwrap();
        let service = MastersService::new(&api);

        let item = InventoryItem::new("", "Widget", Money::from_cents(100));
        let err = service.create_item(&item).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_requires_sku() {
        let api = ApiClient::new("http://localhost:8080/api", Duration::from_secs(1)).unwrap();
        let service = MastersService::new(&api);

        let err = service.delete_item("  ").unwrap_err();
        assert!(err.is_validation());
    }
}
