//! Master data tables
//!
//! Listing views for customers, suppliers, inventory, and the chart of
//! accounts.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AccountClass, ChartOfAccounts, Customer, InventoryItem, Supplier};

#[derive(Tabled)]
struct PartyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct InventoryRow {
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Stock Value")]
    stock_value: String,
    #[tabled(rename = "")]
    flag: String,
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Cash")]
    cash: String,
}

/// Format a customer listing as a table
pub fn format_customer_list(customers: &[Customer], symbol: &str) -> String {
    if customers.is_empty() {
        return "No customers found.".to_string();
    }

    let rows: Vec<PartyRow> = customers
        .iter()
        .map(|c| PartyRow {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            balance: c.balance.format_with_symbol(symbol),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a supplier listing as a table
pub fn format_supplier_list(suppliers: &[Supplier], symbol: &str) -> String {
    if suppliers.is_empty() {
        return "No suppliers found.".to_string();
    }

    let rows: Vec<PartyRow> = suppliers
        .iter()
        .map(|s| PartyRow {
            id: s.id.clone(),
            name: s.name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            balance: s.balance.format_with_symbol(symbol),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format an inventory listing, flagging items at or below reorder level
pub fn format_inventory_list(items: &[InventoryItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No inventory items found.".to_string();
    }

    let rows: Vec<InventoryRow> = items
        .iter()
        .map(|i| InventoryRow {
            sku: i.sku.clone(),
            name: i.name.clone(),
            quantity: i.quantity,
            unit_price: i.unit_price.format_with_symbol(symbol),
            stock_value: i.stock_value().format_with_symbol(symbol),
            flag: if i.needs_reorder() { "REORDER" } else { "" }.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format the chart of accounts as a table, optionally one class only
pub fn format_chart(chart: &ChartOfAccounts, class: Option<AccountClass>) -> String {
    let rows: Vec<ChartRow> = chart
        .iter()
        .filter(|a| class.map_or(true, |c| a.class == c))
        .map(|a| ChartRow {
            code: a.code.clone(),
            name: a.name.clone(),
            class: a.class.to_string(),
            cash: if a.cash { "yes" } else { "" }.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_listings() {
        assert!(format_customer_list(&[], "$").contains("No customers"));
        assert!(format_supplier_list(&[], "$").contains("No suppliers"));
        assert!(format_inventory_list(&[], "$").contains("No inventory"));
    }

    #[test]
    fn test_customer_table() {
        let customers = vec![Customer {
            id: "c-1".into(),
            name: "Globex Corp".into(),
            email: "billing@globex.test".into(),
            phone: String::new(),
            balance: Money::from_cents(125000),
        }];

        let table = format_customer_list(&customers, "$");
        assert!(table.contains("Globex Corp"));
        assert!(table.contains("$1,250.00"));
    }

    #[test]
    fn test_inventory_reorder_flag() {
        let mut low = InventoryItem::new("W-1", "Widget", Money::from_cents(2500));
        low.quantity = 2;
        low.reorder_level = 5;

        let mut ok = InventoryItem::new("G-1", "Gadget", Money::from_cents(1000));
        ok.quantity = 50;
        ok.reorder_level = 5;

        let table = format_inventory_list(&[low, ok], "$");
        assert!(table.contains("REORDER"));
    }

    #[test]
    fn test_chart_table() {
        let table = format_chart(&ChartOfAccounts::standard(), None);
        assert!(table.contains("1000"));
        assert!(table.contains("Cash on Hand"));
        assert!(table.contains("Expense"));
    }

    #[test]
    fn test_chart_table_filtered_by_class() {
        let table = format_chart(&ChartOfAccounts::standard(), Some(AccountClass::Revenue));
        assert!(table.contains("Sales Revenue"));
        assert!(!table.contains("Rent Expense"));
    }
}
