//! Display formatting for terminal output
//!
//! Formats documents and master-data listings for the terminal. Reports
//! carry their own `format_terminal` methods; everything else renders
//! here.

pub mod document;
pub mod masters;

pub use document::{format_invoice_preview, format_journal_preview, format_receipt};
pub use masters::{
    format_chart, format_customer_list, format_inventory_list, format_supplier_list,
};
