//! Document previews
//!
//! Journal entries and invoices are shown to the user exactly as they
//! will be posted, totals included, before anything leaves the machine.

use crate::api::PostReceipt;
use crate::models::{Invoice, JournalEntry};

/// Format a journal entry as a preview table
pub fn format_journal_preview(entry: &JournalEntry, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Journal Entry {}\n", entry.reference));
    output.push_str(&format!("  Date: {}\n", entry.date));
    if !entry.memo.is_empty() {
        output.push_str(&format!("  Memo: {}\n", entry.memo));
    }
    output.push('\n');

    output.push_str(&format!(
        "{:<8} {:<30} {:>12} {:>12}\n",
        "Account", "Description", "Debit", "Credit"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for line in &entry.lines {
        let debit = if line.debit.is_zero() {
            String::new()
        } else {
            line.debit.format_with_symbol(symbol)
        };
        let credit = if line.credit.is_zero() {
            String::new()
        } else {
            line.credit.format_with_symbol(symbol)
        };
        output.push_str(&format!(
            "{:<8} {:<30} {:>12} {:>12}\n",
            line.account_code, line.description, debit, credit
        ));
    }

    output.push_str(&"-".repeat(66));
    output.push('\n');
    output.push_str(&format!(
        "{:<8} {:<30} {:>12} {:>12}\n",
        "",
        "Total",
        entry.total_debits().format_with_symbol(symbol),
        entry.total_credits().format_with_symbol(symbol)
    ));

    output
}

/// Format an invoice as a preview with totals
pub fn format_invoice_preview(invoice: &Invoice, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice {}\n", invoice.invoice_no));
    output.push_str(&format!("  Customer: {}\n", invoice.customer));
    output.push_str(&format!("  Date:     {}\n", invoice.date));
    if let Some(due) = invoice.due_date {
        output.push_str(&format!("  Due:      {}\n", due));
    }
    output.push('\n');

    output.push_str(&format!(
        "{:<32} {:>6} {:>12} {:>12}\n",
        "Description", "Qty", "Unit Price", "Total"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for item in &invoice.items {
        output.push_str(&format!(
            "{:<32} {:>6} {:>12} {:>12}\n",
            item.description,
            item.quantity,
            item.unit_price.format_with_symbol(symbol),
            item.total().format_with_symbol(symbol)
        ));
    }

    output.push_str(&"-".repeat(66));
    output.push('\n');
    output.push_str(&format!(
        "{:<52} {:>12}\n",
        "Subtotal",
        invoice.subtotal().format_with_symbol(symbol)
    ));
    if invoice.tax_rate != 0.0 {
        output.push_str(&format!(
            "{:<52} {:>12}\n",
            format!("Tax ({}%)", invoice.tax_rate),
            invoice.tax().format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "{:<52} {:>12}\n",
        "Total",
        invoice.total().format_with_symbol(symbol)
    ));

    if !invoice.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("Notes: {}\n", invoice.notes));
    }

    output
}

/// Format the backend's acknowledgement of a posted document
pub fn format_receipt(receipt: &PostReceipt) -> String {
    if receipt.message.is_empty() {
        format!("Posted (id {})", receipt.id)
    } else {
        format!("Posted (id {}): {}", receipt.id, receipt.message)
    }
}
