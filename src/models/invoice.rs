//! Sales invoices
//!
//! Invoices are entered client-side, totalled for preview, and forwarded to
//! the backend which handles the actual receivable/revenue posting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::money::Money;

/// One line item on an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// What was sold
    pub description: String,

    /// Quantity sold
    pub quantity: u32,

    /// Price per unit
    pub unit_price: Money,
}

impl InvoiceItem {
    /// Create a line item
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total (quantity x unit price)
    pub fn total(&self) -> Money {
        Money::from_cents(self.unit_price.cents() * self.quantity as i64)
    }
}

/// A sales invoice to be posted to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice date
    pub date: NaiveDate,

    /// Payment due date, if any
    pub due_date: Option<NaiveDate>,

    /// Client-generated invoice number (e.g. "INV-4c8e02d7")
    pub invoice_no: String,

    /// Customer being billed
    pub customer: String,

    /// Line items
    pub items: Vec<InvoiceItem>,

    /// Tax rate as a percentage (0-100)
    #[serde(default)]
    pub tax_rate: f64,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Invoice {
    /// Create an empty invoice with a fresh invoice number
    pub fn new(date: NaiveDate, customer: impl Into<String>) -> Self {
        Self {
            date,
            due_date: None,
            invoice_no: format!("INV-{}", &Uuid::new_v4().simple().to_string()[..8]),
            customer: customer.into(),
            items: Vec::new(),
            tax_rate: 0.0,
            notes: String::new(),
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the tax rate (percentage)
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Append a line item
    pub fn push_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
    }

    /// Sum of line totals before tax
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.total()).sum()
    }

    /// Tax amount, rounded to the nearest cent
    pub fn tax(&self) -> Money {
        let cents = (self.subtotal().cents() as f64 * self.tax_rate / 100.0).round() as i64;
        Money::from_cents(cents)
    }

    /// Grand total including tax
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    /// Validate the invoice
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.customer.trim().is_empty() {
            return Err(InvoiceValidationError::EmptyCustomer);
        }
        if self.items.is_empty() {
            return Err(InvoiceValidationError::NoItems);
        }
        for (row, item) in self.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                return Err(InvoiceValidationError::EmptyDescription { row });
            }
            if item.quantity == 0 {
                return Err(InvoiceValidationError::ZeroQuantity { row });
            }
            if item.unit_price.is_negative() {
                return Err(InvoiceValidationError::NegativePrice { row });
            }
        }
        if !(0.0..=100.0).contains(&self.tax_rate) {
            return Err(InvoiceValidationError::TaxRateOutOfRange(self.tax_rate));
        }
        if let Some(due) = self.due_date {
            if due < self.date {
                return Err(InvoiceValidationError::DueBeforeIssue);
            }
        }
        Ok(())
    }
}

/// Validation errors for invoices
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceValidationError {
    EmptyCustomer,
    NoItems,
    EmptyDescription { row: usize },
    ZeroQuantity { row: usize },
    NegativePrice { row: usize },
    TaxRateOutOfRange(f64),
    DueBeforeIssue,
}

impl fmt::Display for InvoiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCustomer => write!(f, "Customer cannot be empty"),
            Self::NoItems => write!(f, "Invoice needs at least one item"),
            Self::EmptyDescription { row } => {
                write!(f, "Item {}: description is empty", row + 1)
            }
            Self::ZeroQuantity { row } => write!(f, "Item {}: quantity must be > 0", row + 1),
            Self::NegativePrice { row } => {
                write!(f, "Item {}: unit price must not be negative", row + 1)
            }
            Self::TaxRateOutOfRange(rate) => {
                write!(f, "Tax rate {}% is outside 0-100", rate)
            }
            Self::DueBeforeIssue => write!(f, "Due date is before the invoice date"),
        }
    }
}

impl std::error::Error for InvoiceValidationError {}
