//! Invoice service

use crate::api::{ApiClient, PostReceipt};
use crate::error::{TallyError, TallyResult};
use crate::models::Invoice;

/// Service for validating and posting invoices
pub struct InvoiceService<'a> {
    api: &'a ApiClient,
}

impl<'a> InvoiceService<'a> {
    /// Create a new invoice service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Validate an invoice without posting it
    pub fn validate(&self, invoice: &Invoice) -> TallyResult<()> {
        invoice
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))
    }

    /// Validate an invoice and post it to the backend
    pub fn submit(&self, invoice: &Invoice) -> TallyResult<PostReceipt> {
        self.validate(invoice)?;
        self.api.post_invoice(invoice)
    }
}
