//! Blocking HTTP client for the accounting backend
//!
//! Every command issues at most one request, synchronously, with no
//! retries. Failures surface the backend's message and leave client-side
//! state untouched.

use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AccountBalance, GeneralLedgerResponse, PostReceipt};
use crate::error::{TallyError, TallyResult};
use crate::models::{
    Customer, DateRange, InventoryItem, Invoice, JournalEntry, PaymentVoucher, Supplier,
};

/// Client for the accounting backend's JSON API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str, timeout: Duration) -> TallyResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TallyError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- report endpoints ---------------------------------------------------

    /// Fetch per-account balances over a range for the trial balance view
    pub fn trial_balance(&self, range: &DateRange) -> TallyResult<Vec<AccountBalance>> {
        self.get("reports/trial-balance", &range.query())
    }

    /// Fetch per-account balances over a range for the profit & loss view
    pub fn profit_loss(&self, range: &DateRange) -> TallyResult<Vec<AccountBalance>> {
        self.get("reports/profit-loss", &range.query())
    }

    /// Fetch cumulative balances as of a date for the balance sheet view
    pub fn balance_sheet(&self, as_of: NaiveDate) -> TallyResult<Vec<AccountBalance>> {
        let query = [("as_of", as_of.format("%Y-%m-%d").to_string())];
        self.get("reports/balance-sheet", &query)
    }

    /// Fetch per-account movement over a range for the cash flow view
    pub fn cash_flow(&self, range: &DateRange) -> TallyResult<Vec<AccountBalance>> {
        self.get("reports/cash-flow", &range.query())
    }

    /// Fetch one account's postings over a range
    pub fn general_ledger(
        &self,
        account_code: &str,
        range: &DateRange,
    ) -> TallyResult<GeneralLedgerResponse> {
        let [from, to] = range.query();
        let query = [("account", account_code.to_string()), from, to];
        self.get("reports/general-ledger", &query)
    }

    // -- posting endpoints --------------------------------------------------

    /// Post a journal entry
    pub fn post_journal_entry(&self, entry: &JournalEntry) -> TallyResult<PostReceipt> {
        self.post("journal-entries", entry)
    }

    /// Post a payment voucher
    pub fn post_payment_voucher(&self, voucher: &PaymentVoucher) -> TallyResult<PostReceipt> {
        self.post("payment-vouchers", voucher)
    }

    /// Post an invoice
    pub fn post_invoice(&self, invoice: &Invoice) -> TallyResult<PostReceipt> {
        self.post("invoices", invoice)
    }

    // -- master data --------------------------------------------------------

    /// List customers
    pub fn customers(&self) -> TallyResult<Vec<Customer>> {
        self.get("customers", &[])
    }

    /// List suppliers
    pub fn suppliers(&self) -> TallyResult<Vec<Supplier>> {
        self.get("suppliers", &[])
    }

    /// List inventory items
    pub fn inventory(&self) -> TallyResult<Vec<InventoryItem>> {
        self.get("inventory", &[])
    }

    /// Create an inventory item
    pub fn create_item(&self, item: &InventoryItem) -> TallyResult<PostReceipt> {
        self.post("inventory", item)
    }

    /// Update an inventory item by SKU
    pub fn update_item(&self, sku: &str, item: &InventoryItem) -> TallyResult<PostReceipt> {
        let response = self
            .http
            .put(join_url(&self.base_url, &format!("inventory/{}", sku)))
            .json(item)
            .send()?;
        Self::decode(response)
    }

    /// Delete an inventory item by SKU
    pub fn delete_item(&self, sku: &str) -> TallyResult<PostReceipt> {
        let response = self
            .http
            .delete(join_url(&self.base_url, &format!("inventory/{}", sku)))
            .send()?;
        Self::decode(response)
    }

    // -- plumbing -----------------------------------------------------------

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> TallyResult<T> {
        let response = self
            .http
            .get(join_url(&self.base_url, path))
            .query(query)
            .send()?;
        Self::decode(response)
    }

    fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> TallyResult<T> {
        let response = self
            .http
            .post(join_url(&self.base_url, path))
            .json(body)
            .send()?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> TallyResult<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json()?)
        } else {
            let body = response.text().unwrap_or_default();
            Err(TallyError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            })
        }
    }
}

/// Join a base URL and a relative path with exactly one slash
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Extract a human-readable message from an error response body
///
/// The backend replies with `{"message": ...}` or `{"error": ...}`; other
/// bodies fall back to the HTTP reason phrase.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
