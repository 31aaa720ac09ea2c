//! Backend API client and wire types
//!
//! The backend is an opaque external collaborator reached over HTTP with
//! JSON bodies. All financial computation and posting happens there; this
//! module only shapes requests and decodes responses.

pub mod client;

pub use client::ApiClient;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Money, NormalSide};

/// A pre-aggregated per-account balance returned by the report endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Chart account code this balance belongs to
    pub account_code: String,

    /// Accumulated debits over the requested period
    #[serde(default)]
    pub debit: Money,

    /// Accumulated credits over the requested period
    #[serde(default)]
    pub credit: Money,
}

impl AccountBalance {
    /// Net movement seen from the account's normal side
    pub fn net(&self, side: NormalSide) -> Money {
        match side {
            NormalSide::Debit => self.debit - self.credit,
            NormalSide::Credit => self.credit - self.debit,
        }
    }
}

/// One posting line in a general ledger listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Posting date
    pub date: NaiveDate,

    /// Document reference
    #[serde(default)]
    pub reference: String,

    /// Line description
    #[serde(default)]
    pub description: String,

    /// Debit amount
    #[serde(default)]
    pub debit: Money,

    /// Credit amount
    #[serde(default)]
    pub credit: Money,
}

/// The general ledger endpoint's response for one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralLedgerResponse {
    /// Account the listing is for
    pub account_code: String,

    /// Balance at the start of the requested range
    #[serde(default)]
    pub opening_balance: Money,

    /// Postings within the range, oldest first
    #[serde(default)]
    pub rows: Vec<LedgerRow>,
}

/// Acknowledgement returned when a document is posted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReceipt {
    /// Backend identifier of the posted document
    pub id: String,

    /// Optional human-readable confirmation
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_net_by_side() {
        let balance = AccountBalance {
            account_code: "1010".into(),
            debit: Money::from_cents(50000),
            credit: Money::from_cents(20000),
        };
        assert_eq!(balance.net(NormalSide::Debit).cents(), 30000);
        assert_eq!(balance.net(NormalSide::Credit).cents(), -30000);
    }

    #[test]
    fn test_balance_deserializes_with_defaults() {
        let json = r#"{"account_code": "4000", "credit": 120000}"#;
        let balance: AccountBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.debit, Money::zero());
        assert_eq!(balance.credit.cents(), 120000);
    }

    #[test]
    fn test_ledger_response_defaults() {
        let json = r#"{"account_code": "1010"}"#;
        let resp: GeneralLedgerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.opening_balance, Money::zero());
        assert!(resp.rows.is_empty());
    }

    #[test]
    fn test_receipt_without_message() {
        let json = r#"{"id": "je-881"}"#;
        let receipt: PostReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.id, "je-881");
        assert_eq!(receipt.message, "");
    }
}
