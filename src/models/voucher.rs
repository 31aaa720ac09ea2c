//! Payment vouchers
//!
//! A payment voucher records a single outgoing payment: one expense (or
//! payable) account debited, one cash account credited. The backend posts
//! it; client-side it can be previewed as the two-line journal entry it
//! becomes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::chart::{AccountClass, ChartOfAccounts};
use super::journal::{JournalEntry, JournalLine};
use super::money::Money;

/// A payment voucher to be posted to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVoucher {
    /// Payment date
    pub date: NaiveDate,

    /// Client-generated voucher number (e.g. "PV-9b2d41ee")
    pub voucher_no: String,

    /// Who was paid
    pub payee: String,

    /// Account debited (what the payment was for)
    pub debit_account: String,

    /// Cash account credited (where the money came from)
    pub payment_account: String,

    /// Amount paid
    pub amount: Money,

    /// Free-text memo
    #[serde(default)]
    pub memo: String,
}

impl PaymentVoucher {
    /// Create a voucher with a fresh voucher number
    pub fn new(
        date: NaiveDate,
        payee: impl Into<String>,
        debit_account: impl Into<String>,
        payment_account: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            voucher_no: format!("PV-{}", &Uuid::new_v4().simple().to_string()[..8]),
            payee: payee.into(),
            debit_account: debit_account.into(),
            payment_account: payment_account.into(),
            amount,
            memo: String::new(),
        }
    }

    /// Set the memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Validate the voucher against the chart
    pub fn validate(&self, chart: &ChartOfAccounts) -> Result<(), VoucherValidationError> {
        if self.payee.trim().is_empty() {
            return Err(VoucherValidationError::EmptyPayee);
        }
        if !self.amount.is_positive() {
            return Err(VoucherValidationError::NonPositiveAmount(self.amount));
        }
        if !chart.contains(&self.debit_account) {
            return Err(VoucherValidationError::UnknownAccount(
                self.debit_account.clone(),
            ));
        }
        let payment = chart
            .get(&self.payment_account)
            .ok_or_else(|| VoucherValidationError::UnknownAccount(self.payment_account.clone()))?;
        if payment.class != AccountClass::Asset || !payment.cash {
            return Err(VoucherValidationError::NotACashAccount(
                self.payment_account.clone(),
            ));
        }
        Ok(())
    }

    /// The journal entry this voucher posts as
    pub fn to_journal_entry(&self) -> JournalEntry {
        let description = if self.memo.is_empty() {
            format!("Payment to {}", self.payee)
        } else {
            self.memo.clone()
        };

        let mut entry = JournalEntry::new(self.date)
            .with_reference(self.voucher_no.clone())
            .with_memo(description.clone());
        entry.push_line(JournalLine::debit(
            self.debit_account.clone(),
            description.clone(),
            self.amount,
        ));
        entry.push_line(JournalLine::credit(
            self.payment_account.clone(),
            description,
            self.amount,
        ));
        entry
    }
}

/// Validation errors for payment vouchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoucherValidationError {
    EmptyPayee,
    NonPositiveAmount(Money),
    UnknownAccount(String),
    NotACashAccount(String),
}

impl fmt::Display for VoucherValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayee => write!(f, "Payee cannot be empty"),
            Self::NonPositiveAmount(m) => write!(f, "Amount must be positive, got {}", m),
            Self::UnknownAccount(code) => write!(f, "Unknown account code '{}'", code),
            Self::NotACashAccount(code) => {
                write!(f, "Account '{}' is not a cash account", code)
            }
        }
    }
}

impl std::error::Error for VoucherValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ChartOfAccounts {
        ChartOfAccounts::standard()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    fn voucher() -> PaymentVoucher {
        PaymentVoucher::new(date(), "Acme Utilities", "5300", "1010", Money::from_cents(8500))
    }

    #[test]
    fn test_valid_voucher() {
        assert!(voucher().validate(&chart()).is_ok());
    }

    #[test]
    fn test_empty_payee_rejected() {
        let mut v = voucher();
        v.payee = "  ".into();
        assert_eq!(v.validate(&chart()), Err(VoucherValidationError::EmptyPayee));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut v = voucher();
        v.amount = Money::zero();
        assert!(matches!(
            v.validate(&chart()),
            Err(VoucherValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_non_cash_payment_account_rejected() {
        let mut v = voucher();
        v.payment_account = "1100".into(); // Accounts Receivable, not cash
        assert_eq!(
            v.validate(&chart()),
            Err(VoucherValidationError::NotACashAccount("1100".to_string()))
        );
    }

    #[test]
    fn test_unknown_account_rejected() {
        let mut v = voucher();
        v.debit_account = "7777".into();
        assert_eq!(
            v.validate(&chart()),
            Err(VoucherValidationError::UnknownAccount("7777".to_string()))
        );
    }

    #[test]
    fn test_journal_preview_balances() {
        let v = voucher();
        let entry = v.to_journal_entry();

        assert!(entry.is_balanced());
        assert_eq!(entry.reference, v.voucher_no);
        assert_eq!(entry.lines[0].account_code, "5300");
        assert_eq!(entry.lines[0].debit, v.amount);
        assert_eq!(entry.lines[1].account_code, "1010");
        assert_eq!(entry.lines[1].credit, v.amount);
        assert!(entry.validate(&chart()).is_ok());
    }

    #[test]
    fn test_voucher_no_shape() {
        assert!(voucher().voucher_no.starts_with("PV-"));
    }
}
