//! Journal entries
//!
//! A journal entry (voucher) is a dated set of debit/credit lines. It is
//! postable only when every line references a known chart account, every
//! line carries exactly one positive side, and total debits equal total
//! credits and are nonzero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::chart::ChartOfAccounts;
use super::money::Money;

/// One debit or credit line of a journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Chart account code
    pub account_code: String,

    /// Free-text line description
    #[serde(default)]
    pub description: String,

    /// Debit amount (zero when this is a credit line)
    pub debit: Money,

    /// Credit amount (zero when this is a debit line)
    pub credit: Money,
}

impl JournalLine {
    /// Create a debit line
    pub fn debit(account_code: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            account_code: account_code.into(),
            description: description.into(),
            debit: amount,
            credit: Money::zero(),
        }
    }

    /// Create a credit line
    pub fn credit(account_code: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            account_code: account_code.into(),
            description: description.into(),
            debit: Money::zero(),
            credit: amount,
        }
    }
}

/// A journal entry to be posted to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Posting date
    pub date: NaiveDate,

    /// Client-generated reference (e.g. "JV-3f1a9c2e")
    pub reference: String,

    /// Narration for the whole entry
    #[serde(default)]
    pub memo: String,

    /// Debit/credit lines
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    /// Create an empty entry with a fresh reference
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            reference: generate_reference(),
            memo: String::new(),
            lines: Vec::new(),
        }
    }

    /// Set the memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Override the generated reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Append a line
    pub fn push_line(&mut self, line: JournalLine) {
        self.lines.push(line);
    }

    /// Sum of all debit amounts
    pub fn total_debits(&self) -> Money {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Sum of all credit amounts
    pub fn total_credits(&self) -> Money {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// The balance check: debits equal credits and are nonzero
    pub fn is_balanced(&self) -> bool {
        let debits = self.total_debits();
        debits == self.total_credits() && !debits.is_zero()
    }

    /// Validate the whole entry against the chart
    pub fn validate(&self, chart: &ChartOfAccounts) -> Result<(), JournalValidationError> {
        if self.lines.len() < 2 {
            return Err(JournalValidationError::TooFewLines(self.lines.len()));
        }

        for (row, line) in self.lines.iter().enumerate() {
            if line.account_code.trim().is_empty() {
                return Err(JournalValidationError::EmptyAccountCode { row });
            }
            if !chart.contains(&line.account_code) {
                return Err(JournalValidationError::UnknownAccount {
                    row,
                    code: line.account_code.clone(),
                });
            }
            if line.debit.is_negative() || line.credit.is_negative() {
                return Err(JournalValidationError::NegativeAmount { row });
            }
            match (line.debit.is_zero(), line.credit.is_zero()) {
                (false, false) => return Err(JournalValidationError::BothSides { row }),
                (true, true) => return Err(JournalValidationError::NeitherSide { row }),
                _ => {}
            }
        }

        if !self.is_balanced() {
            return Err(JournalValidationError::Unbalanced {
                debits: self.total_debits(),
                credits: self.total_credits(),
            });
        }

        Ok(())
    }
}

/// Generate a short client-side voucher reference
pub fn generate_reference() -> String {
    format!("JV-{}", &Uuid::new_v4().simple().to_string()[..8])
}

/// Validation errors for journal entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalValidationError {
    TooFewLines(usize),
    EmptyAccountCode { row: usize },
    UnknownAccount { row: usize, code: String },
    NegativeAmount { row: usize },
    BothSides { row: usize },
    NeitherSide { row: usize },
    Unbalanced { debits: Money, credits: Money },
}

impl fmt::Display for JournalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLines(n) => {
                write!(f, "Entry needs at least 2 lines, has {}", n)
            }
            Self::EmptyAccountCode { row } => {
                write!(f, "Line {}: account code is empty", row + 1)
            }
            Self::UnknownAccount { row, code } => {
                write!(f, "Line {}: unknown account code '{}'", row + 1, code)
            }
            Self::NegativeAmount { row } => {
                write!(f, "Line {}: amounts must not be negative", row + 1)
            }
            Self::BothSides { row } => {
                write!(f, "Line {}: both debit and credit are set", row + 1)
            }
            Self::NeitherSide { row } => {
                write!(f, "Line {}: neither debit nor credit is set", row + 1)
            }
            Self::Unbalanced { debits, credits } => {
                write!(f, "Debits {} do not equal credits {}", debits, credits)
            }
        }
    }
}

impl std::error::Error for JournalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ChartOfAccounts {
        ChartOfAccounts::standard()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn balanced_entry() -> JournalEntry {
        let mut entry = JournalEntry::new(date()).with_memo("Office rent for March");
        entry.push_line(JournalLine::debit("5200", "Rent", Money::from_cents(120000)));
        entry.push_line(JournalLine::credit("1010", "Paid from bank", Money::from_cents(120000)));
        entry
    }

    #[test]
    fn test_balanced_entry_validates() {
        let entry = balanced_entry();
        assert!(entry.is_balanced());
        assert!(entry.validate(&chart()).is_ok());
    }

    #[test]
    fn test_totals() {
        let entry = balanced_entry();
        assert_eq!(entry.total_debits().cents(), 120000);
        assert_eq!(entry.total_credits().cents(), 120000);
    }

    #[test]
    fn test_unbalanced_rejected() {
        let mut entry = JournalEntry::new(date());
        entry.push_line(JournalLine::debit("5200", "", Money::from_cents(100)));
        entry.push_line(JournalLine::credit("1010", "", Money::from_cents(90)));

        assert!(!entry.is_balanced());
        assert!(matches!(
            entry.validate(&chart()),
            Err(JournalValidationError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_zero_entry_rejected() {
        // Equal but zero totals must not pass the balance check
        let mut entry = JournalEntry::new(date());
        entry.push_line(JournalLine::debit("5200", "", Money::zero()));
        entry.push_line(JournalLine::credit("1010", "", Money::zero()));

        assert!(!entry.is_balanced());
        assert!(entry.validate(&chart()).is_err());
    }

    #[test]
    fn test_unknown_account_rejected() {
        let mut entry = JournalEntry::new(date());
        entry.push_line(JournalLine::debit("8888", "", Money::from_cents(100)));
        entry.push_line(JournalLine::credit("1010", "", Money::from_cents(100)));

        assert_eq!(
            entry.validate(&chart()),
            Err(JournalValidationError::UnknownAccount {
                row: 0,
                code: "8888".to_string()
            })
        );
    }

    #[test]
    fn test_line_with_both_sides_rejected() {
        let mut entry = JournalEntry::new(date());
        entry.push_line(JournalLine {
            account_code: "5200".into(),
            description: String::new(),
            debit: Money::from_cents(100),
            credit: Money::from_cents(100),
        });
        entry.push_line(JournalLine::credit("1010", "", Money::from_cents(100)));

        assert!(matches!(
            entry.validate(&chart()),
            Err(JournalValidationError::BothSides { row: 0 })
        ));
    }

    #[test]
    fn test_too_few_lines_rejected() {
        let mut entry = JournalEntry::new(date());
        entry.push_line(JournalLine::debit("5200", "", Money::from_cents(100)));
        assert_eq!(
            entry.validate(&chart()),
            Err(JournalValidationError::TooFewLines(1))
        );
    }

    #[test]
    fn test_multi_line_split_balances() {
        let mut entry = JournalEntry::new(date());
        entry.push_line(JournalLine::debit("5100", "Salaries", Money::from_cents(500000)));
        entry.push_line(JournalLine::credit("2200", "Accrued", Money::from_cents(50000)));
        entry.push_line(JournalLine::credit("1010", "Net pay", Money::from_cents(450000)));

        assert!(entry.validate(&chart()).is_ok());
    }

    #[test]
    fn test_generated_reference_shape() {
        let entry = JournalEntry::new(date());
        assert!(entry.reference.starts_with("JV-"));
        assert_eq!(entry.reference.len(), 11);
    }

    #[test]
    fn test_serialization() {
        let entry = balanced_entry();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2025-03-15\""));
        assert!(json.contains("\"5200\""));

        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lines.len(), 2);
        assert_eq!(back.total_debits().cents(), 120000);
    }
}
