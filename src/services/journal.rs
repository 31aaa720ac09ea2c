//! Journal entry service
//!
//! Validates entries client-side, then forwards them to the backend for
//! posting. Nothing is persisted locally.

use crate::api::{ApiClient, PostReceipt};
use crate::error::{TallyError, TallyResult};
use crate::models::journal::JournalValidationError;
use crate::models::{ChartOfAccounts, JournalEntry};

/// Service for validating and posting journal entries
pub struct JournalService<'a> {
    api: &'a ApiClient,
    chart: &'a ChartOfAccounts,
}

impl<'a> JournalService<'a> {
    /// Create a new journal service
    pub fn new(api: &'a ApiClient, chart: &'a ChartOfAccounts) -> Self {
        Self { api, chart }
    }

    /// Validate an entry without posting it
    pub fn validate(&self, entry: &JournalEntry) -> TallyResult<()> {
        entry.validate(self.chart).map_err(into_tally_error)
    }

    /// Validate an entry and post it to the backend
    pub fn submit(&self, entry: &JournalEntry) -> TallyResult<PostReceipt> {
        self.validate(entry)?;
        self.api.post_journal_entry(entry)
    }
}

fn into_tally_error(err: JournalValidationError) -> TallyError {
    match err {
        JournalValidationError::Unbalanced { debits, credits } => TallyError::Unbalanced {
            debits: debits.to_string(),
            credits: credits.to_string(),
        },
        other => TallyError::Validation(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalLine, Money};
    use chrono::NaiveDate;
    use std::time::Duration;

    fn service_parts() -> (ApiClient, ChartOfAccounts) {
        let api = ApiClient::new("http://localhost:8080/api", Duration::from_secs(1)).unwrap();
        (api, ChartOfAccounts::standard())
    }

    #[test]
    fn test_validate_passes_balanced_entry() {
        let (api, chart) = service_parts();
        let service = JournalService::new(&api, &chart);

        let mut entry = JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        entry.push_line(JournalLine::debit("5200", "Rent", Money::from_cents(90000)));
        entry.push_line(JournalLine::credit("1010", "Bank", Money::from_cents(90000)));

        assert!(service.validate(&entry).is_ok());
    }

    #[test]
    fn test_validate_maps_unbalanced_error() {
        let (api, chart) = service_parts();
        let service = JournalService::new(&api, &chart);

        let mut entry = JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        entry.push_line(JournalLine::debit("5200", "", Money::from_cents(90000)));
        entry.push_line(JournalLine::credit("1010", "", Money::from_cents(80000)));

        let err = service.validate(&entry).unwrap_err();
        assert!(matches!(err, TallyError::Unbalanced { .. }));
    }

    #[test]
    fn test_validate_maps_line_error_to_validation() {
        let (api, chart) = service_parts();
        let service = JournalService::new(&api, &chart);

        let mut entry = JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        entry.push_line(JournalLine::debit("0000", "", Money::from_cents(100)));
        entry.push_line(JournalLine::credit("1010", "", Money::from_cents(100)));

        let err = service.validate(&entry).unwrap_err();
        assert!(err.is_validation());
    }
}
