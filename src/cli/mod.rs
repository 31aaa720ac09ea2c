//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Arguments are the data
//! entry surface: everything is validated client-side before a single
//! request is made.

pub mod invoice;
pub mod journal;
pub mod masters;
pub mod report;
pub mod voucher;

pub use invoice::{handle_invoice_command, InvoiceCommands};
pub use journal::{handle_journal_command, JournalCommands};
pub use masters::{handle_inventory_command, InventoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use voucher::{handle_voucher_command, VoucherCommands};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::period::parse_date;
use crate::models::{DateRange, Money};

/// Resolve a document date argument, defaulting to today
pub(crate) fn entry_date(arg: Option<&str>, settings: &Settings) -> TallyResult<NaiveDate> {
    match arg {
        Some(s) => {
            parse_date(s, &settings.date_format).map_err(|e| TallyError::Validation(e.to_string()))
        }
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a reporting range from two required date arguments
pub(crate) fn report_range(from: &str, to: &str, settings: &Settings) -> TallyResult<DateRange> {
    DateRange::parse(from, to, &settings.date_format)
        .map_err(|e| TallyError::Validation(e.to_string()))
}

/// Parse a money argument, surfacing the offending input
pub(crate) fn parse_amount(s: &str) -> TallyResult<Money> {
    Money::parse(s)
        .map_err(|e| TallyError::Validation(format!("Invalid amount '{}': {}", s, e)))
}
