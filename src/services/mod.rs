//! Business logic layer
//!
//! Thin validate-then-forward services between the CLI and the backend
//! API, plus CSV import.

pub mod import;
pub mod invoice;
pub mod journal;
pub mod masters;
pub mod voucher;

pub use import::{ImportService, ImportSummary, RowError};
pub use invoice::InvoiceService;
pub use journal::JournalService;
pub use masters::MastersService;
pub use voucher::VoucherService;
