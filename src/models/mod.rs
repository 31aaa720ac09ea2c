//! Core data models
//!
//! The chart of accounts is bundled reference data; everything else is
//! either user-entered (journal entries, vouchers, invoices) or
//! backend-shaped (customers, suppliers, inventory).

pub mod chart;
pub mod inventory;
pub mod invoice;
pub mod journal;
pub mod money;
pub mod party;
pub mod period;
pub mod voucher;

pub use chart::{AccountClass, AccountInfo, ChartOfAccounts, NormalSide};
pub use inventory::InventoryItem;
pub use invoice::{Invoice, InvoiceItem};
pub use journal::{JournalEntry, JournalLine};
pub use money::Money;
pub use party::{Customer, Supplier};
pub use period::DateRange;
pub use voucher::PaymentVoucher;
