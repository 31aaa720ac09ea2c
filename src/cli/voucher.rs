//! Payment voucher CLI commands
//!
//! A voucher is the guided two-line form: one expense/payable debit, one
//! cash credit. The preview shows the journal entry the backend will
//! record.

use clap::Subcommand;

use super::{entry_date, parse_amount};
use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{format_journal_preview, format_receipt};
use crate::error::TallyResult;
use crate::models::{ChartOfAccounts, PaymentVoucher};
use crate::services::VoucherService;

/// Payment voucher subcommands
#[derive(Subcommand)]
pub enum VoucherCommands {
    /// Post a payment voucher
    Post {
        /// Who is being paid
        payee: String,
        /// Amount paid (e.g. "450.00")
        #[arg(short, long)]
        amount: String,
        /// Account to debit (the expense or payable being settled)
        #[arg(short = 'e', long)]
        debit_account: String,
        /// Cash account the payment comes out of
        #[arg(short, long, default_value = "1010")]
        payment_account: String,
        /// Voucher date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Narration
        #[arg(short, long, default_value = "")]
        memo: String,
        /// Validate and preview without posting
        #[arg(long)]
        dry_run: bool,
    },
}

/// Handle a voucher command
pub fn handle_voucher_command(
    api: &ApiClient,
    chart: &ChartOfAccounts,
    settings: &Settings,
    cmd: VoucherCommands,
) -> TallyResult<()> {
    let service = VoucherService::new(api, chart);

    match cmd {
        VoucherCommands::Post {
            payee,
            amount,
            debit_account,
            payment_account,
            date,
            memo,
            dry_run,
        } => {
            let date = entry_date(date.as_deref(), settings)?;
            let amount = parse_amount(&amount)?;

            let voucher = PaymentVoucher::new(date, payee, debit_account, payment_account, amount)
                .with_memo(memo);
            service.validate(&voucher)?;

            println!("Payment Voucher {}  Payee: {}\n", voucher.voucher_no, voucher.payee);
            print!(
                "{}",
                format_journal_preview(&voucher.to_journal_entry(), &settings.currency_symbol)
            );

            if dry_run {
                println!("\nDry run: nothing posted.");
            } else {
                let receipt = service.submit(&voucher)?;
                println!("\n{}", format_receipt(&receipt));
            }
        }
    }

    Ok(())
}
