//! Report CLI commands
//!
//! Each report fetches balances from the backend, builds the view
//! locally, and either prints it or writes it to a CSV file.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::report_range;
use crate::api::ApiClient;
use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::period::parse_date;
use crate::models::ChartOfAccounts;
use crate::reports::{
    BalanceSheetReport, CashFlowReport, GeneralLedgerReport, ProfitLossReport, TrialBalanceReport,
};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Trial balance over a period
    TrialBalance {
        /// Period start date
        #[arg(long)]
        from: String,
        /// Period end date
        #[arg(long)]
        to: String,
        /// Write the report to a CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Profit & loss over a period
    ProfitLoss {
        /// Period start date
        #[arg(long)]
        from: String,
        /// Period end date
        #[arg(long)]
        to: String,
        /// Write the report to a CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Balance sheet as of a date
    BalanceSheet {
        /// Statement date (defaults to today)
        #[arg(long)]
        as_of: Option<String>,
        /// Write the report to a CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Cash flow over a period
    CashFlow {
        /// Period start date
        #[arg(long)]
        from: String,
        /// Period end date
        #[arg(long)]
        to: String,
        /// Write the report to a CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// General ledger for one account over a period
    Ledger {
        /// Chart account code (e.g. "1010")
        account: String,
        /// Period start date
        #[arg(long)]
        from: String,
        /// Period end date
        #[arg(long)]
        to: String,
        /// Write the report to a CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    api: &ApiClient,
    chart: &ChartOfAccounts,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::TrialBalance { from, to, csv } => {
            let range = report_range(&from, &to, settings)?;
            let balances = api.trial_balance(&range)?;
            let report = TrialBalanceReport::from_balances(chart, range, &balances);
            emit(csv.as_deref(), report.format_terminal(symbol), |w| {
                report.export_csv(w)
            })?;
        }

        ReportCommands::ProfitLoss { from, to, csv } => {
            let range = report_range(&from, &to, settings)?;
            let balances = api.profit_loss(&range)?;
            let report = ProfitLossReport::from_balances(chart, range, &balances);
            emit(csv.as_deref(), report.format_terminal(symbol), |w| {
                report.export_csv(w)
            })?;
        }

        ReportCommands::BalanceSheet { as_of, csv } => {
            let as_of = match as_of {
                Some(s) => parse_date(&s, &settings.date_format)
                    .map_err(|e| TallyError::Validation(e.to_string()))?,
                None => chrono::Local::now().date_naive(),
            };
            let balances = api.balance_sheet(as_of)?;
            let report = BalanceSheetReport::from_balances(chart, as_of, &balances);
            emit(csv.as_deref(), report.format_terminal(symbol), |w| {
                report.export_csv(w)
            })?;
        }

        ReportCommands::CashFlow { from, to, csv } => {
            let range = report_range(&from, &to, settings)?;
            let balances = api.cash_flow(&range)?;
            let report = CashFlowReport::from_balances(chart, range, &balances);
            emit(csv.as_deref(), report.format_terminal(symbol), |w| {
                report.export_csv(w)
            })?;
        }

        ReportCommands::Ledger {
            account,
            from,
            to,
            csv,
        } => {
            let range = report_range(&from, &to, settings)?;
            let response = api.general_ledger(&account, &range)?;
            let report = GeneralLedgerReport::from_response(chart, range, &response)?;
            emit(csv.as_deref(), report.format_terminal(symbol), |w| {
                report.export_csv(w)
            })?;
        }
    }

    Ok(())
}

/// Print the terminal rendering, or stream CSV to the given path
fn emit<F>(csv: Option<&Path>, terminal: String, export: F) -> TallyResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> TallyResult<()>,
{
    match csv {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TallyError::Export(format!("Cannot create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(&mut writer)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", terminal),
    }
    Ok(())
}
