//! General Ledger Report
//!
//! Posting-level listing for a single account with a running balance
//! carried from the opening balance, accumulated on the account's
//! normal side.

use std::io::Write;

use chrono::NaiveDate;

use crate::api::GeneralLedgerResponse;
use crate::error::{TallyError, TallyResult};
use crate::models::{AccountInfo, ChartOfAccounts, DateRange, Money, NormalSide};

/// One posting with its running balance
#[derive(Debug, Clone)]
pub struct GeneralLedgerLine {
    /// Posting date
    pub date: NaiveDate,
    /// Document reference
    pub reference: String,
    /// Line description
    pub description: String,
    /// Debit amount
    pub debit: Money,
    /// Credit amount
    pub credit: Money,
    /// Balance after this posting, on the account's normal side
    pub balance: Money,
}

/// General Ledger Report for one account
#[derive(Debug, Clone)]
pub struct GeneralLedgerReport {
    /// Account code
    pub code: String,
    /// Account name
    pub name: String,
    /// Side the running balance accumulates on
    pub side: NormalSide,
    /// Reporting period
    pub range: DateRange,
    /// Balance at the start of the period
    pub opening_balance: Money,
    /// Postings with running balances, oldest first
    pub lines: Vec<GeneralLedgerLine>,
    /// Balance after the last posting
    pub closing_balance: Money,
}

impl GeneralLedgerReport {
    /// Build a ledger listing from the backend response
    ///
    /// Fails when the requested account code is not in the chart, since
    /// the running balance needs the account's normal side.
    pub fn from_response(
        chart: &ChartOfAccounts,
        range: DateRange,
        response: &GeneralLedgerResponse,
    ) -> TallyResult<Self> {
        let account: &AccountInfo = chart
            .get(&response.account_code)
            .ok_or_else(|| TallyError::account_not_found(&response.account_code))?;

        let side = account.class.normal_side();
        let mut balance = response.opening_balance;
        let mut lines = Vec::with_capacity(response.rows.len());

        for row in &response.rows {
            balance += match side {
                NormalSide::Debit => row.debit - row.credit,
                NormalSide::Credit => row.credit - row.debit,
            };
            lines.push(GeneralLedgerLine {
                date: row.date,
                reference: row.reference.clone(),
                description: row.description.clone(),
                debit: row.debit,
                credit: row.credit,
                balance,
            });
        }

        Ok(Self {
            code: account.code.clone(),
            name: account.name.clone(),
            side,
            range,
            opening_balance: response.opening_balance,
            lines,
            closing_balance: balance,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "General Ledger  {} {}  {} to {}\n",
            self.code, self.name, self.range.from, self.range.to
        ));
        output.push_str(&"=".repeat(92));
        output.push('\n');

        output.push_str(&format!(
            "{:<12} {:<10} {:<26} {:>12} {:>12} {:>14}\n",
            "Date", "Ref", "Description", "Debit", "Credit", "Balance"
        ));
        output.push_str(&"-".repeat(92));
        output.push('\n');

        output.push_str(&format!(
            "{:<12} {:<10} {:<26} {:>12} {:>12} {:>14}\n",
            "",
            "",
            "Opening balance",
            "",
            "",
            self.opening_balance.format_with_symbol(symbol)
        ));

        for line in &self.lines {
            output.push_str(&format!(
                "{:<12} {:<10} {:<26} {:>12} {:>12} {:>14}\n",
                line.date.to_string(),
                line.reference,
                truncate(&line.description, 26),
                amount_cell(line.debit, symbol),
                amount_cell(line.credit, symbol),
                line.balance.format_with_symbol(symbol)
            ));
        }

        output.push_str(&"-".repeat(92));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:<10} {:<26} {:>12} {:>12} {:>14}\n",
            "",
            "",
            "Closing balance",
            "",
            "",
            self.closing_balance.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Date,Reference,Description,Debit,Credit,Balance")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        writeln!(
            writer,
            ",,Opening balance,,,{:.2}",
            self.opening_balance.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        for line in &self.lines {
            writeln!(
                writer,
                "{},{},{},{:.2},{:.2},{:.2}",
                line.date,
                line.reference,
                line.description,
                line.debit.cents() as f64 / 100.0,
                line.credit.cents() as f64 / 100.0,
                line.balance.cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

fn amount_cell(amount: Money, symbol: &str) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        amount.format_with_symbol(symbol)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
