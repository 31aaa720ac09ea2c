//! Balance Sheet Report
//!
//! Assets, liabilities, and equity as of a date. Revenue and expense
//! movements in the response are folded into equity as current earnings
//! so the statement balances without waiting for a closing entry.

use std::io::Write;

use chrono::NaiveDate;

use crate::api::AccountBalance;
use crate::error::{TallyError, TallyResult};
use crate::models::{AccountClass, ChartOfAccounts, Money};
use crate::reports::join_chart;

/// One account line in a balance sheet section
#[derive(Debug, Clone)]
pub struct BalanceSheetLine {
    /// Account code, empty for the synthetic current-earnings line
    pub code: String,
    /// Account name
    pub name: String,
    /// Balance on the section's normal side
    pub amount: Money,
}

/// Balance Sheet Report
#[derive(Debug, Clone)]
pub struct BalanceSheetReport {
    /// Statement date
    pub as_of: NaiveDate,
    /// Asset lines in chart order
    pub assets: Vec<BalanceSheetLine>,
    /// Liability lines in chart order
    pub liabilities: Vec<BalanceSheetLine>,
    /// Equity lines, current earnings appended last
    pub equity: Vec<BalanceSheetLine>,
    /// Sum of asset lines
    pub total_assets: Money,
    /// Sum of liability lines
    pub total_liabilities: Money,
    /// Sum of equity lines, current earnings included
    pub total_equity: Money,
}

impl BalanceSheetReport {
    /// Build a balance sheet from backend balances
    ///
    /// Revenue minus expense movements become a "Current Earnings" line
    /// in the equity section, added even when zero so the statement always
    /// shows where the period's result sits.
    pub fn from_balances(
        chart: &ChartOfAccounts,
        as_of: NaiveDate,
        balances: &[AccountBalance],
    ) -> Self {
        let mut assets = Vec::new();
        let mut liabilities = Vec::new();
        let mut equity = Vec::new();
        let mut total_assets = Money::zero();
        let mut total_liabilities = Money::zero();
        let mut total_equity = Money::zero();
        let mut current_earnings = Money::zero();

        for (account, balance) in join_chart(chart, balances) {
            let amount = balance.net(account.class.normal_side());
            let line = BalanceSheetLine {
                code: account.code.clone(),
                name: account.name.clone(),
                amount,
            };

            match account.class {
                AccountClass::Asset => {
                    total_assets += amount;
                    assets.push(line);
                }
                AccountClass::Liability => {
                    total_liabilities += amount;
                    liabilities.push(line);
                }
                AccountClass::Equity => {
                    total_equity += amount;
                    equity.push(line);
                }
                AccountClass::Revenue => current_earnings += amount,
                AccountClass::Expense => current_earnings -= amount,
            }
        }

        total_equity += current_earnings;
        equity.push(BalanceSheetLine {
            code: String::new(),
            name: "Current Earnings".to_string(),
            amount: current_earnings,
        });

        Self {
            as_of,
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            total_equity,
        }
    }

    /// Whether assets equal liabilities plus equity
    pub fn is_balanced(&self) -> bool {
        self.total_assets == self.total_liabilities + self.total_equity
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Balance Sheet  as of {}\n", self.as_of));
        output.push_str(&"=".repeat(52));
        output.push('\n');

        format_section(&mut output, "ASSETS", &self.assets, symbol);
        output.push_str(&format!(
            "{:<6} {:<28} {:>14}\n",
            "",
            "Total Assets",
            self.total_assets.format_with_symbol(symbol)
        ));

        format_section(&mut output, "LIABILITIES", &self.liabilities, symbol);
        output.push_str(&format!(
            "{:<6} {:<28} {:>14}\n",
            "",
            "Total Liabilities",
            self.total_liabilities.format_with_symbol(symbol)
        ));

        format_section(&mut output, "EQUITY", &self.equity, symbol);
        output.push_str(&format!(
            "{:<6} {:<28} {:>14}\n",
            "",
            "Total Equity",
            self.total_equity.format_with_symbol(symbol)
        ));

        output.push('\n');
        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<35} {:>14}\n",
            "Liabilities + Equity",
            (self.total_liabilities + self.total_equity).format_with_symbol(symbol)
        ));

        if !self.is_balanced() {
            let gap = self.total_assets - self.total_liabilities - self.total_equity;
            output.push_str(&format!(
                "\nWARNING: assets differ from liabilities + equity by {}\n",
                gap.abs().format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Section,Code,Account,Amount")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        export_section(writer, "Assets", &self.assets)?;
        export_section(writer, "Liabilities", &self.liabilities)?;
        export_section(writer, "Equity", &self.equity)?;

        writeln!(
            writer,
            "Summary,,Total Assets,{:.2}",
            self.total_assets.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Summary,,Total Liabilities,{:.2}",
            self.total_liabilities.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Summary,,Total Equity,{:.2}",
            self.total_equity.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        Ok(())
    }
}

fn format_section(output: &mut String, title: &str, lines: &[BalanceSheetLine], symbol: &str) {
    output.push_str(&format!("\n{}\n", title));
    for line in lines {
        output.push_str(&format!(
            "{:<6} {:<28} {:>14}\n",
            line.code,
            line.name,
            line.amount.format_with_symbol(symbol)
        ));
    }
}

fn export_section<W: Write>(
    writer: &mut W,
    section: &str,
    lines: &[BalanceSheetLine],
) -> TallyResult<()> {
    for line in lines {
        writeln!(
            writer,
            "{},{},{},{:.2}",
            section,
            line.code,
            line.name,
            line.amount.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }
    Ok(())
}
