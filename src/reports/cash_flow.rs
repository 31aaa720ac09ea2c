//! Cash Flow Report
//!
//! Indirect-style cash flow over a period. Every non-cash account's
//! movement is restated as its effect on cash (credits bring cash in,
//! debits send it out) and bucketed into operating, investing, and
//! financing sections. The sum of the sections is reconciled against
//! the movement seen on the cash-flagged accounts themselves.

use std::io::Write;

use crate::api::AccountBalance;
use crate::error::{TallyError, TallyResult};
use crate::models::{AccountClass, ChartOfAccounts, DateRange, Money, NormalSide};
use crate::reports::join_chart;

/// One account line in a cash flow section
#[derive(Debug, Clone)]
pub struct CashFlowLine {
    /// Account code
    pub code: String,
    /// Account name
    pub name: String,
    /// Effect on cash, positive when cash came in
    pub amount: Money,
}

/// Cash Flow Report
#[derive(Debug, Clone)]
pub struct CashFlowReport {
    /// Reporting period
    pub range: DateRange,
    /// Revenue and expense movements
    pub operating: Vec<CashFlowLine>,
    /// Non-cash asset movements
    pub investing: Vec<CashFlowLine>,
    /// Liability and equity movements
    pub financing: Vec<CashFlowLine>,
    /// Sum of the operating section
    pub operating_total: Money,
    /// Sum of the investing section
    pub investing_total: Money,
    /// Sum of the financing section
    pub financing_total: Money,
    /// Sum of all three sections
    pub net_change: Money,
    /// Movement observed on the cash-flagged accounts
    pub cash_movement: Money,
}

impl CashFlowReport {
    /// Build a cash flow statement from backend balances
    pub fn from_balances(
        chart: &ChartOfAccounts,
        range: DateRange,
        balances: &[AccountBalance],
    ) -> Self {
        let mut operating = Vec::new();
        let mut investing = Vec::new();
        let mut financing = Vec::new();
        let mut operating_total = Money::zero();
        let mut investing_total = Money::zero();
        let mut financing_total = Money::zero();
        let mut cash_movement = Money::zero();

        for (account, balance) in join_chart(chart, balances) {
            if account.cash {
                cash_movement += balance.net(NormalSide::Debit);
                continue;
            }

            // A credit movement anywhere else frees cash, a debit absorbs it
            let amount = balance.net(NormalSide::Credit);
            if amount.is_zero() {
                continue;
            }
            let line = CashFlowLine {
                code: account.code.clone(),
                name: account.name.clone(),
                amount,
            };

            match account.class {
                AccountClass::Revenue | AccountClass::Expense => {
                    operating_total += amount;
                    operating.push(line);
                }
                AccountClass::Asset => {
                    investing_total += amount;
                    investing.push(line);
                }
                AccountClass::Liability | AccountClass::Equity => {
                    financing_total += amount;
                    financing.push(line);
                }
            }
        }

        let net_change = operating_total + investing_total + financing_total;

        Self {
            range,
            operating,
            investing,
            financing,
            operating_total,
            investing_total,
            financing_total,
            net_change,
            cash_movement,
        }
    }

    /// Whether the sections sum to the observed cash movement
    ///
    /// Holds whenever every posting in the period was balanced.
    pub fn is_reconciled(&self) -> bool {
        self.net_change == self.cash_movement
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Cash Flow  {} to {}\n",
            self.range.from, self.range.to
        ));
        output.push_str(&"=".repeat(52));
        output.push('\n');

        format_section(
            &mut output,
            "OPERATING ACTIVITIES",
            &self.operating,
            self.operating_total,
            symbol,
        );
        format_section(
            &mut output,
            "INVESTING ACTIVITIES",
            &self.investing,
            self.investing_total,
            symbol,
        );
        format_section(
            &mut output,
            "FINANCING ACTIVITIES",
            &self.financing,
            self.financing_total,
            symbol,
        );

        output.push('\n');
        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<35} {:>14}\n",
            "Net Change in Cash",
            self.net_change.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<35} {:>14}\n",
            "Movement on Cash Accounts",
            self.cash_movement.format_with_symbol(symbol)
        ));

        if !self.is_reconciled() {
            output.push_str(&format!(
                "\nWARNING: sections differ from cash movement by {}\n",
                (self.net_change - self.cash_movement)
                    .abs()
                    .format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Section,Code,Account,Amount")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        export_section(writer, "Operating", &self.operating)?;
        export_section(writer, "Investing", &self.investing)?;
        export_section(writer, "Financing", &self.financing)?;

        writeln!(
            writer,
            "Summary,,Net Change in Cash,{:.2}",
            self.net_change.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Summary,,Movement on Cash Accounts,{:.2}",
            self.cash_movement.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        Ok(())
    }
}

fn format_section(
    output: &mut String,
    title: &str,
    lines: &[CashFlowLine],
    total: Money,
    symbol: &str,
) {
    output.push_str(&format!("\n{}\n", title));
    for line in lines {
        output.push_str(&format!(
            "{:<6} {:<28} {:>14}\n",
            line.code,
            line.name,
            line.amount.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "{:<6} {:<28} {:>14}\n",
        "",
        "Subtotal",
        total.format_with_symbol(symbol)
    ));
}

fn export_section<W: Write>(
    writer: &mut W,
    section: &str,
    lines: &[CashFlowLine],
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
