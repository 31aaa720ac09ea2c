//! Trial Balance Report
//!
//! Lists every chart account with activity over the period, net movement
//! shown on a single side, and flags when total debits and credits drift
//! apart.

use std::io::Write;

use crate::api::AccountBalance;
use crate::error::{TallyError, TallyResult};
use crate::models::{ChartOfAccounts, DateRange, Money, NormalSide};
use crate::reports::join_chart;

/// One account row in the trial balance
#[derive(Debug, Clone)]
pub struct TrialBalanceRow {
    /// Account code
    pub code: String,
    /// Account name
    pub name: String,
    /// Net movement on the debit side, zero when the credit side carries it
    pub debit: Money,
    /// Net movement on the credit side, zero when the debit side carries it
    pub credit: Money,
}

/// Trial Balance Report
#[derive(Debug, Clone)]
pub struct TrialBalanceReport {
    /// Reporting period
    pub range: DateRange,
    /// Account rows in chart order
    pub rows: Vec<TrialBalanceRow>,
    /// Sum of the debit column
    pub total_debits: Money,
    /// Sum of the credit column
    pub total_credits: Money,
}

impl TrialBalanceReport {
    /// Build a trial balance from backend balances
    ///
    /// Balances whose account code is not in the chart are dropped. Each
    /// account's movement is netted onto one side: debits minus credits
    /// in the debit column when positive, the reverse in the credit
    /// column otherwise.
    pub fn from_balances(
        chart: &ChartOfAccounts,
        range: DateRange,
        balances: &[AccountBalance],
    ) -> Self {
        let mut rows = Vec::new();
        let mut total_debits = Money::zero();
        let mut total_credits = Money::zero();

        for (account, balance) in join_chart(chart, balances) {
            let net = balance.net(NormalSide::Debit);
            let (debit, credit) = if net.cents() >= 0 {
                (net, Money::zero())
            } else {
                (Money::zero(), -net)
            };

            if debit.is_zero() && credit.is_zero() {
                continue;
            }

            total_debits += debit;
            total_credits += credit;
            rows.push(TrialBalanceRow {
                code: account.code.clone(),
                name: account.name.clone(),
                debit,
                credit,
            });
        }

        Self {
            range,
            rows,
            total_debits,
            total_credits,
        }
    }

    /// Whether the debit and credit columns agree
    pub fn is_balanced(&self) -> bool {
        self.total_debits == self.total_credits
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Trial Balance  {} to {}\n",
            self.range.from, self.range.to
        ));
        output.push_str(&"=".repeat(66));
        output.push('\n');

        output.push_str(&format!(
            "{:<6} {:<28} {:>14} {:>14}\n",
            "Code", "Account", "Debit", "Credit"
        ));
        output.push_str(&"-".repeat(66));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<6} {:<28} {:>14} {:>14}\n",
                row.code,
                row.name,
                side_cell(row.debit, symbol),
                side_cell(row.credit, symbol),
            ));
        }

        output.push_str(&"-".repeat(66));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:<28} {:>14} {:>14}\n",
            "",
            "Total",
            self.total_debits.format_with_symbol(symbol),
            self.total_credits.format_with_symbol(symbol),
        ));

        if !self.is_balanced() {
            output.push_str(&format!(
                "\nWARNING: out of balance by {}\n",
                (self.total_debits - self.total_credits)
                    .abs()
                    .format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Code,Account,Debit,Credit")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2},{:.2}",
                row.code,
                row.name,
                row.debit.cents() as f64 / 100.0,
                row.credit.cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            ",Total,{:.2},{:.2}",
            self.total_debits.cents() as f64 / 100.0,
            self.total_credits.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Render one side's cell, blank when the movement sits on the other side
fn side_cell(amount: Money, symbol: &str) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        amount.format_with_symbol(symbol)
    }
}
