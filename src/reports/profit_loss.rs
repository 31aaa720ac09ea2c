//! Profit & Loss Report
//!
//! Revenue and expense movements over a period, with net profit (or loss)
//! at the bottom.

use std::io::Write;

use crate::api::AccountBalance;
use crate::error::{TallyError, TallyResult};
use crate::models::{AccountClass, ChartOfAccounts, DateRange, Money};
use crate::reports::join_chart;

/// One account line in a P&L section
#[derive(Debug, Clone)]
pub struct ProfitLossLine {
    /// Account code
    pub code: String,
    /// Account name
    pub name: String,
    /// Net movement on the account's normal side
    pub amount: Money,
}

/// Profit & Loss Report
#[derive(Debug, Clone)]
pub struct ProfitLossReport {
    /// Reporting period
    pub range: DateRange,
    /// Revenue lines in chart order
    pub revenue: Vec<ProfitLossLine>,
    /// Expense lines in chart order
    pub expenses: Vec<ProfitLossLine>,
    /// Sum of revenue lines
    pub total_revenue: Money,
    /// Sum of expense lines
    pub total_expenses: Money,
    /// Revenue minus expenses
    pub net_profit: Money,
}

impl ProfitLossReport {
    /// Build a P&L from backend balances
    ///
    /// Only revenue and expense accounts contribute; everything else in
    /// the response is ignored. Revenue nets on the credit side, expenses
    /// on the debit side, so contra movements show up as negatives.
    pub fn from_balances(
        chart: &ChartOfAccounts,
        range: DateRange,
        balances: &[AccountBalance],
    ) -> Self {
        let mut revenue = Vec::new();
        let mut expenses = Vec::new();
        let mut total_revenue = Money::zero();
        let mut total_expenses = Money::zero();

        for (account, balance) in join_chart(chart, balances) {
            let line = ProfitLossLine {
                code: account.code.clone(),
                name: account.name.clone(),
                amount: balance.net(account.class.normal_side()),
            };

            match account.class {
                AccountClass::Revenue => {
                    total_revenue += line.amount;
                    revenue.push(line);
                }
                AccountClass::Expense => {
                    total_expenses += line.amount;
                    expenses.push(line);
                }
                _ => {}
            }
        }

        let net_profit = total_revenue - total_expenses;

        Self {
            range,
            revenue,
            expenses,
            total_revenue,
            total_expenses,
            net_profit,
        }
    }

    /// Whether the period ended in a loss
    pub fn is_loss(&self) -> bool {
        self.net_profit.is_negative()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Profit & Loss  {} to {}\n",
            self.range.from, self.range.to
        ));
        output.push_str(&"=".repeat(52));
        output.push('\n');

        output.push_str("\nREVENUE\n");
        for line in &self.revenue {
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
            "Total Revenue",
            self.total_revenue.format_with_symbol(symbol)
        ));

        output.push_str("\nEXPENSES\n");
        for line in &self.expenses {
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
            "Total Expenses",
            self.total_expenses.format_with_symbol(symbol)
        ));

        output.push('\n');
        output.push_str(&"-".repeat(52));
        output.push('\n');
        let label = if self.is_loss() {
            "Net Loss"
        } else {
            "Net Profit"
        };
        output.push_str(&format!(
            "{:<35} {:>14}\n",
            label,
            self.net_profit.abs().format_with_symbol(symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Section,Code,Account,Amount")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        for line in &self.revenue {
            writeln!(
                writer,
                "Revenue,{},{},{:.2}",
                line.code,
                line.name,
                line.amount.cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }
        for line in &self.expenses {
            writeln!(
                writer,
                "Expenses,{},{},{:.2}",
                line.code,
                line.name,
                line.amount.cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "Summary,,Total Revenue,{:.2}",
            self.total_revenue.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Summary,,Total Expenses,{:.2}",
            self.total_expenses.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Summary,,Net Profit,{:.2}",
            self.net_profit.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(code: &str, debit: i64, credit: i64) -> AccountBalance {
        AccountBalance {
            account_code: code.to_string(),
            debit: Money::from_cents(debit),
            credit: Money::from_cents(credit),
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_profit() {
        let chart = ChartOfAccounts::standard();
        let balances = vec![
            balance("4000", 0, 500000),  // sales 5000.00
            balance("4100", 0, 100000),  // services 1000.00
            balance("5100", 350000, 0),  // salaries 3500.00
            balance("5200", 100000, 0),  // rent 1000.00
            balance("1010", 150000, 0),  // bank, ignored
        ];

        let report = ProfitLossReport::from_balances(&chart, range(), &balances);

        assert_eq!(report.revenue.len(), 2);
        assert_eq!(report.expenses.len(), 2);
        assert_eq!(report.total_revenue.cents(), 600000);
        assert_eq!(report.total_expenses.cents(), 450000);
        assert_eq!(report.net_profit.cents(), 150000);
        assert!(!report.is_loss());
    }

    #[test]
    fn test_loss() {
        let chart = ChartOfAccounts::standard();
        let balances = vec![balance("4000", 0, 10000), balance("5900", 25000, 0)];

        let report = ProfitLossReport::from_balances(&chart, range(), &balances);

        assert_eq!(report.net_profit.cents(), -15000);
        assert!(report.is_loss());
        assert!(report.format_terminal("$").contains("Net Loss"));
    }

    #[test]
    fn test_contra_revenue_shows_negative() {
        let chart = ChartOfAccounts::standard();
        // Sales returns posted as a debit against revenue
        let balances = vec![balance("4000", 20000, 150000)];

        let report = ProfitLossReport::from_balances(&chart, range(), &balances);

        assert_eq!(report.revenue[0].amount.cents(), 130000);
    }

    #[test]
    fn test_csv_export() {
        let chart = ChartOfAccounts::standard();
        let balances = vec![balance("4000", 0, 100000), balance("5300", 40000, 0)];

        let report = ProfitLossReport::from_balances(&chart, range(), &balances);

        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();

        assert!(csv.contains("Revenue,4000,Sales Revenue,1000.00"));
        assert!(csv.contains("Expenses,5300,Utilities Expense,400.00"));
        assert!(csv.contains("Summary,,Net Profit,600.00"));
    }
}
