//! Report views
//!
//! Every report follows the same pattern: fetch pre-aggregated balances
//! from the backend, join them against the bundled chart of accounts by
//! code, bucket by account class, and render. Balances whose code is not
//! in the chart are dropped.

pub mod balance_sheet;
pub mod cash_flow;
pub mod general_ledger;
pub mod profit_loss;
pub mod trial_balance;

pub use balance_sheet::BalanceSheetReport;
pub use cash_flow::CashFlowReport;
pub use general_ledger::GeneralLedgerReport;
pub use profit_loss::ProfitLossReport;
pub use trial_balance::TrialBalanceReport;

use std::collections::HashMap;

use crate::api::AccountBalance;
use crate::models::{AccountInfo, ChartOfAccounts};

/// Join backend balances against the chart, in chart order
///
/// Balances with codes absent from the chart are dropped; chart accounts
/// absent from the response are skipped.
pub(crate) fn join_chart<'a>(
    chart: &'a ChartOfAccounts,
    balances: &'a [AccountBalance],
) -> Vec<(&'a AccountInfo, &'a AccountBalance)> {
    let by_code: HashMap<&str, &AccountBalance> = balances
        .iter()
        .map(|b| (b.account_code.as_str(), b))
        .collect();

    chart
        .iter()
        .filter_map(|account| by_code.get(account.code.as_str()).map(|b| (account, *b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn balance(code: &str, debit: i64, credit: i64) -> AccountBalance {
        AccountBalance {
            account_code: code.to_string(),
            debit: Money::from_cents(debit),
            credit: Money::from_cents(credit),
        }
    }

    #[test]
    fn test_join_drops_unmatched_codes() {
        let chart = ChartOfAccounts::standard();
        let balances = vec![
            balance("4000", 0, 100),
            balance("9999", 50, 0), // not in the chart
            balance("1010", 100, 0),
        ];

        let joined = join_chart(&chart, &balances);
        let codes: Vec<_> = joined.iter().map(|(a, _)| a.code.as_str()).collect();

        // Chart order, unknown code dropped
        assert_eq!(codes, vec!["1010", "4000"]);
    }

    #[test]
    fn test_join_skips_accounts_without_balances() {
        let chart = ChartOfAccounts::standard();
        let balances = vec![balance("5200", 100, 0)];

        let joined = join_chart(&chart, &balances);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].0.name, "Rent Expense");
    }
}
