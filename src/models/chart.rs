//! Chart of accounts
//!
//! The chart is bundled, effectively immutable reference data: an ordered
//! list of account records keyed by a unique code. Report views classify
//! backend-returned balances by joining on the code and summing by class.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The five accounting classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    /// Resources owned (cash, receivables, inventory, equipment)
    Asset,
    /// Obligations owed (payables, loans)
    Liability,
    /// Owner's stake (capital, retained earnings)
    Equity,
    /// Income earned
    Revenue,
    /// Costs incurred
    Expense,
}

/// Which side carries an account's normal balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalSide {
    Debit,
    Credit,
}

impl AccountClass {
    /// The side on which balances of this class normally accumulate
    pub fn normal_side(&self) -> NormalSide {
        match self {
            Self::Asset | Self::Expense => NormalSide::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalSide::Credit,
        }
    }

    /// Parse an account class from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asset" | "assets" => Some(Self::Asset),
            "liability" | "liabilities" => Some(Self::Liability),
            "equity" => Some(Self::Equity),
            "revenue" | "income" => Some(Self::Revenue),
            "expense" | "expenses" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for AccountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
            Self::Equity => write!(f, "Equity"),
            Self::Revenue => write!(f, "Revenue"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One record in the chart of accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account code, unique within the chart (e.g. "1000")
    pub code: String,

    /// Human-readable account name
    pub name: String,

    /// Accounting class
    pub class: AccountClass,

    /// Whether this account holds cash or cash equivalents.
    /// Used by the cash flow report to separate cash movement from
    /// its explaining sections.
    #[serde(default)]
    pub cash: bool,
}

impl AccountInfo {
    fn new(code: &str, name: &str, class: AccountClass, cash: bool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            class,
            cash,
        }
    }
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

/// The chart of accounts: ordered records with a unique-code index
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    accounts: Vec<AccountInfo>,
    by_code: HashMap<String, usize>,
}

impl ChartOfAccounts {
    /// Build a chart from a list of records
    ///
    /// # Errors
    ///
    /// Returns the offending code if two records share one.
    pub fn new(accounts: Vec<AccountInfo>) -> Result<Self, DuplicateCode> {
        let mut by_code = HashMap::with_capacity(accounts.len());
        for (idx, account) in accounts.iter().enumerate() {
            if by_code.insert(account.code.clone(), idx).is_some() {
                return Err(DuplicateCode(account.code.clone()));
            }
        }
        Ok(Self { accounts, by_code })
    }

    /// The bundled standard chart
    pub fn standard() -> Self {
        use AccountClass::*;
        let accounts = vec![
            AccountInfo::new("1000", "Cash on Hand", Asset, true),
            AccountInfo::new("1010", "Bank Account", Asset, true),
            AccountInfo::new("1100", "Accounts Receivable", Asset, false),
            AccountInfo::new("1200", "Inventory", Asset, false),
            AccountInfo::new("1300", "Prepaid Expenses", Asset, false),
            AccountInfo::new("1500", "Equipment", Asset, false),
            AccountInfo::new("1510", "Accumulated Depreciation", Asset, false),
            AccountInfo::new("2000", "Accounts Payable", Liability, false),
            AccountInfo::new("2100", "Taxes Payable", Liability, false),
            AccountInfo::new("2200", "Wages Payable", Liability, false),
            AccountInfo::new("2500", "Loans Payable", Liability, false),
            AccountInfo::new("3000", "Owner's Capital", Equity, false),
            AccountInfo::new("3100", "Owner's Drawings", Equity, false),
            AccountInfo::new("3200", "Retained Earnings", Equity, false),
            AccountInfo::new("4000", "Sales Revenue", Revenue, false),
            AccountInfo::new("4100", "Service Revenue", Revenue, false),
            AccountInfo::new("4900", "Other Income", Revenue, false),
            AccountInfo::new("5000", "Cost of Goods Sold", Expense, false),
            AccountInfo::new("5100", "Salaries Expense", Expense, false),
            AccountInfo::new("5200", "Rent Expense", Expense, false),
            AccountInfo::new("5300", "Utilities Expense", Expense, false),
            AccountInfo::new("5400", "Office Supplies", Expense, false),
            AccountInfo::new("5500", "Depreciation Expense", Expense, false),
            AccountInfo::new("5900", "Miscellaneous Expense", Expense, false),
        ];

        // The bundled table is fixed; uniqueness holds by construction.
        match Self::new(accounts) {
            Ok(chart) => chart,
            Err(DuplicateCode(code)) => unreachable!("duplicate code in bundled chart: {}", code),
        }
    }

    /// Look up an account by code
    pub fn get(&self, code: &str) -> Option<&AccountInfo> {
        self.by_code.get(code).map(|&idx| &self.accounts[idx])
    }

    /// Check whether a code exists in the chart
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Iterate accounts in chart order
    pub fn iter(&self) -> impl Iterator<Item = &AccountInfo> {
        self.accounts.iter()
    }

    /// Iterate accounts of one class, in chart order
    pub fn of_class(&self, class: AccountClass) -> impl Iterator<Item = &AccountInfo> {
        self.accounts.iter().filter(move |a| a.class == class)
    }

    /// Number of accounts in the chart
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the chart is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Error returned when two chart records share a code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCode(pub String);

impl fmt::Display for DuplicateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate account code: {}", self.0)
    }
}

impl std::error::Error for DuplicateCode {}
