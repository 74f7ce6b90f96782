use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountType};

/// Aggregate figures shown on the dashboard.
///
/// Balances are summed as-is across currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub total_accounts: usize,
    pub total_balance: Decimal,
    pub savings: usize,
    pub checking: usize,
    pub fixed_deposit: usize,
    pub loan: usize,
    pub other: usize,
}

impl AccountSummary {
    pub fn from_accounts(accounts: &[Account]) -> Self {
        accounts
            .iter()
            .fold(AccountSummary::default(), |mut summary, account| {
                summary.total_accounts += 1;
                summary.total_balance += account.balance;
                match account.account_type {
                    AccountType::Savings => summary.savings += 1,
                    AccountType::Checking => summary.checking += 1,
                    AccountType::FixedDeposit => summary.fixed_deposit += 1,
                    AccountType::Loan => summary.loan += 1,
                    AccountType::Other(_) => summary.other += 1,
                }
                summary
            })
    }

    pub fn count_of(&self, account_type: &AccountType) -> usize {
        match account_type {
            AccountType::Savings => self.savings,
            AccountType::Checking => self.checking,
            AccountType::FixedDeposit => self.fixed_deposit,
            AccountType::Loan => self.loan,
            AccountType::Other(_) => self.other,
        }
    }
}
