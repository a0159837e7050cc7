use std::collections::HashMap;

use crate::domain::{AccountData, BankAccount};

/// Account registry keyed by account number.
///
/// Built once from a dataset and never structurally changed afterwards; the
/// accounts it holds are mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Atm {
    accounts: HashMap<String, BankAccount>,
}

impl Atm {
    pub fn new(accounts: HashMap<String, BankAccount>) -> Self {
        Self { accounts }
    }

    /// Later rows win when the dataset repeats an account number.
    pub fn from_account_dataset(dataset: &[AccountData]) -> Self {
        let accounts = dataset
            .iter()
            .map(|data| (data.account_number.clone(), BankAccount::from_account_data(data)))
            .collect();
        Self::new(accounts)
    }

    pub fn account(&self, account_number: &str) -> Option<&BankAccount> {
        let found = self.accounts.get(account_number);
        tracing::debug!(account_number, found = found.is_some(), "account lookup");
        found
    }

    pub fn account_mut(&mut self, account_number: &str) -> Option<&mut BankAccount> {
        self.accounts.get_mut(account_number)
    }

    pub fn contains(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
