use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// One row of the account seed dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountData {
    pub account_number: String,
    pub customer_name: String,
    pub balance: f64,
}

impl AccountData {
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            customer_name: customer_name.into(),
            balance,
        }
    }
}

/// A customer account held by the ATM.
///
/// The balance is only ever changed through [`BankAccount::deposit`] and
/// [`BankAccount::withdraw`], both of which leave it untouched on failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BankAccount {
    account_number: String,
    pub customer_name: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            customer_name: customer_name.into(),
            balance,
        }
    }

    pub fn from_account_data(data: &AccountData) -> Self {
        Self::new(
            data.account_number.clone(),
            data.customer_name.clone(),
            data.balance,
        )
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds a strictly positive amount to the balance.
    pub fn deposit(&mut self, amount: f64) -> Result<(), ValidationError> {
        if !is_positive(amount) {
            return Err(ValidationError::NonPositiveDeposit);
        }
        self.balance += amount;
        Ok(())
    }

    /// Removes a strictly positive amount that the balance can cover.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), ValidationError> {
        if !is_positive(amount) {
            return Err(ValidationError::NonPositiveWithdrawal);
        }
        if amount > self.balance {
            return Err(ValidationError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }
}

// NaN fails the comparison and is treated as non-positive.
fn is_positive(amount: f64) -> bool {
    amount > 0.0
}
