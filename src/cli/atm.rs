//! ATM front end: authenticates by account number and applies one deposit or
//! withdrawal per visit.

use crate::cli::io::Console;
use crate::cli::LoopControl;
use crate::core::Atm;
use crate::currency::{format_balance, parse_amount};
use crate::domain::BankAccount;
use crate::errors::{CliError, ValidationError};

const ACCOUNT_PROMPT: &str = "Please enter your account number: ";
const UNKNOWN_ACCOUNT: &str = "That account number is not recognised.";
const ACTION_QUESTION: &str = "Would you like to deposit or withdraw money today?";
const ACTION_OPTIONS: [&str; 3] = ["[D] Deposit", "[W] Withdraw", "[X] Cancel"];
const ACTION_PROMPT: &str =
    "Please enter the letter that corresponds to the action you'd like to take: ";
const FAREWELL: &str = "No problem. Thank you for your visit!";
const RETRY: &str = "That doesn't seem to be one of the options. Please try again.";

/// Menu codes accepted by [`AtmSession::serve_customer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCode {
    Deposit,
    Withdraw,
    Cancel,
}

impl ActionCode {
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "d" => Some(Self::Deposit),
            "w" => Some(Self::Withdraw),
            "x" => Some(Self::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    fn noun(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "How much would you like to deposit? ",
            TransactionKind::Withdrawal => "How much would you like to withdraw? ",
        }
    }

    fn apply(self, account: &mut BankAccount, amount: f64) -> Result<(), ValidationError> {
        match self {
            TransactionKind::Deposit => account.deposit(amount),
            TransactionKind::Withdrawal => account.withdraw(amount),
        }
    }
}

/// One customer visit at the ATM.
pub struct AtmSession<C> {
    atm: Atm,
    console: C,
}

impl<C: Console> AtmSession<C> {
    pub fn new(atm: Atm, console: C) -> Self {
        Self { atm, console }
    }

    pub fn atm(&self) -> &Atm {
        &self.atm
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_parts(self) -> (Atm, C) {
        (self.atm, self.console)
    }

    /// Asks for an account number and serves the customer if it is known.
    pub fn menu(&mut self) -> Result<(), CliError> {
        let Some(input) = self.console.read_line(ACCOUNT_PROMPT)? else {
            return Ok(());
        };
        let account_number = input.trim();
        let Some(account) = self.atm.account(account_number) else {
            tracing::warn!(account_number, "unrecognised account number");
            return self.console.warning(UNKNOWN_ACCOUNT);
        };
        let welcome = format!("Welcome, {}.", account.customer_name);
        self.console.info(&welcome)?;
        self.serve_customer(account_number)
    }

    /// Loops on the action menu until a transaction completes, the customer
    /// cancels, or the input closes.
    pub fn serve_customer(&mut self, account_number: &str) -> Result<(), CliError> {
        self.console.info(ACTION_QUESTION)?;
        loop {
            for option in ACTION_OPTIONS {
                self.console.info(option)?;
            }
            let Some(input) = self.console.read_line(ACTION_PROMPT)? else {
                return Ok(());
            };
            match self.dispatch(account_number, &input)? {
                LoopControl::Continue => {}
                LoopControl::Exit => return Ok(()),
            }
        }
    }

    /// Prompts once for an amount and deposits it. Prints exactly one line.
    pub fn process_deposit(&mut self, account_number: &str) -> Result<(), CliError> {
        self.process_transaction(account_number, TransactionKind::Deposit)
    }

    /// Prompts once for an amount and withdraws it. Prints exactly one line.
    pub fn process_withdrawal(&mut self, account_number: &str) -> Result<(), CliError> {
        self.process_transaction(account_number, TransactionKind::Withdrawal)
    }

    fn dispatch(&mut self, account_number: &str, input: &str) -> Result<LoopControl, CliError> {
        match ActionCode::parse(input) {
            Some(ActionCode::Deposit) => self.process_deposit(account_number)?,
            Some(ActionCode::Withdraw) => self.process_withdrawal(account_number)?,
            Some(ActionCode::Cancel) => self.console.info(FAREWELL)?,
            None => {
                self.console.warning(RETRY)?;
                return Ok(LoopControl::Continue);
            }
        }
        Ok(LoopControl::Exit)
    }

    fn process_transaction(
        &mut self,
        account_number: &str,
        kind: TransactionKind,
    ) -> Result<(), CliError> {
        let Some(account) = self.atm.account_mut(account_number) else {
            tracing::warn!(
                account_number,
                kind = kind.noun(),
                "unrecognised account number"
            );
            return self.console.warning(UNKNOWN_ACCOUNT);
        };
        let Some(raw) = self.console.read_line(kind.prompt())? else {
            return Ok(());
        };

        let amount = match parse_amount(&raw) {
            Ok(amount) => amount,
            Err(err) => {
                tracing::warn!(account_number, input = %raw, "amount is not a number");
                return self.console.error(&err.to_string());
            }
        };

        match kind.apply(account, amount) {
            Ok(()) => {
                let balance = account.balance();
                tracing::info!(
                    account_number,
                    amount,
                    balance,
                    kind = kind.noun(),
                    "transaction applied"
                );
                let message = format!(
                    "Your {} was successful. Your new balance is {}. Thank you!",
                    kind.noun(),
                    format_balance(balance)
                );
                self.console.success(&message)
            }
            Err(err) => {
                tracing::warn!(account_number, amount, error = %err, "transaction rejected");
                self.console.error(&err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_codes_are_case_insensitive() {
        assert_eq!(ActionCode::parse("d"), Some(ActionCode::Deposit));
        assert_eq!(ActionCode::parse("D"), Some(ActionCode::Deposit));
        assert_eq!(ActionCode::parse(" w "), Some(ActionCode::Withdraw));
        assert_eq!(ActionCode::parse("X"), Some(ActionCode::Cancel));
    }

    #[test]
    fn unknown_action_codes_are_rejected() {
        for input in ["", "deposit", "q", "dw"] {
            assert_eq!(ActionCode::parse(input), None, "input {input:?}");
        }
    }
}
