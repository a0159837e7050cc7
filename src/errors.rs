use thiserror::Error;

/// Rejected domain operation. The display text is shown to the customer verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("We only accept deposits of positive amounts.")]
    NonPositiveDeposit,
    #[error("We only accept withdrawals of positive amounts.")]
    NonPositiveWithdrawal,
    #[error("You cannot withdraw more than you have in your account.")]
    InsufficientFunds,
    #[error("No pets called {0} found in our shop.")]
    PetNotFound(String),
}

/// Malformed console input, reported like a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("That doesn't seem like a number.")]
    NotANumber,
}

/// Failures that escape a console session and terminate the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
