//! Error types for account operations.

use thiserror::Error;

use crate::Amount;

/// Top-level error returned by [`Bank::apply`](super::Bank::apply).
#[derive(Debug, Error)]
pub enum BankError {
    #[error("open failed: {0}")]
    Open(#[from] OpenError),

    #[error("deposit failed: {0}")]
    Deposit(#[from] DepositError),

    #[error("withdrawal failed: {0}")]
    Withdrawal(#[from] WithdrawalError),

    #[error("no account for owner {0}")]
    AccountNotFound(String),

    #[error("owner {0} already has an account")]
    DuplicateAccount(String),
}

/// Error while opening an account.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpenError {
    #[error("initial balance {0} Tk is negative")]
    NegativeBalance(Amount),
}

/// Error during a deposit. The balance is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepositError {
    #[error("invalid deposit amount {0} Tk")]
    InvalidAmount(Amount),

    #[error("deposit of {requested} Tk would overflow balance {balance} Tk")]
    Overflow { balance: Amount, requested: Amount },
}

/// Error during a withdrawal. The balance is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WithdrawalError {
    #[error("invalid withdrawal amount {0} Tk")]
    InvalidAmount(Amount),

    #[error("insufficient balance: available {available} Tk, requested {requested} Tk")]
    InsufficientFunds { available: Amount, requested: Amount },

    #[error("cannot withdraw more than {limit} Tk at once, requested {requested} Tk")]
    ExceedsLimit { limit: Amount, requested: Amount },
}
