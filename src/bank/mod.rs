//! Account operations runner.
//!
//! The bank keeps one account per owner and applies open, deposit and
//! withdrawal operations to it. Refused operations are reported and skipped,
//! they never stop the runner. Also supports async stream of operations.

use std::collections::HashMap;
use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::model::{AccountKind, Operation};

mod account;
pub use account::{
    Account, CurrentAccount, SAVINGS_WITHDRAWAL_LIMIT, SavingsAccount, open_account,
};

mod error;
pub use error::{BankError, DepositError, OpenError, WithdrawalError};

/// Owner-keyed registry of accounts.
pub struct Bank {
    accounts: HashMap<String, Box<dyn Account>>,
}

/// Public API
impl Bank {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Run the bank with the given operation stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Operation> + Unpin) {
        while let Some(op) = stream.next().await {
            // refusals are logged by `apply` and must not stop the runner
            let _ = self.apply(op);
        }
    }

    /// Return every open account.
    pub fn accounts(&self) -> impl Iterator<Item = &dyn Account> + '_ {
        self.accounts.values().map(|account| account.as_ref())
    }

    /// Return the account held by one owner
    pub fn get(&self, owner: &str) -> Option<&dyn Account> {
        self.accounts.get(owner).map(|account| account.as_ref())
    }

    /// Apply a single operation on top of the current state
    pub fn apply(&mut self, op: Operation) -> Result<(), BankError> {
        match op {
            Operation::Open {
                owner,
                kind,
                amount,
            } => {
                let result = self.apply_open(&owner, kind, amount);
                Self::log_result("open", &owner, amount, &result);
                result
            }
            Operation::Deposit { owner, amount } => {
                let result = self.apply_deposit(&owner, amount);
                Self::log_result("deposit", &owner, amount, &result);
                result
            }
            Operation::Withdraw { owner, amount } => {
                let result = self.apply_withdraw(&owner, amount);
                Self::log_result("withdrawal", &owner, amount, &result);
                result
            }
        }
    }
}

/// Private API
impl Bank {
    /// Small helper to log `apply` results
    fn log_result(op_type: &str, owner: &str, amount: Amount, result: &Result<(), BankError>) {
        match result {
            Ok(()) => {
                info!(owner, amount = %amount, "{op_type} applied");
            }
            Err(e) => {
                info!(owner, amount = %amount, reason = %e, "{op_type} skipped");
            }
        }
    }

    fn account_mut(&mut self, owner: &str) -> Result<&mut Box<dyn Account>, BankError> {
        self.accounts
            .get_mut(owner)
            .ok_or_else(|| BankError::AccountNotFound(owner.to_string()))
    }

    /// Apply an `Operation::Open`:
    /// - Ensure the owner has no account yet
    /// - Ensure the initial balance is not negative
    fn apply_open(
        &mut self,
        owner: &str,
        kind: AccountKind,
        amount: Amount,
    ) -> Result<(), BankError> {
        if self.accounts.contains_key(owner) {
            return Err(BankError::DuplicateAccount(owner.to_string()));
        }
        let account = open_account(kind, owner, amount)?;
        self.accounts.insert(owner.to_string(), account);
        Ok(())
    }

    /// Apply an `Operation::Deposit` through the account's deposit policy
    fn apply_deposit(&mut self, owner: &str, amount: Amount) -> Result<(), BankError> {
        self.account_mut(owner)?.deposit(amount)?;
        Ok(())
    }

    /// Apply an `Operation::Withdraw` through the account's withdrawal policy
    fn apply_withdraw(&mut self, owner: &str, amount: Amount) -> Result<(), BankError> {
        self.account_mut(owner)?.withdraw(amount)?;
        Ok(())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
