//! Core domain types for the bank runner.

use std::fmt;

use crate::Amount;

/// Account holder name, also the key an account is looked up by.
pub type Owner = String;

/// Which account variant an owner holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Savings,
    Current,
}

impl AccountKind {
    /// Short lowercase tag used in csv input and output.
    pub fn tag(self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "savings" => Some(AccountKind::Savings),
            "current" => Some(AccountKind::Current),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => f.write_str("Savings Account"),
            AccountKind::Current => f.write_str("Current Account"),
        }
    }
}

/// An operation the bank runner can apply.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Open a new account with an initial balance.
    Open {
        owner: Owner,
        kind: AccountKind,
        amount: Amount,
    },
    /// Credit funds to an owner's account.
    Deposit { owner: Owner, amount: Amount },
    /// Debit funds from an owner's account, subject to its withdrawal policy.
    Withdraw { owner: Owner, amount: Amount },
}

impl Operation {
    pub fn owner(&self) -> &str {
        match self {
            Operation::Open { owner, .. }
            | Operation::Deposit { owner, .. }
            | Operation::Withdraw { owner, .. } => owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in [AccountKind::Savings, AccountKind::Current] {
            assert_eq!(AccountKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(AccountKind::from_tag("fixed"), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(AccountKind::Savings.to_string(), "Savings Account");
        assert_eq!(AccountKind::Current.to_string(), "Current Account");
    }

    #[test]
    fn operation_owner() {
        let op = Operation::Withdraw {
            owner: "Rahim".to_string(),
            amount: Amount::from_taka(1),
        };
        assert_eq!(op.owner(), "Rahim");
    }
}
