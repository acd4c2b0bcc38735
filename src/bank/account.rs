use crate::Amount;
use crate::model::AccountKind;

use super::error::{DepositError, OpenError, WithdrawalError};

/// Largest amount a savings account pays out in a single withdrawal.
pub const SAVINGS_WITHDRAWAL_LIMIT: Amount = Amount::from_taka(50_000);

/// Balance storage shared by every account variant.
///
/// Only the crate touches a ledger, through the account variants, so the
/// balance never drops below zero.
#[derive(Debug, Default)]
pub struct Ledger {
    balance: Amount,
}

impl Ledger {
    pub(crate) fn open(initial: Amount) -> Result<Self, OpenError> {
        if initial.is_negative() {
            return Err(OpenError::NegativeBalance(initial));
        }
        Ok(Self { balance: initial })
    }

    pub(crate) fn balance(&self) -> Amount {
        self.balance
    }

    /// Add a strictly positive amount, returning the new balance.
    pub(crate) fn credit(&mut self, amount: Amount) -> Result<Amount, DepositError> {
        if !amount.is_positive() {
            return Err(DepositError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DepositError::Overflow {
                balance: self.balance,
                requested: amount,
            })?;
        Ok(self.balance)
    }

    /// Remove a strictly positive amount covered by the balance, returning
    /// the new balance.
    pub(crate) fn debit(&mut self, amount: Amount) -> Result<Amount, WithdrawalError> {
        if !amount.is_positive() {
            return Err(WithdrawalError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(WithdrawalError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

mod sealed {
    use super::Ledger;

    /// Ledger access for account variants. Not nameable outside the crate,
    /// so only [`Account`](super::Account) operations reach the balance.
    pub trait HasLedger {
        fn ledger(&self) -> &Ledger;

        fn ledger_mut(&mut self) -> &mut Ledger;
    }
}

use sealed::HasLedger;

/// Behaviour common to all account variants.
///
/// Variants only supply their owner, kind and ledger; `deposit` and
/// `withdraw` default to the base policy and may be overridden. The trait is
/// sealed: the ledger stays out of reach of callers.
///
/// ```compile_fail
/// use classroom_oop::bank::open_account;
/// use classroom_oop::{AccountKind, Amount};
///
/// let balance = Amount::from_taka(110_000);
/// let mut account = open_account(AccountKind::Savings, "Arman", balance).unwrap();
/// account.ledger_mut().debit(Amount::from_taka(60_000));
/// ```
pub trait Account: HasLedger {
    fn owner(&self) -> &str;

    fn account_type(&self) -> AccountKind;

    fn balance(&self) -> Amount {
        self.ledger().balance()
    }

    fn deposit(&mut self, amount: Amount) -> Result<Amount, DepositError> {
        self.ledger_mut().credit(amount)
    }

    fn withdraw(&mut self, amount: Amount) -> Result<Amount, WithdrawalError> {
        self.ledger_mut().debit(amount)
    }
}

#[derive(Debug)]
pub struct SavingsAccount {
    owner: String,
    ledger: Ledger,
}

impl SavingsAccount {
    pub fn new(owner: impl Into<String>, balance: Amount) -> Result<Self, OpenError> {
        Ok(Self {
            owner: owner.into(),
            ledger: Ledger::open(balance)?,
        })
    }
}

impl HasLedger for SavingsAccount {
    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}

impl Account for SavingsAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn account_type(&self) -> AccountKind {
        AccountKind::Savings
    }

    // The limit is checked before the balance, so it wins when both fail.
    fn withdraw(&mut self, amount: Amount) -> Result<Amount, WithdrawalError> {
        if amount > SAVINGS_WITHDRAWAL_LIMIT {
            return Err(WithdrawalError::ExceedsLimit {
                limit: SAVINGS_WITHDRAWAL_LIMIT,
                requested: amount,
            });
        }
        self.ledger.debit(amount)
    }
}

#[derive(Debug)]
pub struct CurrentAccount {
    owner: String,
    ledger: Ledger,
}

impl CurrentAccount {
    pub fn new(owner: impl Into<String>, balance: Amount) -> Result<Self, OpenError> {
        Ok(Self {
            owner: owner.into(),
            ledger: Ledger::open(balance)?,
        })
    }
}

impl HasLedger for CurrentAccount {
    fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}

impl Account for CurrentAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn account_type(&self) -> AccountKind {
        AccountKind::Current
    }
}

/// Open an account of the given kind behind the [`Account`] trait.
pub fn open_account(
    kind: AccountKind,
    owner: impl Into<String>,
    balance: Amount,
) -> Result<Box<dyn Account>, OpenError> {
    Ok(match kind {
        AccountKind::Savings => Box::new(SavingsAccount::new(owner, balance)?),
        AccountKind::Current => Box::new(CurrentAccount::new(owner, balance)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taka(value: i64) -> Amount {
        Amount::from_taka(value)
    }

    #[test]
    fn ledger_rejects_negative_opening_balance() {
        assert_eq!(
            Ledger::open(taka(-1)).unwrap_err(),
            OpenError::NegativeBalance(taka(-1))
        );
        assert_eq!(Ledger::open(Amount::ZERO).unwrap().balance(), Amount::ZERO);
    }

    #[test]
    fn non_positive_deposit_leaves_balance_unchanged() {
        for kind in [AccountKind::Savings, AccountKind::Current] {
            let mut account = open_account(kind, "A", taka(500)).unwrap();
            for amount in [Amount::ZERO, taka(-10)] {
                assert_eq!(
                    account.deposit(amount),
                    Err(DepositError::InvalidAmount(amount))
                );
                assert_eq!(account.balance(), taka(500));
            }
        }
    }

    #[test]
    fn positive_deposit_adds_to_balance() {
        for kind in [AccountKind::Savings, AccountKind::Current] {
            let mut account = open_account(kind, "A", taka(500)).unwrap();
            assert_eq!(account.deposit(taka(250)), Ok(taka(750)));
            assert_eq!(
                account.deposit(Amount::from_scaled(1)),
                Ok(Amount::from_scaled(75_001))
            );
        }
    }

    #[test]
    fn deposit_past_representable_balance_is_refused() {
        let near_max = Amount::from_scaled(i64::MAX - 5);
        let mut account = CurrentAccount::new("Rahim", near_max).unwrap();
        assert_eq!(
            account.deposit(Amount::from_scaled(6)),
            Err(DepositError::Overflow {
                balance: near_max,
                requested: Amount::from_scaled(6),
            })
        );
        assert_eq!(account.balance(), near_max);
        assert_eq!(
            account.deposit(Amount::from_scaled(5)),
            Ok(Amount::from_scaled(i64::MAX))
        );
    }

    #[test]
    fn non_positive_withdrawal_is_refused() {
        for kind in [AccountKind::Savings, AccountKind::Current] {
            let mut account = open_account(kind, "A", taka(100)).unwrap();
            for amount in [Amount::ZERO, taka(-100_000)] {
                assert_eq!(
                    account.withdraw(amount),
                    Err(WithdrawalError::InvalidAmount(amount))
                );
                assert_eq!(account.balance(), taka(100));
            }
        }
    }

    #[test]
    fn current_withdraw_within_balance() {
        let mut account = CurrentAccount::new("Rahim", taka(1_000)).unwrap();
        assert_eq!(account.withdraw(taka(400)), Ok(taka(600)));
        assert_eq!(account.withdraw(taka(600)), Ok(Amount::ZERO));
    }

    #[test]
    fn current_withdraw_over_balance_is_refused() {
        let mut account = CurrentAccount::new("Rahim", taka(1_000)).unwrap();
        assert_eq!(
            account.withdraw(taka(1_001)),
            Err(WithdrawalError::InsufficientFunds {
                available: taka(1_000),
                requested: taka(1_001),
            })
        );
        assert_eq!(account.balance(), taka(1_000));
    }

    #[test]
    fn current_has_no_per_withdrawal_cap() {
        let mut account = CurrentAccount::new("Rahim", taka(200_000)).unwrap();
        assert_eq!(account.withdraw(taka(120_000)), Ok(taka(80_000)));
    }

    #[test]
    fn savings_refuses_over_limit_even_with_funds() {
        let mut account = SavingsAccount::new("Arman", taka(500_000)).unwrap();
        assert_eq!(
            account.withdraw(taka(50_001)),
            Err(WithdrawalError::ExceedsLimit {
                limit: SAVINGS_WITHDRAWAL_LIMIT,
                requested: taka(50_001),
            })
        );
        assert_eq!(account.balance(), taka(500_000));
    }

    #[test]
    fn savings_limit_takes_precedence_over_balance() {
        let mut account = SavingsAccount::new("Arman", taka(10)).unwrap();
        assert!(matches!(
            account.withdraw(taka(60_000)),
            Err(WithdrawalError::ExceedsLimit { .. })
        ));
    }

    #[test]
    fn savings_at_limit_delegates_to_base_policy() {
        let mut account = SavingsAccount::new("Arman", taka(60_000)).unwrap();
        assert_eq!(account.withdraw(SAVINGS_WITHDRAWAL_LIMIT), Ok(taka(10_000)));
        assert!(matches!(
            account.withdraw(taka(10_001)),
            Err(WithdrawalError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn savings_limit_holds_behind_trait_object() {
        let mut account =
            open_account(AccountKind::Savings, "Arman", taka(110_000)).unwrap();
        for _ in 0..3 {
            assert!(matches!(
                account.withdraw(taka(60_000)),
                Err(WithdrawalError::ExceedsLimit { .. })
            ));
        }
        assert_eq!(account.withdraw(taka(50_000)), Ok(taka(60_000)));
        assert_eq!(account.balance(), taka(60_000));
    }

    #[test]
    fn savings_scenario() {
        let mut account = SavingsAccount::new("Arman", taka(100_000)).unwrap();
        assert_eq!(account.deposit(taka(10_000)), Ok(taka(110_000)));
        assert!(account.withdraw(taka(60_000)).is_err());
        assert_eq!(account.balance(), taka(110_000));
    }

    #[test]
    fn current_scenario() {
        let mut account = CurrentAccount::new("Rahim", taka(200_000)).unwrap();
        assert_eq!(account.deposit(taka(10_000)), Ok(taka(210_000)));
        assert_eq!(account.withdraw(taka(60_000)), Ok(taka(150_000)));
    }

    #[test]
    fn account_type_is_polymorphic() {
        let accounts = [
            open_account(AccountKind::Savings, "Arman", Amount::ZERO).unwrap(),
            open_account(AccountKind::Current, "Rahim", Amount::ZERO).unwrap(),
        ];
        let kinds: Vec<_> = accounts.iter().map(|a| a.account_type()).collect();
        assert_eq!(kinds, [AccountKind::Savings, AccountKind::Current]);
        assert_eq!(accounts[0].owner(), "Arman");
    }
}
