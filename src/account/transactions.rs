//! Represents transactions recorded in account journal
use crate::{errors::AccountErr, TransID};
use rust_decimal::Decimal;

/// Represent a single deposit or withdraw attempt with it outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccTrans {
    seq: TransID,
    money: MoneyTrans,
    state: AccTransState,
    balance_after: Decimal,
}

impl AccTrans {
    pub(crate) fn succeed(seq: TransID, money: MoneyTrans, balance_after: Decimal) -> Self {
        Self {
            seq,
            money,
            state: AccTransState::Applied,
            balance_after,
        }
    }

    pub(crate) fn failed(
        seq: TransID,
        money: MoneyTrans,
        reason: AccountErr,
        balance_after: Decimal,
    ) -> Self {
        Self {
            seq,
            money,
            state: AccTransState::Failed(reason),
            balance_after,
        }
    }

    /// position in journal, starting at 1
    pub fn seq(&self) -> TransID {
        self.seq
    }

    /// requested operation
    pub fn money(&self) -> &MoneyTrans {
        &self.money
    }

    /// outcome of the attempt
    pub fn state(&self) -> &AccTransState {
        &self.state
    }

    /// account balance right after this attempt
    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }
}

/// Represent outcome of [`AccTrans`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccTransState {
    /// balance was changed
    Applied,
    /// Operation was only recorded but there is no impact on funds
    Failed(AccountErr),
}

/// Money transaction represent withdraw or deposit.
///
/// Holds the amount as requested, so rejected non-positive amounts are kept too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyTrans {
    /// increase available funds
    Deposit(Decimal),
    /// decrease available funds
    Withdraw(Decimal),
}

impl MoneyTrans {
    /// requested amount
    pub fn amount(&self) -> Decimal {
        match self {
            MoneyTrans::Deposit(a) | MoneyTrans::Withdraw(a) => *a,
        }
    }
}
