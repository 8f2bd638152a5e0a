use super::balance::Balance;
use super::transactions::*;
use crate::{amount::Amount, errors::AccountErr, AccountID, TransID};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ACCOUNT_ID: AtomicU32 = AtomicU32::new(1);

/// Account holder identity, current balance and journal of every money operation
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountID,
    owner_name: String,
    balance: Balance,
    journal: Vec<AccTrans>,
}

impl Account {
    /// Create account with next free account number.
    ///
    /// Fails with [`AccountErr::InvalidAmount`] when `opening_balance` is negative.
    pub fn create(
        owner_name: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<Self, AccountErr> {
        check_opening(opening_balance)?;
        let id = NEXT_ACCOUNT_ID.fetch_add(1, Ordering::Relaxed);
        Ok(Self::new_unchecked(id, owner_name.into(), opening_balance))
    }

    /// Same as [`Account::create`] but with account number chosen by caller
    pub fn open(
        id: AccountID,
        owner_name: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<Self, AccountErr> {
        check_opening(opening_balance)?;
        Ok(Self::new_unchecked(id, owner_name.into(), opening_balance))
    }

    fn new_unchecked(id: AccountID, owner_name: String, opening_balance: Decimal) -> Self {
        Self {
            id,
            owner_name,
            balance: Balance::with_opening(opening_balance),
            journal: Vec::new(),
        }
    }

    /// try to increase balance and return the new one.
    ///
    /// If this function return error the attempt is also recorded but balance was not
    /// changed. Deposit that would not fit into [`Decimal`] fails with
    /// [`AccountErr::Overflow`].
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountErr> {
        let result = Amount::try_from(amount)
            .map_err(AccountErr::from)
            .and_then(|amount| {
                self.balance
                    .try_deposit(&amount)
                    .map_err(AccountErr::from)
            });

        self.record(MoneyTrans::Deposit(amount), &result);
        result
    }

    /// try to decrease balance and return the new one.
    ///
    /// If this function return error the attempt is also recorded but balance was not
    /// changed.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountErr> {
        let result = Amount::try_from(amount)
            .map_err(AccountErr::from)
            .and_then(|amount| {
                self.balance
                    .try_withdraw(&amount)
                    .map_err(AccountErr::from)
            });

        self.record(MoneyTrans::Withdraw(amount), &result);
        result
    }

    /// current balance
    pub fn balance(&self) -> Decimal {
        self.balance.available()
    }

    /// account number
    pub fn id(&self) -> AccountID {
        self.id
    }

    /// account holder
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// every deposit and withdraw attempt in order of execution
    pub fn journal(&self) -> &[AccTrans] {
        &self.journal
    }

    fn record(&mut self, money: MoneyTrans, result: &Result<Decimal, AccountErr>) {
        let seq = self.journal.len() as TransID + 1;
        let acc_trans = match result {
            Ok(balance_after) => AccTrans::succeed(seq, money, *balance_after),
            Err(e) => AccTrans::failed(seq, money, e.clone(), self.balance()),
        };
        self.journal.push(acc_trans);
    }
}

fn check_opening(opening_balance: Decimal) -> Result<(), AccountErr> {
    if opening_balance.is_sign_negative() && !opening_balance.is_zero() {
        Err(AccountErr::InvalidAmount)
    } else {
        Ok(())
    }
}
