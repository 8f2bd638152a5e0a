//! Possible errors

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount must be greater than zero")]
/// represent error when operation want to use zero or negative amount of money
pub struct InvalidAmountErr;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("not enough funds available: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("balance {balance} can not hold another {requested}")]
    Overflow { balance: Decimal, requested: Decimal },
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("invalid amount")]
    InvalidAmount,
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("balance overflow: balance {balance}, requested {requested}")]
    Overflow { balance: Decimal, requested: Decimal },
}

impl From<InvalidAmountErr> for AccountErr {
    fn from(_: InvalidAmountErr) -> Self {
        AccountErr::InvalidAmount
    }
}

impl From<BalanceErr> for AccountErr {
    fn from(e: BalanceErr) -> Self {
        match e {
            BalanceErr::InsufficientFunds { balance, requested } => {
                AccountErr::InsufficientFunds { balance, requested }
            }
            BalanceErr::Overflow { balance, requested } => {
                AccountErr::Overflow { balance, requested }
            }
        }
    }
}
