//! Account and its journal
pub(crate) mod balance;
pub(crate) mod client_account;
pub(crate) mod transactions;

pub use client_account::Account;
pub use transactions::{AccTrans, AccTransState, MoneyTrans};
