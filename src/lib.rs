//! Single account console with deposit and withdraw

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod csv;
pub mod errors;
pub mod session;

/// Position of a money operation inside an account journal
pub type TransID = u32;
/// Account number
pub type AccountID = u32;
