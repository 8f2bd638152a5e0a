//! Protect before using zero or negative amount for deposits and withdraws.

use std::{borrow::Borrow, ops::Deref, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::errors::InvalidAmountErr;

/// Represent strictly positive financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

#[cfg(test)]
impl Amount {
    /// Create new amount from `num` with `scale` decimal places. Zero is rejected.
    pub(crate) fn new(num: u64, scale: u32) -> Result<Amount, InvalidAmountErr> {
        Decimal::from_i128_with_scale(num.into(), scale).try_into()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = InvalidAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() || value.is_zero() {
            Err(InvalidAmountErr)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("`{0}` is not a number")]
/// user typed something that is not a decimal number
pub struct ParseAmountErr(String);

/// Parse decimal typed by user. Sign is preserved, validation is up to the account.
pub fn parse_decimal(input: &str) -> Result<Decimal, ParseAmountErr> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed).map_err(|_| ParseAmountErr(trimmed.to_owned()))
}

#[cfg(test)]
mod test {
    use super::{parse_decimal, Amount};
    use crate::errors::InvalidAmountErr;
    use rust_decimal::Decimal;

    #[test]
    fn positive_amount() {
        let a = Amount::try_from(Decimal::new(125, 1)).unwrap();
        assert_eq!(*a, Decimal::new(125, 1));
        assert_eq!(*Amount::new(5000, 0).unwrap(), Decimal::new(5000, 0));
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(Amount::try_from(Decimal::ZERO), Err(InvalidAmountErr));
        assert_eq!(Amount::try_from(Decimal::new(-5, 0)), Err(InvalidAmountErr));
        assert_eq!(Amount::new(0, 2), Err(InvalidAmountErr));
    }

    #[test]
    fn parse_user_input() {
        assert_eq!(parse_decimal(" 2000 \n"), Ok(Decimal::new(2000, 0)));
        assert_eq!(parse_decimal("12.50"), Ok(Decimal::new(1250, 2)));
        assert_eq!(parse_decimal("-5"), Ok(Decimal::new(-5, 0)));
        assert!(parse_decimal("five").is_err());
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("1.2.3").is_err());
    }
}
