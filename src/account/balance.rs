use crate::amount::Amount;
use crate::errors::BalanceErr;
use rust_decimal::Decimal;

/// Represents current account balance. Never goes below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    /// caller must guarantee `opening` is not negative
    pub fn with_opening(opening: Decimal) -> Self {
        debug_assert!(!opening.is_sign_negative() || opening.is_zero());
        Self { available: opening }
    }

    pub fn try_deposit(&mut self, amount: &Amount) -> Result<Decimal, BalanceErr> {
        self.available = self
            .available
            .checked_add(**amount)
            .ok_or(BalanceErr::Overflow {
                balance: self.available,
                requested: **amount,
            })?;
        Ok(self.available)
    }

    pub fn try_withdraw(&mut self, amount: &Amount) -> Result<Decimal, BalanceErr> {
        if self.available < **amount {
            return Err(BalanceErr::InsufficientFunds {
                balance: self.available,
                requested: **amount,
            });
        }

        self.available -= **amount;
        debug_assert!(self.available >= Decimal::ZERO);
        Ok(self.available)
    }

    pub fn available(&self) -> Decimal {
        self.available
    }
}

#[cfg(test)]
mod test {
    use super::Balance;
    use crate::{amount::Amount, errors::BalanceErr};
    use rust_decimal::Decimal;

    #[test]
    fn withdraw_whole_balance() {
        let mut b = Balance::with_opening(Decimal::new(100, 0));
        let left = b.try_withdraw(&Amount::new(100, 0).unwrap()).unwrap();
        assert_eq!(left, Decimal::ZERO);
    }

    #[test]
    fn deposit_past_max_keeps_balance() {
        let mut b = Balance::with_opening(Decimal::MAX);
        let e = b.try_deposit(&Amount::new(1, 0).unwrap()).unwrap_err();
        assert_eq!(
            e,
            BalanceErr::Overflow {
                balance: Decimal::MAX,
                requested: Decimal::ONE
            }
        );
        assert_eq!(b.available(), Decimal::MAX);
    }

    #[test]
    fn preventing_debt_withdraw() {
        let mut b = Balance::default();
        let e = b.try_withdraw(&Amount::new(1, 2).unwrap()).unwrap_err();
        assert_eq!(
            e,
            BalanceErr::InsufficientFunds {
                balance: Decimal::ZERO,
                requested: Decimal::new(1, 2)
            }
        );
        assert_eq!(b.available(), Decimal::ZERO);
    }
}
