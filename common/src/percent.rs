//! [`Percent`]-related definitions.

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Money;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be greater than `0` and less than `100`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Returns this fraction of the provided amount, unrounded.
    #[must_use]
    pub fn of(self, amount: Money) -> Money {
        #[expect(
            clippy::allow_attributes,
            reason = "TODO: Remove once clippy is fixed"
        )]
        #[allow(unsafe_code, reason = "invariants checked already")]
        // A 0..=100 fraction of a non-negative amount stays non-negative.
        unsafe {
            Money::new_unchecked(
                amount.amount() * self.0 / Decimal::ONE_HUNDRED,
            )
        }
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::Money;

    use super::Percent;

    #[test]
    fn checks_bounds() {
        assert!(Percent::new(Decimal::from(-1)).is_none());
        assert!(Percent::new(Decimal::from(101)).is_none());
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
    }

    #[test]
    fn takes_fraction_of_money() {
        let pct = Percent::new(Decimal::from(40)).unwrap();
        let amount = Money::new(Decimal::from(1375)).unwrap();

        assert_eq!(pct.of(amount), Money::new(Decimal::from(550)).unwrap());
    }
}
