//! [`Money`]-related definitions.

use std::{fmt, ops, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-negative amount of money in Brazilian reais.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new [`Money`] by checking the provided amount is not
    /// negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount < Decimal::ZERO {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(amount) })
        }
    }

    /// Creates a new [`Money`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided amount must not be negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Rounds this [`Money`] half-up to whole reais.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns this [`Money`] as whole centavos, rounded half-up.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn cents(self) -> u64 {
        (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .expect("non-negative amount")
    }
}

impl fmt::Display for Money {
    /// Formats this [`Money`] the Brazilian way: `R$ 1.375,00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        let (reais, centavos) = (cents / 100, cents % 100);

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        write!(f, "R$ {grouped},{centavos:02}")
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid money amount")
    }
}

impl TryFrom<Decimal> for Money {
    type Error = &'static str;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount).ok_or("negative money amount")
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Sub for Money {
    type Output = Self;

    /// Callers uphold the non-negativity of the difference.
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(Money::new(Decimal::from(-1)).is_none());
        assert!(Money::from_str("-0.01").is_err());
        assert!(Money::new(Decimal::ZERO).is_some());
    }

    #[test]
    fn displays_brazilian_format() {
        assert_eq!(money("0").to_string(), "R$ 0,00");
        assert_eq!(money("55").to_string(), "R$ 55,00");
        assert_eq!(money("1375").to_string(), "R$ 1.375,00");
        assert_eq!(money("1234567.89").to_string(), "R$ 1.234.567,89");
        assert_eq!(money("0.5").to_string(), "R$ 0,50");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(money("550.4").rounded(), money("550"));
        assert_eq!(money("550.5").rounded(), money("551"));
        assert_eq!(money("550").rounded(), money("550"));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(money("55") * 25, money("1375"));
        assert_eq!(money("1375") - money("550"), money("825"));
        assert_eq!(money("1375") + money("120"), money("1495"));
        assert_eq!(money("1500.50").cents(), 150_050);
    }
}
