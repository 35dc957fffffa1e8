//! Pricing and staffing derivations.

use std::time::Duration;

use common::{Money, Percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contract::{Headcount, PriceList};

/// How long the catering service runs for.
pub const SERVICE_DURATION: Duration = Duration::from_secs(3 * 60 * 60);

/// How many guests a single waiter serves.
pub const GUESTS_PER_WAITER: u32 = 30;

/// Fraction of the total value due upfront, before the event.
#[expect(unsafe_code, reason = "invariants checked already")]
const DOWN_PAYMENT: Percent =
    unsafe { Percent::new_unchecked(Decimal::from_parts(40, 0, 0, false, 0)) };

/// Monetary totals derived from a [`Headcount`] and a [`PriceList`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Totals {
    /// Full value of the contracted service.
    pub total: Money,

    /// Upfront part of the total, due before the event.
    pub down_payment: Money,
}

impl Totals {
    /// Derives the [`Totals`] for the provided [`Headcount`] and
    /// [`PriceList`].
    ///
    /// The total is the exact weighted sum of the three billed categories,
    /// and the down payment is 40% of it rounded half-up to whole reais.
    #[must_use]
    pub fn of(headcount: Headcount, prices: PriceList) -> Self {
        let total = prices.per_adult * headcount.adults
            + prices.per_child * headcount.children
            + prices.per_extra_waiter * headcount.extra_waiters;

        Self {
            total,
            down_payment: DOWN_PAYMENT.of(total).rounded(),
        }
    }

    /// Part of the total still due at the event itself.
    #[must_use]
    pub fn remaining(&self) -> Money {
        self.total - self.down_payment
    }
}

/// Base number of waiters required to serve the provided [`Headcount`],
/// not counting the separately billed extra waiters.
#[must_use]
pub fn required_waiters(headcount: Headcount) -> u32 {
    let guests = headcount.adults + headcount.children;
    guests.div_ceil(GUESTS_PER_WAITER).max(1)
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use super::{
        required_waiters, Headcount, PriceList, Totals,
    };

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn headcount(adults: u32, children: u32, extra_waiters: u32) -> Headcount {
        Headcount {
            adults,
            children,
            extra_waiters,
        }
    }

    fn prices() -> PriceList {
        PriceList {
            per_adult: money("55"),
            per_child: money("27"),
            per_extra_waiter: money("120"),
        }
    }

    #[test]
    fn total_is_exact_weighted_sum() {
        let totals = Totals::of(headcount(25, 0, 0), prices());

        assert_eq!(totals.total, money("1375"));
        assert_eq!(totals.down_payment, money("550"));
        assert_eq!(totals.remaining(), money("825"));

        let totals = Totals::of(headcount(10, 4, 2), prices());

        assert_eq!(totals.total, money("898"));
        // 40% of 898 is 359.2, rounded half-up.
        assert_eq!(totals.down_payment, money("359"));
        assert_eq!(totals.remaining(), money("539"));
    }

    #[test]
    fn down_payment_rounds_half_up() {
        let list = PriceList {
            per_adult: money("56.25"),
            per_child: money("27"),
            per_extra_waiter: money("120"),
        };

        // Total 56.25, 40% is 22.5, rounded half-up to 23.
        let totals = Totals::of(headcount(1, 0, 0), list);

        assert_eq!(totals.down_payment, money("23"));
    }

    #[test]
    fn zero_headcount_produces_zero_totals() {
        let totals = Totals::of(headcount(0, 0, 0), prices());

        assert_eq!(totals.total, money("0"));
        assert_eq!(totals.down_payment, money("0"));
        assert_eq!(totals.remaining(), money("0"));
    }

    #[test]
    fn one_waiter_per_thirty_guests_at_least_one() {
        assert_eq!(required_waiters(headcount(0, 0, 0)), 1);
        assert_eq!(required_waiters(headcount(30, 0, 0)), 1);
        assert_eq!(required_waiters(headcount(31, 0, 0)), 2);
        assert_eq!(required_waiters(headcount(60, 30, 0)), 3);
        // Extra waiters never influence the base staffing.
        assert_eq!(required_waiters(headcount(30, 0, 5)), 1);
    }
}
