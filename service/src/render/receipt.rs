//! Payment receipt assembly.

use std::fmt;

use crate::domain::Contract;

use super::{sanitize, words};

/// Sequential number of a receipt.
///
/// Derived from the record's position in creation order, so repeated
/// renders of the same [`Contract`] agree on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Number(u32);

impl Number {
    /// Creates a new [`Number`] with the provided value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Number {
    /// Formats this [`Number`] as a zero-padded 4-digit token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Assembles the payment receipt of the provided [`Contract`],
/// acknowledging its down payment.
///
/// Follows the same marker and newline conventions as
/// [`contract::narrative`], and embeds no "now"-derived data either.
///
/// [`contract::narrative`]: super::contract::narrative
#[must_use]
pub fn slip(contract: &Contract, number: Number) -> String {
    let client_name = sanitize(contract.client.name.as_ref()).to_uppercase();
    let event_date = sanitize(contract.event.date.as_ref()).to_uppercase();

    let amount = contract.totals.down_payment;
    let amount_in_words = words::amount(amount).to_uppercase();

    format!(
        "**RECIBO** Nº **{number}** VALOR **{amount}**\n\
         \n\
         Recebi(emos) de **{client_name}**\n\
         a quantia de **{amount_in_words}**\n\
         Correspondente a **ENTRADA DO EVENTO A SE REALIZAR NA DATA DE \
         {event_date}**\n\
         \n\
         e para clareza firmo(amos) o presente"
    )
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{ClockTime, Money};

    use crate::domain::contract::{
        Address, Client, ClientName, Contract, Cpf, Event, EventDate,
        Headcount, PriceList, Rg,
    };

    use super::{slip, Number};

    fn contract() -> Contract {
        Contract::new(
            Client {
                name: ClientName::new("Maria da Silva").unwrap(),
                cpf: Cpf::new("123.456.789-09").unwrap(),
                rg: Rg::new("12.345.678-9").unwrap(),
                address: Address::new("das Flores, 42, Londrina").unwrap(),
            },
            Event::schedule(
                EventDate::new("15/06/2025").unwrap(),
                Address::new("Av. Paraná, 100, Londrina").unwrap(),
                ClockTime::new(20, 30).unwrap(),
            ),
            Headcount {
                adults: 25,
                children: 0,
                extra_waiters: 0,
            },
            PriceList {
                per_adult: Money::from_str("55").unwrap(),
                per_child: Money::from_str("27").unwrap(),
                per_extra_waiter: Money::from_str("120").unwrap(),
            },
        )
    }

    #[test]
    fn number_is_zero_padded() {
        assert_eq!(Number::new(1).to_string(), "0001");
        assert_eq!(Number::new(42).to_string(), "0042");
        assert_eq!(Number::new(12345).to_string(), "12345");
    }

    #[test]
    fn acknowledges_the_down_payment() {
        let text = slip(&contract(), Number::new(7));

        assert!(text.contains("**RECIBO** Nº **0007**"));
        assert!(text.contains("VALOR **R$ 550,00**"));
        assert!(text.contains("Recebi(emos) de **MARIA DA SILVA**"));
        assert!(text.contains("**QUINHENTOS E CINQUENTA REAIS**"));
        assert!(text.contains("NA DATA DE 15/06/2025"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let contract = contract();

        assert_eq!(
            slip(&contract, Number::new(1)),
            slip(&contract, Number::new(1)),
        );
    }
}
