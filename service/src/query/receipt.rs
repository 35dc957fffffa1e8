//! [`Query`] resolving a receipt [`Number`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{contract, Contract},
    infra::{store, Store},
    render::receipt::Number,
    Service,
};

use super::Query;

/// Queries the receipt [`Number`] of a [`Contract`].
///
/// The number is the record's 1-based position in creation order, so it
/// never changes for a persisted [`Contract`] and renders the same on
/// every reprint.
#[derive(Clone, Copy, Debug)]
pub struct NumberOf(pub contract::Id);

impl<S> Query<NumberOf> for Service<S>
where
    S: Store<Select<By<Vec<Contract>, ()>>,
        Ok = Vec<Contract>,
        Err = Traced<store::Error>>,
{
    type Ok = Option<Number>;
    type Err = Traced<store::Error>;

    fn execute(&self, NumberOf(id): NumberOf) -> Result<Self::Ok, Self::Err> {
        let all = self
            .store()
            .execute(Select(By::new(())))
            .map_err(tracerr::wrap!())?;

        Ok(all.iter().position(|c| c.id == id).map(|i| {
            Number::new(u32::try_from(i + 1).unwrap_or(u32::MAX))
        }))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{ClockTime, Money};

    use crate::{
        command::SaveContract,
        domain::contract::{
            Address, Client, ClientName, Cpf, Event, EventDate, Headcount,
            Id, PriceList, Rg,
        },
        infra::Memory,
        render::receipt::Number,
        Command as _, Config, Query as _, Service,
    };

    use super::NumberOf;

    fn save_contract() -> SaveContract {
        SaveContract {
            client: Client {
                name: ClientName::new("Maria da Silva").unwrap(),
                cpf: Cpf::new("123.456.789-09").unwrap(),
                rg: Rg::new("12.345.678-9").unwrap(),
                address: Address::new("das Flores, 42, Londrina").unwrap(),
            },
            event: Event::schedule(
                EventDate::new("15/06/2025").unwrap(),
                Address::new("Av. Paraná, 100, Londrina").unwrap(),
                ClockTime::new(20, 30).unwrap(),
            ),
            headcount: Headcount {
                adults: 25,
                children: 0,
                extra_waiters: 0,
            },
            prices: PriceList {
                per_adult: Money::from_str("55").unwrap(),
                per_child: Money::from_str("27").unwrap(),
                per_extra_waiter: Money::from_str("120").unwrap(),
            },
        }
    }

    #[test]
    fn numbers_follow_creation_order() {
        let service = Service::new(Config::default(), Memory::default());

        let first = service.execute(save_contract()).unwrap();
        let second = service.execute(save_contract()).unwrap();

        assert_eq!(
            service.execute(NumberOf(first.id)).unwrap(),
            Some(Number::new(1)),
        );
        assert_eq!(
            service.execute(NumberOf(second.id)).unwrap(),
            Some(Number::new(2)),
        );
    }

    #[test]
    fn number_is_stable_across_later_saves() {
        let service = Service::new(Config::default(), Memory::default());

        let first = service.execute(save_contract()).unwrap();
        let before = service.execute(NumberOf(first.id)).unwrap();

        drop(service.execute(save_contract()).unwrap());

        assert_eq!(service.execute(NumberOf(first.id)).unwrap(), before);
    }

    #[test]
    fn unknown_record_has_no_number() {
        let service = Service::new(Config::default(), Memory::default());

        assert_eq!(service.execute(NumberOf(Id::new())).unwrap(), None);
    }
}
