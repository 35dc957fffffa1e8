//! Event form parsing and validation.

use std::str::FromStr as _;

use common::{ClockTime, Money};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error as StdError};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::{
    command::SaveContract,
    domain::contract::{
        Address, Client, ClientName, Cpf, Event, EventDate, Headcount,
        PriceList, Rg,
    },
};
use smart_default::SmartDefault;

/// Raw event form, as filled by the operator.
///
/// Mirrors the paper form: identity of the client, facts about the
/// event, guest counts and unit prices. Omitted fields take the values
/// the company quotes by default.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct EventForm {
    /// Full name of the contracting client.
    pub client_name: String,

    /// CPF of the contracting client.
    pub client_cpf: String,

    /// RG of the contracting client.
    pub client_rg: String,

    /// Residential address of the contracting client.
    pub client_address: String,

    /// Date of the catered event.
    pub event_date: String,

    /// Address the event takes place at.
    pub event_address: String,

    /// Time the service starts at.
    #[default("20:30".to_owned())]
    pub start_time: String,

    /// Number of adult guests.
    #[default(25)]
    pub adults: u32,

    /// Number of child guests.
    pub children: u32,

    /// Number of separately hired extra waiters.
    pub extra_waiters: u32,

    /// Price per adult guest.
    #[default(55.0)]
    pub adult_price: f64,

    /// Price per child guest.
    #[default(27.0)]
    pub child_price: f64,

    /// Price per extra waiter.
    #[default(120.0)]
    pub extra_waiter_price: f64,
}

impl EventForm {
    /// Loads an [`EventForm`] from the TOML file at the provided `path`.
    ///
    /// # Errors
    ///
    /// If the file is missing or malformed.
    pub fn load(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Validates this [`EventForm`] into a [`SaveContract`] command.
    ///
    /// # Errors
    ///
    /// With the first field failing validation.
    pub fn validate(self) -> Result<SaveContract, ValidationError> {
        use ValidationError as E;

        let client = Client {
            name: ClientName::new(&self.client_name).ok_or(E::ClientName)?,
            cpf: Cpf::new(&self.client_cpf).ok_or(E::ClientCpf)?,
            rg: Rg::new(&self.client_rg).ok_or(E::ClientRg)?,
            address: Address::new(&self.client_address)
                .ok_or(E::ClientAddress)?,
        };

        let event = Event::schedule(
            EventDate::new(&self.event_date).ok_or(E::EventDate)?,
            Address::new(&self.event_address).ok_or(E::EventAddress)?,
            ClockTime::from_str(&self.start_time)
                .map_err(|_| E::StartTime)?,
        );

        let headcount = Headcount {
            adults: self.adults,
            children: self.children,
            extra_waiters: self.extra_waiters,
        };

        let prices = PriceList {
            per_adult: money(self.adult_price).ok_or(E::AdultPrice)?,
            per_child: money(self.child_price).ok_or(E::ChildPrice)?,
            per_extra_waiter: money(self.extra_waiter_price)
                .ok_or(E::ExtraWaiterPrice)?,
        };

        Ok(SaveContract {
            client,
            event,
            headcount,
            prices,
        })
    }
}

/// Converts a form price into [`Money`], rejecting negative and
/// non-finite values.
fn money(value: f64) -> Option<Money> {
    Decimal::try_from(value).ok().and_then(Money::new)
}

/// Error of [`EventForm`] validation.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum ValidationError {
    /// Client name is missing or blank.
    #[display("client name is missing or blank")]
    ClientName,

    /// Client CPF is not an 11-digit number.
    #[display("client CPF is not an 11-digit number")]
    ClientCpf,

    /// Client RG is missing or blank.
    #[display("client RG is missing or blank")]
    ClientRg,

    /// Client address is missing or blank.
    #[display("client address is missing or blank")]
    ClientAddress,

    /// Event date is missing or blank.
    #[display("event date is missing or blank")]
    EventDate,

    /// Event address is missing or blank.
    #[display("event address is missing or blank")]
    EventAddress,

    /// Start time is not a valid `HH:MM` pair.
    #[display("start time is not a valid `HH:MM` pair")]
    StartTime,

    /// Adult price is negative or not a number.
    #[display("adult price is negative or not a number")]
    AdultPrice,

    /// Child price is negative or not a number.
    #[display("child price is negative or not a number")]
    ChildPrice,

    /// Extra waiter price is negative or not a number.
    #[display("extra waiter price is negative or not a number")]
    ExtraWaiterPrice,
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use super::{EventForm, ValidationError};

    fn filled_form() -> EventForm {
        EventForm {
            client_name: "Maria da Silva".to_owned(),
            client_cpf: "123.456.789-09".to_owned(),
            client_rg: "12.345.678-9".to_owned(),
            client_address: "das Flores, 42, Londrina".to_owned(),
            event_date: "15/06/2025".to_owned(),
            event_address: "Av. Paraná, 100, Londrina".to_owned(),
            ..EventForm::default()
        }
    }

    #[test]
    fn applies_company_defaults() {
        let form = EventForm::default();

        assert_eq!(form.start_time, "20:30");
        assert_eq!(form.adults, 25);
        assert_eq!(form.children, 0);
        assert!((form.adult_price - 55.0).abs() < f64::EPSILON);
        assert!((form.child_price - 27.0).abs() < f64::EPSILON);
        assert!((form.extra_waiter_price - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validates_a_filled_form() {
        let cmd = filled_form().validate().unwrap();

        assert_eq!(AsRef::<str>::as_ref(&cmd.client.name), "Maria da Silva");
        assert_eq!(cmd.event.starts_at.to_string(), "20:30");
        assert_eq!(cmd.event.ends_at.to_string(), "23:30");
        assert_eq!(cmd.headcount.adults, 25);
        assert_eq!(cmd.prices.per_adult, Money::from_str("55").unwrap());
    }

    #[test]
    fn rejects_a_blank_client_name() {
        let form = EventForm {
            client_name: "   ".to_owned(),
            ..filled_form()
        };

        assert!(matches!(
            form.validate(),
            Err(ValidationError::ClientName),
        ));
    }

    #[test]
    fn rejects_a_malformed_start_time() {
        let form = EventForm {
            start_time: "25:99".to_owned(),
            ..filled_form()
        };

        assert!(matches!(form.validate(), Err(ValidationError::StartTime)));
    }

    #[test]
    fn rejects_a_negative_price() {
        let form = EventForm {
            adult_price: -1.0,
            ..filled_form()
        };

        assert!(matches!(
            form.validate(),
            Err(ValidationError::AdultPrice),
        ));
    }
}
