//! [`Contract`] definitions.

use std::{fmt, str::FromStr};

use common::{ClockTime, DateTime};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pricing::{self, Totals};

/// Single saved catering agreement: the full form input plus the fields
/// derived from it.
///
/// A [`Contract`] is immutable once persisted. Editing an agreement means
/// deriving a whole new [`Contract`], never patching a stored one.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Contract {
    /// ID of this [`Contract`].
    pub id: Id,

    /// Identity of the contracting client.
    pub client: Client,

    /// Facts about the catered event.
    pub event: Event,

    /// Number of guests and separately hired staff.
    pub headcount: Headcount,

    /// Unit prices agreed for the event.
    pub prices: PriceList,

    /// Totals derived from the headcount and prices.
    pub totals: Totals,

    /// [`DateTime`] when this [`Contract`] was created.
    #[serde(with = "common::datetime::serde::unix_timestamp")]
    pub created_at: DateTime,
}

impl Contract {
    /// Finalizes a new [`Contract`] from the provided form data, deriving
    /// the computed fields.
    #[must_use]
    pub fn new(
        client: Client,
        event: Event,
        headcount: Headcount,
        prices: PriceList,
    ) -> Self {
        let totals = Totals::of(headcount, prices);
        Self {
            id: Id::new(),
            client,
            event,
            headcount,
            prices,
            totals,
            created_at: DateTime::now(),
        }
    }
}

/// ID of a [`Contract`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of the contracting client (the CONTRATANTE party).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Client {
    /// Full name of the client.
    pub name: ClientName,

    /// CPF of the client.
    pub cpf: Cpf,

    /// RG of the client.
    pub rg: Rg,

    /// Street address the client resides at.
    pub address: Address,
}

/// Name of a contracting [`Client`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct ClientName(String);

impl ClientName {
    /// Creates a new [`ClientName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`ClientName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for ClientName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ClientName`")
    }
}

impl TryFrom<String> for ClientName {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `ClientName`")
    }
}

impl From<ClientName> for String {
    fn from(name: ClientName) -> Self {
        name.0
    }
}

/// CPF of a contracting [`Client`].
///
/// Stored as its 11 bare digits; [`fmt::Display`] renders the usual
/// `000.000.000-00` punctuation.
#[derive(AsRef, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Creates a new [`Cpf`] from the provided input, ignoring any
    /// punctuation in it.
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Option<Self> {
        let digits: String = input
            .as_ref()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        (digits.len() == 11).then_some(Self(digits))
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl FromStr for Cpf {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Cpf`")
    }
}

impl TryFrom<String> for Cpf {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Cpf`")
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// RG of a contracting [`Client`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct Rg(String);

impl Rg {
    /// Creates a new [`Rg`] if the given `rg` is valid.
    #[must_use]
    pub fn new(rg: impl Into<String>) -> Option<Self> {
        let rg = rg.into();
        Self::check(&rg).then_some(Self(rg))
    }

    /// Checks whether the given `rg` is a valid [`Rg`].
    fn check(rg: impl AsRef<str>) -> bool {
        let rg = rg.as_ref();
        rg.trim() == rg && !rg.is_empty() && rg.len() <= 32
    }
}

impl FromStr for Rg {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Rg`")
    }
}

impl TryFrom<String> for Rg {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Rg`")
    }
}

impl From<Rg> for String {
    fn from(rg: Rg) -> Self {
        rg.0
    }
}

/// Free-text street address.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address
            && !address.is_empty()
            && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

impl TryFrom<String> for Address {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// Date of an [`Event`], kept exactly as written on the form.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(into = "String", try_from = "String")]
pub struct EventDate(String);

impl EventDate {
    /// Creates a new [`EventDate`] if the given `date` is valid.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Option<Self> {
        let date = date.into();
        Self::check(&date).then_some(Self(date))
    }

    /// Checks whether the given `date` is a valid [`EventDate`].
    fn check(date: impl AsRef<str>) -> bool {
        let date = date.as_ref();
        date.trim() == date && !date.is_empty() && date.len() <= 64
    }
}

impl FromStr for EventDate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `EventDate`")
    }
}

impl TryFrom<String> for EventDate {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `EventDate`")
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        date.0
    }
}

/// Facts about the catered event.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Event {
    /// Date of the event, as written on the form.
    pub date: EventDate,

    /// Address the event takes place at.
    pub address: Address,

    /// Wall-clock time the service starts at.
    pub starts_at: ClockTime,

    /// Wall-clock time the service ends at, always derived from
    /// `starts_at`.
    pub ends_at: ClockTime,
}

impl Event {
    /// Schedules a new [`Event`], deriving the end time from the start
    /// time.
    #[must_use]
    pub fn schedule(
        date: EventDate,
        address: Address,
        starts_at: ClockTime,
    ) -> Self {
        Self {
            date,
            address,
            starts_at,
            ends_at: starts_at + pricing::SERVICE_DURATION,
        }
    }
}

/// Number of guests and separately hired staff of an [`Event`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Headcount {
    /// Number of adult guests.
    pub adults: u32,

    /// Number of child guests.
    pub children: u32,

    /// Number of extra waiters hired beyond the base staffing.
    pub extra_waiters: u32,
}

/// Unit prices agreed for an [`Event`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PriceList {
    /// Price charged per adult guest.
    pub per_adult: common::Money,

    /// Price charged per child guest.
    pub per_child: common::Money,

    /// Price charged per extra waiter.
    pub per_extra_waiter: common::Money,
}

#[cfg(test)]
mod spec {
    use common::ClockTime;

    use super::{Address, ClientName, Cpf, Event, EventDate};

    #[test]
    fn client_name_rejects_malformed_input() {
        assert!(ClientName::new("Maria da Silva").is_some());
        assert!(ClientName::new("").is_none());
        assert!(ClientName::new(" padded ").is_none());
    }

    #[test]
    fn cpf_ignores_punctuation() {
        let bare = Cpf::new("03498838903").unwrap();
        let punctuated = Cpf::new("034.988.389-03").unwrap();

        assert_eq!(bare, punctuated);
        assert_eq!(bare.to_string(), "034.988.389-03");

        assert!(Cpf::new("1234").is_none());
        assert!(Cpf::new("").is_none());
    }

    #[test]
    fn event_derives_end_time() {
        let event = Event::schedule(
            EventDate::new("15/06/2025").unwrap(),
            Address::new("Av. Paraná, 100").unwrap(),
            ClockTime::new(20, 30).unwrap(),
        );

        assert_eq!(event.ends_at.to_string(), "23:30");

        let late = Event::schedule(
            EventDate::new("15/06/2025").unwrap(),
            Address::new("Av. Paraná, 100").unwrap(),
            ClockTime::new(22, 0).unwrap(),
        );

        assert_eq!(late.ends_at.to_string(), "01:00");
    }
}
