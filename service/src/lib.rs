//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod render;

use serde::Deserialize;
use smart_default::SmartDefault;

#[cfg(doc)]
use infra::Store;

pub use self::{command::Command, domain::Contract, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Identity of the catering company.
    pub company: Company,
}

/// Identity of the catering company: the CONTRATADA party of every
/// generated document.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Company {
    /// Trade name, as printed on headings and signatures.
    #[default("JULIO'S PIZZA HOUSE".to_owned())]
    pub name: String,

    /// Seat description embedded in the CONTRATADA paragraph.
    #[default(
        "com sede em Londrina, na Rua Alzira Postali Gewrher, nº 119, \
         bairro Jardim Catuai, Cep 86086-230, no Estado Paraná"
            .to_owned()
    )]
    pub seat: String,

    /// CPF the company is registered under.
    #[default("034.988.389-03".to_owned())]
    pub cpf: String,

    /// Name of the person representing the company.
    #[default("Júlio Cesar Fermino".to_owned())]
    pub representative: String,

    /// City stamped next to the date on printed documents.
    #[default("Londrina".to_owned())]
    pub city: String,

    /// Payment instructions for the down payment.
    #[default(
        "depositados em conta, caixa econômica Ag: 1479 \
         conta: 00028090-5 conta corrente"
            .to_owned()
    )]
    pub bank_instructions: String,
}

/// Domain service.
#[derive(Debug)]
pub struct Service<S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Store`] of this [`Service`].
    store: S,
}

impl<S> Service<S> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Store`] of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
