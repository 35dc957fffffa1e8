//! Domain entities.

pub mod contract;
pub mod pricing;

pub use self::{contract::Contract, pricing::Totals};
