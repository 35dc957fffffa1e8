//! [`Query`] collection related to a single [`Contract`].

use common::operations::By;

use crate::domain::{contract, Contract};
#[cfg(doc)]
use crate::Query;

use super::StoreQuery;

/// Queries a [`Contract`] by its [`contract::Id`].
pub type ById = StoreQuery<By<Option<Contract>, contract::Id>>;
