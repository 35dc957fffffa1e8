//! [`Query`] collection related to the multiple [`Contract`]s.

use common::operations::By;

use crate::domain::Contract;
#[cfg(doc)]
use crate::Query;

use super::StoreQuery;

/// Queries all the [`Contract`]s in creation order.
pub type List = StoreQuery<By<Vec<Contract>, ()>>;
