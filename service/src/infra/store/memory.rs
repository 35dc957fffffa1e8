//! In-memory implementation of a [`Store`].

use std::cell::RefCell;

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::domain::{contract, Contract};

use super::{Error, Store};

/// [`Store`] keeping [`Contract`]s in memory only.
///
/// Nothing outlives the process. Useful for previews and tests.
#[derive(Debug, Default)]
pub struct Memory(RefCell<Vec<Contract>>);

impl Store<Insert<Contract>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(contract): Insert<Contract>,
    ) -> Result<Self::Ok, Self::Err> {
        self.0.borrow_mut().push(contract);
        Ok(())
    }
}

impl Store<Select<By<Vec<Contract>, ()>>> for Memory {
    type Ok = Vec<Contract>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        _: Select<By<Vec<Contract>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.borrow().clone())
    }
}

impl Store<Select<By<Option<Contract>, contract::Id>>> for Memory {
    type Ok = Option<Contract>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Contract>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.0.borrow().iter().find(|c| c.id == id).cloned())
    }
}
