//! [`Command`] for persisting a finalized [`Contract`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::contract::{Client, Event, Headcount, PriceList},
    infra::{store, Store},
    Contract, Service,
};

use super::Command;

/// [`Command`] for persisting a finalized [`Contract`].
///
/// The record is derived and appended as-is. Editing an agreement later
/// produces a whole new [`Contract`], stored totals are never mutated.
#[derive(Clone, Debug)]
pub struct SaveContract {
    /// Identity of the contracting client.
    pub client: Client,

    /// Facts about the catered event.
    pub event: Event,

    /// Number of guests and separately hired staff.
    pub headcount: Headcount,

    /// Unit prices agreed for the event.
    pub prices: PriceList,
}

impl<S> Command<SaveContract> for Service<S>
where
    S: Store<Insert<Contract>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Contract;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SaveContract) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SaveContract {
            client,
            event,
            headcount,
            prices,
        } = cmd;

        let contract = Contract::new(client, event, headcount, prices);
        self.store()
            .execute(Insert(contract.clone()))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(id = %contract.id, "`Contract` persisted");

        Ok(contract)
    }
}

/// Error of [`SaveContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    #[from]
    Store(store::Error),
}
