//! JSON file implementation of a [`Store`].

use std::{cell::RefCell, fs, path::PathBuf};

use common::operations::{By, Insert, Select};
use tracerr::Traced;
use tracing as log;

use crate::domain::{contract, Contract};

use super::{Error, Store};

/// [`Store`] persisting [`Contract`]s as a single JSON file.
///
/// All records are kept in memory and the whole file is rewritten on
/// every [`Insert`], which is adequate for the tens of contracts this
/// tool manages.
#[derive(Debug)]
pub struct JsonFile {
    /// Path of the backing JSON file.
    path: PathBuf,

    /// In-memory view of the persisted records.
    records: RefCell<Vec<Contract>>,
}

impl JsonFile {
    /// Initializes a new [`JsonFile`] [`Store`] backed by the file at the
    /// provided `path`.
    ///
    /// The initial dataset is resolved in order: the `preloaded` JSON
    /// dump wins if provided, then an existing file at `path` is loaded,
    /// and otherwise the [`Store`] starts empty.
    ///
    /// # Errors
    ///
    /// If the backing file cannot be read or decoded.
    pub fn init(
        path: impl Into<PathBuf>,
        preloaded: Option<&str>,
    ) -> Result<Self, Traced<Error>> {
        let path = path.into();

        let records = if let Some(dump) = preloaded {
            log::info!(path = %path.display(), "loading injected dataset");
            serde_json::from_str(dump)
                .map_err(tracerr::from_and_wrap!(=> Error))?
        } else if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(tracerr::from_and_wrap!(=> Error))?;
            serde_json::from_str(&raw)
                .map_err(tracerr::from_and_wrap!(=> Error))?
        } else {
            log::info!(path = %path.display(), "starting with an empty store");
            Vec::new()
        };

        Ok(Self {
            path,
            records: RefCell::new(records),
        })
    }

    /// Rewrites the backing file with the current records.
    ///
    /// Writes to a sibling temporary file first and renames it over, so
    /// an interrupted write cannot truncate the previous dataset.
    fn persist(&self) -> Result<(), Traced<Error>> {
        let encoded = serde_json::to_string_pretty(&*self.records.borrow())
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(tracerr::from_and_wrap!(=> Error))?;
        fs::rename(&tmp, &self.path)
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl Store<Insert<Contract>> for JsonFile {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(contract): Insert<Contract>,
    ) -> Result<Self::Ok, Self::Err> {
        self.records.borrow_mut().push(contract);
        self.persist().inspect_err(|_| {
            // Keep the in-memory view consistent with the file.
            drop(self.records.borrow_mut().pop());
        })
    }
}

impl Store<Select<By<Vec<Contract>, ()>>> for JsonFile {
    type Ok = Vec<Contract>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        _: Select<By<Vec<Contract>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.records.borrow().clone())
    }
}

impl Store<Select<By<Option<Contract>, contract::Id>>> for JsonFile {
    type Ok = Option<Contract>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Contract>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.records.borrow().iter().find(|c| c.id == id).cloned())
    }
}
