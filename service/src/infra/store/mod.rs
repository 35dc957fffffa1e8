//! [`Store`]-related implementations.

pub mod json_file;
pub mod memory;

use derive_more::{Display, Error as StdError, From};

pub use self::{json_file::JsonFile, memory::Memory};

/// Store operation.
pub use common::Handler as Store;

/// [`Store`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Filesystem error.
    #[display("filesystem operation failed: {_0}")]
    Io(std::io::Error),

    /// Records (de)serialization error.
    #[display("records (de)serialization failed: {_0}")]
    Codec(serde_json::Error),
}
