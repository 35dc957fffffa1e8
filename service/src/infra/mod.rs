//! Infrastructure layer.

pub mod store;

pub use self::store::{JsonFile, Memory, Store};
