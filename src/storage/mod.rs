//! Durable key-value storage and the typed repository on top of it.

mod error;
mod repository;
mod store;

pub use error::StoreError;
pub use repository::Repository;
pub use store::{FileStore, KeyValueStore};
#[cfg(test)]
pub use store::MemoryStore;
