//! Local key/value persistence for client state.
//!
//! Mirrors the small surface a mobile client gets from its device storage:
//! string keys mapping to serialized JSON strings. Stores that need to survive
//! a restart (the cart, the signed-in session) are written through a
//! [`LocalStorage`] so tests can swap the file adapter for [`MemoryStorage`].

use std::io;

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Synchronous key/value storage.
pub trait LocalStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Errors raised by [`LocalStorage`] adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage key {0:?} is not a valid file name")]
    InvalidKey(String),

    #[error("storage io error")]
    Io(#[from] io::Error),

    #[error("failed to persist storage file")]
    Persist(#[from] tempfile::PersistError),
}
