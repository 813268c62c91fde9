//! Storage: client-local key-value slots the persistence layer writes through.
//!
//! `MemoryStorage` backs tests and embedding; `FileStorage` is what the binary uses,
//! one file per slot under a profile directory. Both enforce a byte quota the way
//! browser local storage does.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::StorageError;

/// Typical browser local-storage quota.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// A flat string-to-string slot store. Writes are whole-value replacements;
/// concurrent writers race with last-write-wins.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Keys double as file names, so they are restricted to `[A-Za-z0-9_-]+`.
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
