//! Local durable key/value storage for preview snapshots.
//!
//! Reads and writes are synchronous: the preview store writes through on
//! every mutation and expects the bytes to be on disk when the call returns.

use crate::error::DbResult;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Byte-string key/value store scoped to one installation.
pub trait LocalStorage: Send + Sync {
    /// Returns the bytes stored under `key`, if any.
    ///
    /// ## Errors
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> DbResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// ## Errors
    /// Returns an error if the underlying store cannot be written.
    fn set(&self, key: &str, value: &[u8]) -> DbResult<()>;
}
