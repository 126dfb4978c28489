//! Storage abstraction for persistence.
//!
//! Backends are opaque named byte stores. What goes into a record is decided
//! by the [`AutoSaveManager`], not by the backend.

mod autosave;
mod file;
mod memory;

pub use autosave::{AutoSaveManager, STORAGE_KEY};
pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for named byte-record stores.
///
/// Implementations can keep records in memory, on the filesystem, or in any
/// key-value blob store.
pub trait Storage: Send + Sync {
    /// Read a record. A missing record is `Ok(None)`, not an error.
    fn read(&self, name: &str) -> BoxFuture<'_, StorageResult<Option<Vec<u8>>>>;

    /// Create or replace a record.
    fn write(&self, name: &str, bytes: Vec<u8>) -> BoxFuture<'_, StorageResult<()>>;

    /// Delete a record. Erasing a missing record succeeds.
    fn erase(&self, name: &str) -> BoxFuture<'_, StorageResult<()>>;
}
