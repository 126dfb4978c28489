//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read(&self, name: &str) -> BoxFuture<'_, StorageResult<Option<Vec<u8>>>> {
        let name = name.to_string();
        Box::pin(async move {
            let records = self.records.read().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            Ok(records.get(&name).cloned())
        })
    }

    fn write(&self, name: &str, bytes: Vec<u8>) -> BoxFuture<'_, StorageResult<()>> {
        let name = name.to_string();
        Box::pin(async move {
            let mut records = self.records.write().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            records.insert(name, bytes);
            Ok(())
        })
    }

    fn erase(&self, name: &str) -> BoxFuture<'_, StorageResult<()>> {
        let name = name.to_string();
        Box::pin(async move {
            let mut records = self.records.write().map_err(|e| {
                StorageError::Other(format!("Lock error: {}", e))
            })?;
            records.remove(&name);
            Ok(())
        })
    }
}
