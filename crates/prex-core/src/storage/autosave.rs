//! Auto-save: mirrors the persisted subset of a deck into storage.
//!
//! Every mutation hands the manager a fresh snapshot; the host flushes it
//! whenever convenient. Only the newest pending snapshot is kept, and a
//! failed write is logged and dropped without retry.

use crate::deck::Deck;
use crate::project::ProjectData;
use crate::storage::{Storage, StorageError, StorageResult};
use std::sync::Arc;

/// Fixed record name for the persisted deck.
pub const STORAGE_KEY: &str = "prex-storage";

/// Manages automatic deck persistence.
pub struct AutoSaveManager<S: Storage> {
    /// Storage backend.
    storage: Arc<S>,
    /// Record name the deck is stored under.
    key: String,
    /// Serialized snapshot waiting to be written.
    pending: Option<Vec<u8>>,
    /// Number of successful writes.
    saves: u64,
}

impl<S: Storage> AutoSaveManager<S> {
    /// Create a new auto-save manager with the given storage backend.
    pub fn new(storage: Arc<S>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Create a manager that stores under a custom record name.
    pub fn with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            pending: None,
            saves: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Record the deck's current state as the next thing to write.
    ///
    /// Replaces any snapshot that has not been flushed yet.
    pub fn mark_dirty(&mut self, deck: &Deck) {
        match deck.export_document().to_bytes() {
            Ok(bytes) => self.pending = Some(bytes),
            Err(e) => log::warn!("Failed to serialize deck for autosave: {}", e),
        }
    }

    /// Check if a snapshot is waiting to be written.
    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of snapshots written so far.
    pub fn saves(&self) -> u64 {
        self.saves
    }

    /// Write the pending snapshot, if any.
    ///
    /// Returns true if a snapshot was written. Failures are logged and the
    /// snapshot is discarded.
    pub async fn flush(&mut self) -> bool {
        let Some(bytes) = self.pending.take() else {
            return false;
        };
        match self.storage.write(&self.key, bytes).await {
            Ok(()) => {
                self.saves += 1;
                true
            }
            Err(e) => {
                log::warn!("Autosave to {:?} failed: {}", self.key, e);
                false
            }
        }
    }

    /// Read the stored project without validating it.
    pub async fn load(&self) -> StorageResult<Option<ProjectData>> {
        let Some(bytes) = self.storage.read(&self.key).await? else {
            return Ok(None);
        };
        ProjectData::from_bytes(&bytes)
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Restore the stored deck.
    ///
    /// An absent record starts a fresh single-slide deck. An unreadable or
    /// malformed record does too, with a warning.
    pub async fn restore(&self, unit: f64) -> Deck {
        match self.load().await {
            Ok(Some(project)) => match Deck::from_project(project, unit) {
                Ok(deck) => {
                    log::info!("Restored deck with {} slide(s)", deck.len());
                    deck
                }
                Err(e) => {
                    log::warn!("Ignoring stored deck: {}", e);
                    Deck::with_unit(unit)
                }
            },
            Ok(None) => Deck::with_unit(unit),
            Err(e) => {
                log::warn!("Could not read stored deck: {}", e);
                Deck::with_unit(unit)
            }
        }
    }

    /// Erase the stored deck and drop any pending snapshot.
    pub async fn clear(&mut self) -> StorageResult<()> {
        self.pending = None;
        self.storage.erase(&self.key).await
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}
