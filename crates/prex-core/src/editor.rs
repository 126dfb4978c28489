//! The editing session.
//!
//! [`Editor`] owns the deck together with the transient UI state that is
//! never persisted (selection, presentation mode) and the autosave manager.
//! Every mutation that changes the deck hands a fresh snapshot to autosave;
//! the host decides when to [`Editor::flush`].

use crate::config::EditorConfig;
use crate::deck::Deck;
use crate::element::{Element, ElementId, ElementKind, ElementPatch};
use crate::grid::{Direction, InsertDirection, SlideId};
use crate::media::{MediaError, MediaSource};
use crate::project::{ProjectData, ProjectError};
use crate::storage::{AutoSaveManager, Storage, StorageResult};
use std::sync::Arc;

/// Placeholder content for text added without any.
pub const DEFAULT_TEXT: &str = "Double click to edit";

/// The element being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub slide: SlideId,
    pub element: ElementId,
}

/// A deck plus session state.
pub struct Editor<S: Storage> {
    deck: Deck,
    selection: Option<Selection>,
    presenting: bool,
    autosave: AutoSaveManager<S>,
}

impl<S: Storage> Editor<S> {
    pub fn new(deck: Deck, autosave: AutoSaveManager<S>) -> Self {
        Self {
            deck,
            selection: None,
            presenting: false,
            autosave,
        }
    }

    /// Open a session on `storage`, restoring whatever deck it holds.
    pub async fn open(storage: Arc<S>, config: &EditorConfig) -> Self {
        let autosave = AutoSaveManager::with_key(storage, config.storage_key.clone());
        let deck = autosave.restore(config.viewport_unit).await;
        Self::new(deck, autosave)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn autosave(&self) -> &AutoSaveManager<S> {
        &self.autosave
    }

    /// Whether a snapshot is waiting to be written.
    pub fn is_dirty(&self) -> bool {
        self.autosave.is_dirty()
    }

    /// Write the pending snapshot, if any.
    pub async fn flush(&mut self) -> bool {
        self.autosave.flush().await
    }

    /// Record a deck change: re-address or drop the selection, then
    /// snapshot for autosave.
    fn commit(&mut self) {
        if let Some(selection) = self.selection {
            self.selection = self
                .deck
                .locate_element(selection.element)
                .map(|slide| Selection { slide, ..selection });
        }
        self.autosave.mark_dirty(&self.deck);
    }

    fn committed(&mut self, changed: bool) -> bool {
        if changed {
            self.commit();
        }
        changed
    }

    // ---------------------------------------------------------------
    // Slides and camera
    // ---------------------------------------------------------------

    pub fn add_slide(&mut self, x: i64, y: i64) -> bool {
        let changed = self.deck.add_slide(x, y);
        self.committed(changed)
    }

    /// Insert a slide next to `from` and focus it.
    pub fn insert_adjacent(&mut self, from: SlideId, direction: InsertDirection) -> Option<SlideId> {
        let id = self.deck.insert_adjacent(from, direction)?;
        self.deck.focus_slide(id);
        self.commit();
        Some(id)
    }

    pub fn remove_slide(&mut self, id: SlideId) -> bool {
        let changed = self.deck.remove_slide(id);
        self.committed(changed)
    }

    pub fn focus_slide(&mut self, id: SlideId) -> bool {
        let changed = self.deck.focus_slide(id);
        self.committed(changed)
    }

    /// Focus the slide next to the current one, if there is one.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(id) = self.deck.neighbor(direction).map(|s| s.id()) else {
            return false;
        };
        self.focus_slide(id)
    }

    pub fn set_camera_raw(&mut self, x: f64, y: f64) {
        self.deck.set_camera_raw(x, y);
        self.commit();
    }

    // ---------------------------------------------------------------
    // Elements
    // ---------------------------------------------------------------

    pub fn add_element(
        &mut self,
        slide: SlideId,
        kind: ElementKind,
        content: impl Into<String>,
        overrides: &ElementPatch,
    ) -> Option<ElementId> {
        let id = self.deck.add_element(slide, kind, content, overrides)?;
        self.commit();
        Some(id)
    }

    /// Add a text element to the focused slide.
    pub fn add_text(&mut self, text: Option<&str>) -> Option<ElementId> {
        let slide = self.deck.current_slide_id();
        self.add_element(slide, ElementKind::Text, text.unwrap_or(DEFAULT_TEXT), &ElementPatch::new())
    }

    /// Add an image or video element to the focused slide from raw bytes.
    ///
    /// `extension` is only consulted when the bytes are not recognized.
    pub fn add_media(&mut self, data: &[u8], extension: Option<&str>) -> Result<Option<ElementId>, MediaError> {
        let source = MediaSource::from_bytes(data, extension)?;
        let slide = self.deck.current_slide_id();
        log::debug!("Adding {:?} ({} bytes) to {}", source.format, data.len(), slide);
        Ok(self.add_element(slide, source.kind(), source.data_url, &ElementPatch::new()))
    }

    pub fn update_element(&mut self, slide: SlideId, element: ElementId, patch: &ElementPatch) -> bool {
        let changed = self.deck.update_element(slide, element, patch);
        self.committed(changed)
    }

    pub fn remove_element(&mut self, slide: SlideId, element: ElementId) -> bool {
        let changed = self.deck.remove_element(slide, element);
        self.committed(changed)
    }

    // ---------------------------------------------------------------
    // Selection and presentation
    // ---------------------------------------------------------------

    /// Select an element. Refused while presenting or if it doesn't resolve.
    pub fn select(&mut self, slide: SlideId, element: ElementId) -> bool {
        if self.presenting || self.deck.element(slide, element).is_none() {
            return false;
        }
        self.selection = Some(Selection { slide, element });
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_element(&self) -> Option<&Element> {
        let selection = self.selection?;
        self.deck.element(selection.slide, selection.element)
    }

    /// Enter or leave presentation mode. Entering clears the selection.
    pub fn set_presenting(&mut self, presenting: bool) {
        if presenting {
            self.selection = None;
        }
        self.presenting = presenting;
    }

    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    // ---------------------------------------------------------------
    // Documents
    // ---------------------------------------------------------------

    pub fn export_document(&self) -> ProjectData {
        self.deck.export_document()
    }

    /// Replace the deck with a project. The session is untouched on error.
    pub fn import_document(&mut self, project: ProjectData) -> Result<(), ProjectError> {
        self.deck.import_document(project)?;
        self.selection = None;
        self.commit();
        Ok(())
    }

    /// Start over with a single empty slide.
    pub fn reset(&mut self) {
        self.deck = Deck::with_unit(self.deck.unit());
        self.selection = None;
        self.commit();
    }

    /// Erase the stored deck without touching the open one.
    pub async fn clear_storage(&mut self) -> StorageResult<()> {
        self.autosave.clear().await
    }
}
