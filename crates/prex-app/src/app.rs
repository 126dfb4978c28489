//! Command execution against an editing session.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use prex_core::{Editor, EditorConfig, ElementPatch, ProjectData, Storage};

use crate::cli::Command;

mod file_ops {
    use super::*;

    /// Write the deck to a project file.
    pub fn export_project(project: &ProjectData, path: &Path) -> Result<()> {
        let json = project
            .to_json_pretty()
            .context("Failed to serialize project")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Saved project to: {:?}", path);
        Ok(())
    }

    /// Read and parse a project file. Validation happens on import.
    pub fn load_project(path: &Path) -> Result<ProjectData> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let project = ProjectData::from_json(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded project from: {:?}", path);
        Ok(project)
    }
}

/// The CLI application: one editing session over a storage backend.
pub struct App<S: Storage> {
    editor: Editor<S>,
}

impl<S: Storage> App<S> {
    /// Restore the stored deck.
    pub async fn open(storage: Arc<S>, config: &EditorConfig) -> Self {
        Self {
            editor: Editor::open(storage, config).await,
        }
    }

    pub fn editor(&self) -> &Editor<S> {
        &self.editor
    }

    /// Apply one command and return what to print.
    ///
    /// Refused operations are reported as errors so scripts can tell.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        let editor = &mut self.editor;
        let output = match command {
            Command::Show => editor.export_document().to_json_pretty()?,
            Command::AddSlide { x, y } => {
                if !editor.add_slide(x, y) {
                    bail!("Cell ({}, {}) is already occupied", x, y);
                }
                prex_core::GridCoord::new(x, y).slide_id().to_string()
            }
            Command::Insert { direction } => {
                let from = editor.deck().current_slide_id();
                let id = editor
                    .insert_adjacent(from, direction.into())
                    .with_context(|| format!("Could not insert next to {}", from))?;
                id.to_string()
            }
            Command::RemoveSlide { id } => {
                if !editor.remove_slide(id) {
                    bail!("Cannot remove {}: missing or last slide", id);
                }
                format!("Removed {}", id)
            }
            Command::Focus { id } => {
                if !editor.focus_slide(id) {
                    bail!("No slide {}", id);
                }
                id.to_string()
            }
            Command::Navigate { direction } => {
                if !editor.navigate(direction.into()) {
                    bail!("No slide {:?} of {}", direction, editor.deck().current_slide_id());
                }
                editor.deck().current_slide_id().to_string()
            }
            Command::AddText { text } => {
                let id = editor
                    .add_text(text.as_deref())
                    .context("Focused slide vanished")?;
                id.to_string()
            }
            Command::AddMedia { path } => {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let extension = path.extension().and_then(|e| e.to_str());
                let id = editor
                    .add_media(&bytes, extension)
                    .with_context(|| format!("Unsupported media {}", path.display()))?
                    .context("Focused slide vanished")?;
                id.to_string()
            }
            Command::UpdateElement { slide, element, patch } => {
                let patch: ElementPatch =
                    serde_json::from_str(&patch).context("Invalid element patch")?;
                if !editor.update_element(slide, element, &patch) {
                    bail!("No element {} on {}", element, slide);
                }
                let updated = editor
                    .deck()
                    .element(slide, element)
                    .context("Element vanished")?;
                serde_json::to_string_pretty(updated)?
            }
            Command::RemoveElement { slide, element } => {
                if !editor.remove_element(slide, element) {
                    bail!("No element {} on {}", element, slide);
                }
                format!("Removed {}", element)
            }
            Command::Export { path } => {
                file_ops::export_project(&editor.export_document(), &path)?;
                path.display().to_string()
            }
            Command::Import { path } => {
                let project = file_ops::load_project(&path)?;
                editor
                    .import_document(project)
                    .with_context(|| format!("Rejected {}", path.display()))?;
                editor.deck().current_slide_id().to_string()
            }
            Command::Reset => {
                editor.reset();
                editor.deck().current_slide_id().to_string()
            }
        };
        Ok(output)
    }

    /// Persist whatever the last command changed.
    pub async fn flush(&mut self) -> bool {
        self.editor.flush().await
    }
}
