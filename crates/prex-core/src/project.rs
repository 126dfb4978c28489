//! Project files: the transferable form of a deck.
//!
//! A project is exactly `{slides, currentSlideId, camera}`. The same record
//! is written to `.prex` files and to the autosave store.

use crate::camera::Camera;
use crate::deck::Deck;
use crate::element::{Element, ElementId};
use crate::grid::{GridCoord, SlideId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// File extension for project files.
pub const PROJECT_EXTENSION: &str = "prex";

/// Reasons a project is rejected on import.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Malformed project: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Malformed project: no slides")]
    Empty,
    #[error("Malformed project: slide id {id:?} does not match its coordinate {coord}")]
    IdMismatch { id: String, coord: GridCoord },
    #[error("Malformed project: two slides at {0}")]
    DuplicateCoordinate(GridCoord),
    #[error("Malformed project: element {0} appears more than once")]
    DuplicateElement(ElementId),
    #[error("Malformed project: current slide {0:?} does not exist")]
    DanglingCurrentSlide(String),
}

/// One slide as written to a project file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub id: String,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl SlideRecord {
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x, self.y)
    }
}

/// The persisted subset of a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub slides: Vec<SlideRecord>,
    pub current_slide_id: String,
    pub camera: Camera,
}

impl ProjectData {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON. Structure only; see [`ProjectData::validate`].
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProjectError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Check the grid invariants a deck relies on.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.slides.is_empty() {
            return Err(ProjectError::Empty);
        }

        let mut coords = HashSet::with_capacity(self.slides.len());
        let mut elements = HashSet::new();
        for slide in &self.slides {
            let coord = slide.coord();
            if slide.id != coord.slide_id().to_string() {
                return Err(ProjectError::IdMismatch {
                    id: slide.id.clone(),
                    coord,
                });
            }
            if !coords.insert(coord) {
                return Err(ProjectError::DuplicateCoordinate(coord));
            }
            for element in &slide.elements {
                if !elements.insert(element.id) {
                    return Err(ProjectError::DuplicateElement(element.id));
                }
            }
        }

        let current = self
            .current_slide_id
            .parse::<SlideId>()
            .ok()
            .filter(|id| coords.contains(&id.coord()));
        if current.is_none() {
            return Err(ProjectError::DanglingCurrentSlide(self.current_slide_id.clone()));
        }
        Ok(())
    }
}

impl Deck {
    /// Snapshot the persisted subset. The result shares nothing with the deck.
    pub fn export_document(&self) -> ProjectData {
        ProjectData {
            slides: self
                .slides()
                .map(|s| SlideRecord {
                    id: s.id().to_string(),
                    x: s.coord().x,
                    y: s.coord().y,
                    elements: s.elements.clone(),
                })
                .collect(),
            current_slide_id: self.current_slide_id().to_string(),
            camera: self.camera(),
        }
    }

    /// Replace slides, focus and camera with `project`.
    ///
    /// The project is validated first; on error the deck is unchanged.
    pub fn import_document(&mut self, project: ProjectData) -> Result<(), ProjectError> {
        *self = Self::from_project(project, self.unit())?;
        Ok(())
    }

    /// Build a deck from a project file.
    pub fn from_project(project: ProjectData, unit: f64) -> Result<Self, ProjectError> {
        project.validate()?;
        let current = project
            .current_slide_id
            .parse::<SlideId>()
            .map_err(|_| ProjectError::DanglingCurrentSlide(project.current_slide_id.clone()))?;
        let slides = project
            .slides
            .into_iter()
            .map(|s| (GridCoord::new(s.x, s.y), s.elements))
            .collect();
        log::info!("Loaded project with current slide {}", current);
        Ok(Self::from_parts(slides, current.coord(), project.camera, unit))
    }
}
