//! Prex Core Library
//!
//! Platform-agnostic data structures and logic for Prex, a presentation
//! editor whose slides live on an infinite two-dimensional grid.

pub mod camera;
pub mod config;
pub mod deck;
pub mod editor;
pub mod element;
pub mod grid;
pub mod media;
pub mod project;
pub mod slide;
pub mod storage;
pub mod style;

pub use camera::{Camera, DEFAULT_VIEWPORT_UNIT};
pub use config::{ConfigError, EditorConfig};
pub use deck::Deck;
pub use editor::{Editor, Selection};
pub use element::{Element, ElementId, ElementKind, ElementPatch};
pub use grid::{Axis, Direction, GridCoord, InsertDirection, SlideId, SlideIdParseError};
pub use media::{MediaError, MediaFormat, MediaSource};
pub use project::{ProjectData, ProjectError, SlideRecord, PROJECT_EXTENSION};
pub use slide::{Slide, SlideHandle};
pub use storage::{AutoSaveManager, Storage, StorageError, StorageResult, STORAGE_KEY};
